//! Image selection and target path mapping for downloaded media.

use std::path::{Path, PathBuf};

use crate::twitter::Tweet;

/// The image URL of a tweet, if it has one. Every media descriptor is
/// inspected and the last one carrying a URL wins.
pub fn image_url(tweet: &Tweet) -> Option<&str> {
    let mut url = None;
    for media in &tweet.entities.media {
        if let Some(ref u) = media.media_url {
            url = Some(u.as_str());
        }
    }
    url
}

/// The last four characters of the URL, which conventionally hold the file
/// extension (".jpg", ".png"). Shorter URLs are returned whole.
pub fn url_suffix(url: &str) -> &str {
    match url.char_indices().rev().nth(3) {
        Some((idx, _)) => &url[idx..],
        None => url,
    }
}

/// Where a tweet's image lands on disk:
/// `<save_directory>/<user>/<tweet-id><url suffix>`.
pub fn target_path(save_directory: &Path, user: &str, tweet_id: u64, url: &str) -> PathBuf {
    save_directory
        .join(user)
        .join(format!("{}{}", tweet_id, url_suffix(url)))
}
