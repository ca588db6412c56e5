//! Image persistence: skip files already on disk, download and write the rest.

use std::path::PathBuf;

use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::Result;
use crate::media;

/// What happened to one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Bytes fetched and written.
    Downloaded,
    /// File already on disk; no network request was made.
    AlreadyPresent,
    /// Download failed; nothing was written and the run continues.
    Failed,
}

/// Writes timeline images under `<save_directory>/<user>/`.
pub struct ImageStore {
    http: Client,
    save_directory: PathBuf,
}

impl ImageStore {
    pub fn new(http: Client, save_directory: impl Into<PathBuf>) -> Self {
        Self {
            http,
            save_directory: save_directory.into(),
        }
    }

    /// Target file for a tweet's image.
    pub fn target_path(&self, user: &str, tweet_id: u64, url: &str) -> PathBuf {
        media::target_path(&self.save_directory, user, tweet_id, url)
    }

    /// Persist one image. Existing files are kept untouched, failed
    /// downloads are logged and reported back, filesystem failures are
    /// errors.
    pub async fn save(&self, user: &str, tweet_id: u64, url: &str) -> Result<SaveOutcome> {
        let path = self.target_path(user, tweet_id, url);

        if path.exists() {
            debug!(path = %path.display(), "Image already saved, skipping");
            return Ok(SaveOutcome::AlreadyPresent);
        }

        let response = match self.http.get(url).send().await {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                warn!(status = %resp.status(), url = %url, "Image download failed");
                return Ok(SaveOutcome::Failed);
            }
            Err(e) => {
                warn!(error = %e, url = %url, "Image download failed");
                return Ok(SaveOutcome::Failed);
            }
        };

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, url = %url, "Failed to read image body");
                return Ok(SaveOutcome::Failed);
            }
        };

        let mut file = File::create(&path).await?;
        file.write_all(&bytes).await?;

        Ok(SaveOutcome::Downloaded)
    }
}
