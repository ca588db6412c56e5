//! Timeline image backup command.

use std::fs;

use crate::config::Config;
use crate::download::{ImageStore, SaveOutcome};
use crate::error::Result;
use crate::media;
use crate::twitter::{TwitterClient, MAX_TIMELINE_TWEETS};

/// Counters for one backup run.
#[derive(Debug, Default, Clone)]
pub struct BackupReport {
    /// Tweets the timeline is expected to serve (clamped to the API limit).
    pub expected: u64,
    /// Tweets seen during the walk.
    pub scanned: u64,
    pub downloaded: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl BackupReport {
    /// Integer progress percentage against the expected count.
    pub fn percent_done(&self) -> u64 {
        if self.expected == 0 {
            return 0;
        }
        self.scanned * 100 / self.expected
    }
}

/// Back up every reachable image the user posted. Walks the timeline
/// backwards page by page until the API returns an empty page, persisting
/// each tweet's image along the way.
pub async fn run(client: &TwitterClient, config: &Config, user: &str) -> Result<BackupReport> {
    let token = client.authenticate(&config.key, &config.secret).await?;
    tracing::info!("Authenticated against the Twitter API");

    let expected = client.tweet_count(&token, user).await?;
    if expected == MAX_TIMELINE_TWEETS {
        tracing::warn!(
            "The API serves at most {} timeline tweets; older images cannot be reached",
            MAX_TIMELINE_TWEETS
        );
    }
    println!("Amount of tweets to search: {}", expected);

    let user_dir = config.save_directory.join(user);
    fs::create_dir_all(&user_dir)?;

    let store = ImageStore::new(client.http().clone(), &config.save_directory);
    let mut report = BackupReport {
        expected,
        ..Default::default()
    };
    let mut cursor: Option<u64> = None;

    loop {
        let page = client.fetch_timeline_page(&token, user, cursor).await?;
        if page.is_empty() {
            break;
        }

        for tweet in &page {
            report.scanned += 1;
            if let Some(url) = media::image_url(tweet) {
                println!("({}% done) Retrieving image: {}", report.percent_done(), url);
                match store.save(user, tweet.id, url).await? {
                    SaveOutcome::Downloaded => report.downloaded += 1,
                    SaveOutcome::AlreadyPresent => report.skipped += 1,
                    SaveOutcome::Failed => report.failed += 1,
                }
            }
        }

        // The page is newest-first; its last tweet is the oldest seen so far.
        cursor = page.last().map(|t| t.id);
    }

    tracing::info!(
        downloaded = report.downloaded,
        skipped = report.skipped,
        failed = report.failed,
        scanned = report.scanned,
        "Backup finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn backup_config(root: &std::path::Path) -> Config {
        Config {
            key: "k".to_string(),
            secret: "s".to_string(),
            save_directory: root.to_path_buf(),
        }
    }

    #[test]
    fn percent_done_guards_zero_expected() {
        let report = BackupReport::default();
        assert_eq!(report.percent_done(), 0);
    }

    #[test]
    fn percent_done_is_integer_share_of_expected() {
        let report = BackupReport {
            expected: 200,
            scanned: 50,
            ..Default::default()
        };
        assert_eq!(report.percent_done(), 25);
    }

    #[test]
    fn percent_done_can_pass_one_hundred_when_count_was_stale() {
        let report = BackupReport {
            expected: 100,
            scanned: 150,
            ..Default::default()
        };
        assert_eq!(report.percent_done(), 150);
    }

    #[tokio::test]
    async fn empty_first_page_finishes_immediately() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/oauth2/token");
            then.status(200).json_body(json!({
                "token_type": "bearer",
                "access_token": "tok"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/1.1/users/show.json");
            then.status(200).json_body(json!({ "statuses_count": 10 }));
        });
        let timeline_mock = server.mock(|when, then| {
            when.method(GET).path("/1.1/statuses/user_timeline.json");
            then.status(200).json_body(json!([]));
        });

        let tmp = tempdir().expect("tempdir");
        let client = TwitterClient::with_base_url(server.base_url()).expect("client");
        let config = backup_config(tmp.path());

        let report = run(&client, &config, "alice").await.unwrap();

        assert_eq!(report.expected, 10);
        assert_eq!(report.scanned, 0);
        assert_eq!(report.downloaded, 0);
        timeline_mock.assert_calls(1);
        // The user directory is created up front even when nothing is saved
        assert!(tmp.path().join("alice").is_dir());
    }

    #[tokio::test]
    async fn tweets_without_media_are_scanned_but_nothing_is_saved() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/oauth2/token");
            then.status(200).json_body(json!({
                "token_type": "bearer",
                "access_token": "tok"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/1.1/users/show.json");
            then.status(200).json_body(json!({ "statuses_count": 2 }));
        });
        let first_page = server.mock(|when, then| {
            when.method(GET)
                .path("/1.1/statuses/user_timeline.json")
                .query_param_missing("max_id");
            then.status(200).json_body(json!([
                { "id": 20, "text": "no media" },
                { "id": 10, "text": "still none" }
            ]));
        });
        let second_page = server.mock(|when, then| {
            when.method(GET)
                .path("/1.1/statuses/user_timeline.json")
                .query_param("max_id", "9");
            then.status(200).json_body(json!([]));
        });

        let tmp = tempdir().expect("tempdir");
        let client = TwitterClient::with_base_url(server.base_url()).expect("client");
        let config = backup_config(tmp.path());

        let report = run(&client, &config, "bob").await.unwrap();

        assert_eq!(report.scanned, 2);
        assert_eq!(report.downloaded, 0);
        assert_eq!(report.failed, 0);
        first_page.assert_calls(1);
        second_page.assert_calls(1);
    }
}
