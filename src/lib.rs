//! Twitter Image Backup Library
//!
//! This library provides tools to:
//! - Authenticate against the Twitter API with application-only credentials
//! - Walk a user's timeline backwards through the paginated REST API
//! - Wait out rate limits instead of failing the run
//! - Download tweet images into a per-user backup directory, skipping
//!   files that already exist

pub mod config;
pub mod download;
pub mod error;
pub mod media;
pub mod twitter;

// Re-export common types
pub use config::{Config, CONFIG_TEMPLATE};
pub use download::{ImageStore, SaveOutcome};
pub use error::{Error, Result};
pub use twitter::{Clock, SystemClock, Tweet, TwitterClient, MAX_TIMELINE_TWEETS, PAGE_SIZE};

// Commands module uses re-exported types, so it must be declared after the re-exports
pub mod commands;
