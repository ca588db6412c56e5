//! Command implementations
//!
//! Each module corresponds to an operation exposed by the CLI.

pub mod backup;

pub use backup::{run as backup_run, BackupReport};
