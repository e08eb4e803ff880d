//! I/O boundary traits for testability
//!
//! These traits abstract where snapshot data comes from and where user
//! notifications go, allowing services to be tested with mock implementations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Snapshot;
use crate::infrastructure::demo;

/// Supplies the current user/referral snapshot.
pub trait DataProvider: Send + Sync {
    fn snapshot(&self) -> ApplicationResult<Snapshot>;
}

/// A short message shown to the user (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// How long the message stays visible; `None` for the default
    pub duration: Option<Duration>,
}

/// Delivers notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Built-in demo data.
#[derive(Debug, Default)]
pub struct DemoDataProvider;

impl DataProvider for DemoDataProvider {
    fn snapshot(&self) -> ApplicationResult<Snapshot> {
        Ok(demo::snapshot())
    }
}

/// Snapshot read from a TOML file on every request.
#[derive(Debug, Clone)]
pub struct FileDataProvider {
    path: PathBuf,
}

impl FileDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for FileDataProvider {
    fn snapshot(&self) -> ApplicationResult<Snapshot> {
        debug!("snapshot: path={}", self.path.display());
        let content =
            std::fs::read_to_string(&self.path).with_path_context("read snapshot", &self.path)?;
        let snapshot: Snapshot =
            toml::from_str(&content).map_err(|e| ApplicationError::DataProvider {
                message: format!("parse {}: {}", self.path.display(), e),
            })?;
        snapshot
            .validate_levels()
            .map_err(|message| ApplicationError::DataProvider {
                message: format!("{}: {}", self.path.display(), message),
            })?;
        Ok(snapshot)
    }
}

/// Prints notifications to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        info!("notify: {}", notification.title);
        println!(
            "{} {}",
            "»".magenta(),
            notification.title.as_str().magenta().bold()
        );
        println!("  {}", notification.body);
    }
}
