//! Application context shared by commands
//!
//! Resolves where sea-selector keeps its files and loads the preferences once
//! per run.

use std::path::PathBuf;

use sea_core::{AppLayout, Preferences};

use crate::error::Result;

/// Layout plus the preferences loaded from it.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub layout: AppLayout,
    pub prefs: Preferences,
}

impl AppContext {
    /// Use `home` when given, otherwise the directory of the executable.
    pub fn resolve(home: Option<PathBuf>) -> Result<Self> {
        let layout = match home {
            Some(home) => AppLayout::new(home),
            None => AppLayout::from_executable()?,
        };
        let prefs = Preferences::load(&layout)?;
        tracing::debug!(home = %layout.home().display(), "Loaded preferences");
        Ok(Self { layout, prefs })
    }
}
