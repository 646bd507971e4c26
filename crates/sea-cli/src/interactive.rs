//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;
use sea_core::RegionEntry;

use crate::error::Result;

/// Let the user choose one region by typing part of its name.
///
/// Returns `None` if the prompt was dismissed.
pub fn pick_region(regions: &[&RegionEntry]) -> Result<Option<String>> {
    let names: Vec<&str> = regions.iter().map(|entry| entry.name.as_str()).collect();

    let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Sea region")
        .items(&names)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|idx| names[idx].to_string()))
}
