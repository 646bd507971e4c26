//! Restore command implementation

use colored::Colorize;
use sea_core::restore_backup;

use crate::context::AppContext;
use crate::error::Result;

/// Run the restore command
pub fn run_restore(ctx: &AppContext) -> Result<()> {
    let report = restore_backup(&ctx.layout, &ctx.prefs)?;
    println!(
        "{} Restored {} from {}",
        "OK".green().bold(),
        report.target.display(),
        report.backup.display()
    );
    Ok(())
}
