//! Folder command implementation

use std::path::Path;

use colored::Colorize;
use sea_core::AppLayout;

use crate::context::AppContext;
use crate::error::Result;

/// Run the folder command
///
/// Without a path, prints the configured folder. With one, stores it.
pub fn run_folder(ctx: &mut AppContext, path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        match ctx.prefs.user_folder() {
            Some(folder) => println!("{}", folder.display()),
            None => println!(
                "{} No user folder configured (use {} to set one)",
                "!".yellow(),
                "sea folder <PATH>".cyan()
            ),
        }
        return Ok(());
    };

    let folder = ctx.prefs.set_user_folder(&ctx.layout, path)?;
    println!("{} User folder set to {}", "OK".green().bold(), folder.display());

    let target = AppLayout::target_file(&folder);
    if !target.is_file() {
        println!(
            "{} {} does not exist yet",
            "warning:".yellow().bold(),
            target.display()
        );
    }
    Ok(())
}
