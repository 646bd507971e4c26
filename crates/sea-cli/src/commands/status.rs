//! Status command implementation

use colored::{ColoredString, Colorize};
use sea_core::collect_status;

use crate::context::AppContext;
use crate::error::Result;

/// Run the status command
pub fn run_status(ctx: &AppContext, json: bool) -> Result<()> {
    let status = collect_status(&ctx.layout, &ctx.prefs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Sea Selector Status".bold());
    println!();
    println!("{}:     {}", "Home".dimmed(), status.home.display());
    println!(
        "{}:  {} ({} regions)",
        "Catalog".dimmed(),
        status.data_dir.display(),
        status.regions
    );
    println!();

    match &status.user_folder {
        Some(folder) => println!(
            "{}:   {} ({})",
            "Folder".dimmed(),
            folder.display(),
            flag(status.folder_exists, "found", "missing")
        ),
        None => println!(
            "{}:   {} (use {} to set)",
            "Folder".dimmed(),
            "None".dimmed(),
            "sea folder <PATH>".cyan()
        ),
    }
    if let Some(target) = &status.target {
        let state = if !status.target_exists {
            "missing".red()
        } else if status.target_has_bookmark {
            "bookmark found".green()
        } else {
            "no bookmark block".yellow()
        };
        println!("{}:   {} ({})", "Target".dimmed(), target.display(), state);
        if let Some(encoding) = &status.target_encoding {
            println!("{}: {}", "Encoding".dimmed(), encoding);
        }
    }
    println!(
        "{}:   {} ({})",
        "Backup".dimmed(),
        status.backup.display(),
        flag(status.backup_exists, "present", "none yet")
    );

    Ok(())
}

fn flag(value: bool, yes: &str, no: &str) -> ColoredString {
    if value { yes.green() } else { no.yellow() }
}
