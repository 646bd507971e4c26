//! Apply and pick command implementations

use colored::Colorize;
use sea_core::{ApplyOptions, ApplyReport, Catalog, apply_region, filter_regions};
use similar::{ChangeTag, TextDiff};

use crate::context::AppContext;
use crate::error::{CliError, Result};
use crate::interactive;

/// Lines of unchanged context shown around each change.
const DIFF_CONTEXT: usize = 3;

/// Run the apply command
pub fn run_apply(ctx: &AppContext, name: &str, dry_run: bool) -> Result<()> {
    let report = apply_region(&ctx.layout, &ctx.prefs, name, ApplyOptions { dry_run })?;
    print_report(&report);
    Ok(())
}

/// Run the pick command
///
/// Offers the (filtered) catalog in a fuzzy finder and applies the choice.
pub fn run_pick(ctx: &AppContext, filter: Option<&str>, dry_run: bool) -> Result<()> {
    let entries = Catalog::from_layout(&ctx.layout).scan()?;
    let matches = filter_regions(&entries, filter.unwrap_or_default());
    if matches.is_empty() {
        return Err(match filter {
            Some(keyword) if !entries.is_empty() => {
                CliError::user(format!("No sea region matches '{}'", keyword))
            }
            _ => CliError::user("No sea regions found"),
        });
    }

    let name = interactive::pick_region(&matches)?.ok_or(sea_core::Error::NoSelection)?;
    run_apply(ctx, &name, dry_run)
}

fn print_report(report: &ApplyReport) {
    if report.untouched_blocks > 0 {
        println!(
            "{} {} has {} more WorldmapBookMark block(s); only the first was replaced",
            "warning:".yellow().bold(),
            report.target.display(),
            report.untouched_blocks
        );
    }

    if report.dry_run {
        if report.changed {
            print!("{}", render_diff(report));
        } else {
            println!("{} No changes needed.", "OK".green().bold());
        }
        println!(
            "{} Dry run, {} was not modified",
            "note:".cyan().bold(),
            report.target.display()
        );
        return;
    }

    println!(
        "{} Applied sea region '{}' to {} ({})",
        "OK".green().bold(),
        report.region.cyan(),
        report.target.display(),
        report.encoding
    );
    if let Some(backup) = &report.backup {
        println!("{}: {}", "Backup".dimmed(), backup.display());
    }
    if !report.changed {
        println!("{} The region was already in place.", "note:".cyan().bold());
    }
}

/// Unified diff of the target before and after the splice.
fn render_diff(report: &ApplyReport) -> String {
    let target = report.target.display().to_string();
    let diff = TextDiff::from_lines(report.original.as_str(), report.updated.as_str());

    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("--- {}", target).red()));
    out.push_str(&format!("{}\n", format!("+++ {}", target).green()));
    for hunk in diff.unified_diff().context_radius(DIFF_CONTEXT).iter_hunks() {
        out.push_str(&format!("{}\n", hunk.header().to_string().cyan()));
        for change in hunk.iter_changes() {
            let line = change.value().trim_end_matches(['\r', '\n']);
            let rendered = match change.tag() {
                ChangeTag::Delete => format!("-{}", line).red(),
                ChangeTag::Insert => format!("+{}", line).green(),
                ChangeTag::Equal => format!(" {}", line).normal(),
            };
            out.push_str(&format!("{}\n", rendered));
        }
    }
    out
}
