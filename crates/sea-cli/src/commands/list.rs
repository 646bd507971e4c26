//! List command implementation

use colored::Colorize;
use sea_core::{Catalog, filter_regions};
use serde_json::json;

use crate::context::AppContext;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &AppContext, filter: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::from_layout(&ctx.layout);
    let entries = catalog.scan()?;
    let matches = filter_regions(&entries, filter.unwrap_or_default());

    if json {
        let output = json!(
            matches
                .iter()
                .map(|entry| json!({
                    "name": entry.name,
                    "path": entry.path.display().to_string(),
                }))
                .collect::<Vec<_>>()
        );
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if matches.is_empty() {
        match filter {
            Some(keyword) if !entries.is_empty() => {
                println!("{} No sea region matches '{}'", "!".yellow(), keyword)
            }
            _ => println!(
                "{} No sea regions found in {}",
                "!".yellow(),
                catalog.dir().display()
            ),
        }
        return Ok(());
    }

    for entry in matches {
        println!("{}", entry.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_core::{AppLayout, Preferences};
    use sea_test_utils::TestHome;

    fn context(home: &TestHome) -> AppContext {
        AppContext {
            layout: AppLayout::new(home.root()),
            prefs: Preferences::default(),
        }
    }

    #[test]
    fn test_list_empty_catalog() {
        let home = TestHome::new();
        assert!(run_list(&context(&home), None, false).is_ok());
    }

    #[test]
    fn test_list_json_with_filter() {
        let home = TestHome::new();
        home.add_region("sea1", "<WorldmapBookMark/>");
        assert!(run_list(&context(&home), Some("sea"), true).is_ok());
    }
}
