//! End-to-end flow through the library crates
//!
//! Choose a folder -> scan the catalog -> apply a region -> inspect status ->
//! restore the backup.

use pretty_assertions::assert_eq;
use sea_core::{
    AppLayout, ApplyOptions, Catalog, Preferences, apply_region, collect_status, filter_regions,
    restore_backup,
};
use sea_test_utils::TestHome;
use sea_test_utils::fixtures::{OLD_BLOCK, SEA1_BLOCK, game_document, region_document};

#[test]
fn test_bookmark_swap_example() {
    let home = TestHome::new();
    home.add_region("sea1", SEA1_BLOCK);
    home.write_target(OLD_BLOCK);
    let layout = AppLayout::new(home.root());

    let mut prefs = Preferences::load(&layout).unwrap();
    prefs.set_user_folder(&layout, home.user_folder()).unwrap();

    apply_region(&layout, &prefs, "sea1", ApplyOptions::default()).unwrap();

    assert_eq!(home.read_target(), SEA1_BLOCK.as_bytes());
    assert_eq!(home.read_backup(), OLD_BLOCK.as_bytes());
}

#[test]
fn test_full_session() {
    let home = TestHome::new();
    home.add_region("East Sea", region_document(SEA1_BLOCK));
    home.add_region("west sea", region_document(r#"<WorldmapBookMark id="2"/>"#));
    home.write_target(game_document(OLD_BLOCK));
    let layout = AppLayout::new(home.root());

    // Preferences survive a reload, as they would across runs
    Preferences::default()
        .set_user_folder(&layout, home.user_folder())
        .unwrap();
    let prefs = Preferences::load(&layout).unwrap();

    let entries = Catalog::from_layout(&layout).scan().unwrap();
    let names: Vec<_> = filter_regions(&entries, "sea")
        .into_iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["East Sea", "west sea"]);

    let report = apply_region(&layout, &prefs, "East Sea", ApplyOptions::default()).unwrap();
    assert_eq!(report.inserted.text, SEA1_BLOCK);
    assert_eq!(report.replaced.text, OLD_BLOCK);

    let status = collect_status(&layout, &prefs).unwrap();
    assert_eq!(status.regions, 2);
    assert!(status.target_has_bookmark);
    assert!(status.backup_exists);

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["target_encoding"], "UTF-8");

    restore_backup(&layout, &prefs).unwrap();
    assert_eq!(home.read_target(), game_document(OLD_BLOCK).as_bytes());
}
