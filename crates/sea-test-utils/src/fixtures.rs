//! Canned documents used across the workspace's tests.

/// The bookmark block of region `sea1`.
pub const SEA1_BLOCK: &str = r#"<WorldmapBookMark id="1"><Point x="1"/></WorldmapBookMark>"#;

/// The bookmark block a fresh game config starts with.
pub const OLD_BLOCK: &str = "<WorldmapBookMark><Old/></WorldmapBookMark>";

/// A region file wrapping `block` in a small document with an XML prolog.
pub fn region_document(block: &str) -> String {
    format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Region>\n  {block}\n</Region>\n")
}

/// A game config wrapping `block` between unrelated settings.
pub fn game_document(block: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <GameVariable>\n  <Volume value=\"7\"/>\n  {block}\n  <Difficulty value=\"hard\"/>\n</GameVariable>\n"
    )
}

/// A region file with no bookmark block at all.
pub const REGION_WITHOUT_BLOCK: &str = "<?xml version=\"1.0\"?>\n<Region><Other/></Region>\n";
