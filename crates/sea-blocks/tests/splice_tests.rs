//! Integration tests for block splicing.

use pretty_assertions::assert_eq;
use sea_blocks::{Error, find_bookmark, splice_bookmark};

#[test]
fn test_region_block_replaces_destination_block() {
    let source = r#"<WorldmapBookMark id="1"><Point x="1"/></WorldmapBookMark>"#;
    let destination = "<?xml version=\"1.0\"?>\n<GameVariable>\n  <WorldmapBookMark><Old/></WorldmapBookMark>\n  <Gold>5</Gold>\n</GameVariable>\n";

    let block = find_bookmark(source).unwrap().unwrap();
    let splice = splice_bookmark(destination, &block.text).unwrap();

    assert_eq!(
        splice.content,
        "<?xml version=\"1.0\"?>\n<GameVariable>\n  <WorldmapBookMark id=\"1\"><Point x=\"1\"/></WorldmapBookMark>\n  <Gold>5</Gold>\n</GameVariable>\n"
    );
}

#[test]
fn test_surrounding_text_is_byte_identical() {
    let destination = "<Game>\r\n\t<A x='y' />\r\n<WorldmapBookMark>\r\n<Old/>\r\n</WorldmapBookMark>\r\n  <B>&amp;</B>\r\n</Game>";
    let splice = splice_bookmark(destination, "<WorldmapBookMark n=\"1\"/>").unwrap();

    let before = &destination[..splice.replaced.start];
    let after = &destination[splice.replaced.end..];
    assert!(splice.content.starts_with(before));
    assert!(splice.content.ends_with(after));
    assert_eq!(
        splice.content.len(),
        before.len() + "<WorldmapBookMark n=\"1\"/>".len() + after.len()
    );
}

#[test]
fn test_only_first_of_several_blocks_replaced() {
    let destination = "<R><WorldmapBookMark>1</WorldmapBookMark><WorldmapBookMark>2</WorldmapBookMark></R>";

    let splice = splice_bookmark(destination, "<WorldmapBookMark>new</WorldmapBookMark>").unwrap();

    assert_eq!(
        splice.content,
        "<R><WorldmapBookMark>new</WorldmapBookMark><WorldmapBookMark>2</WorldmapBookMark></R>"
    );
    assert_eq!(splice.untouched, 1);
}

#[test]
fn test_lowercase_destination_tag_replaced() {
    let splice = splice_bookmark(
        "<r><worldmapbookmark/></r>",
        "<WorldmapBookMark id=\"9\"/>",
    )
    .unwrap();

    insta::assert_snapshot!(splice.content, @r#"<r><WorldmapBookMark id="9"/></r>"#);
}

#[test]
fn test_destination_without_block() {
    let result = splice_bookmark("<GameVariable/>", "<WorldmapBookMark/>");
    assert!(matches!(result, Err(Error::BlockNotFound { ref tag }) if tag == "WorldmapBookMark"));
}

#[test]
fn test_malformed_destination() {
    let result = splice_bookmark("<G><WorldmapBookMark></G>", "<WorldmapBookMark/>");
    assert!(matches!(result, Err(Error::Malformed { .. })));
}

#[test]
fn test_two_replacement_blocks_rejected() {
    let result = splice_bookmark(
        "<WorldmapBookMark/>",
        "<WorldmapBookMark/><WorldmapBookMark/>",
    );
    assert!(matches!(result, Err(Error::InvalidReplacement { .. })));
}

#[test]
fn test_destination_with_unicode_text() {
    let destination = "<存档>\n<WorldmapBookMark name=\"旧\"/>\n</存档>";
    let splice = splice_bookmark(destination, "<WorldmapBookMark name=\"东海\"/>").unwrap();
    assert_eq!(splice.content, "<存档>\n<WorldmapBookMark name=\"东海\"/>\n</存档>");
}
