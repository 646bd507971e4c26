//! Locating tagged elements in XML text.
//!
//! The document is streamed with `quick-xml`; mismatched end tags, malformed
//! attributes and unterminated blocks are reported as [`Error::Malformed`].
//! Only outermost matches are returned: a matching element nested inside
//! another one is part of its parent's block.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// Tag of the element carrying a sea region's world map bookmarks.
pub const BOOKMARK_TAG: &str = "WorldmapBookMark";

/// A located element with its exact source text and position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The tag name as written in the source.
    pub name: String,
    /// The full element, from `<` of the start tag to `>` of the end tag.
    pub text: String,
    /// Byte offset of the start of the element.
    pub start: usize,
    /// Byte offset one past the end of the element.
    pub end: usize,
    /// The 1-based line number where the element starts.
    pub start_line: usize,
    /// The 1-based line number where the element ends.
    pub end_line: usize,
}

impl Block {
    /// Byte span of the element in the source.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Length of the element text in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn new(content: &str, name: String, start: usize, end: usize) -> Self {
        Self {
            name,
            text: content[start..end].to_string(),
            start,
            end,
            start_line: line_of(content, start),
            end_line: line_of(content, end.saturating_sub(1)),
        }
    }
}

/// Parses all outermost `tag` elements from the content, in order.
///
/// The whole document must be well-formed, not just the blocks: a stray end
/// tag or a bad attribute anywhere fails the parse, even outside any block.
/// End tags must match their start tag exactly, except that a `tag` element
/// may be closed in a different ASCII case (`<WorldmapBookMark>` ...
/// `</worldmapbookmark>`).
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the document is not well-formed up to the
/// point the reader stopped.
///
/// # Example
/// ```
/// use sea_blocks::locator::parse_blocks;
///
/// let content = r#"<Game><WorldmapBookMark id="1"><Point/></WorldmapBookMark></Game>"#;
///
/// let blocks = parse_blocks(content, "WorldmapBookMark").unwrap();
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].text, r#"<WorldmapBookMark id="1"><Point/></WorldmapBookMark>"#);
/// ```
pub fn parse_blocks(content: &str, tag: &str) -> Result<Vec<Block>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    // End names are checked below so that `tag` can close in any case
    reader.config_mut().check_end_names = false;

    let mut blocks = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // (name, start offset, stack depth of the block element)
    let mut open: Option<(String, usize, usize)> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::malformed(reader.error_position() as usize, e.to_string())
        })?;
        let position = reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                check_attributes(&e, position)?;
                stack.push(e.name().as_ref().to_vec());
                if open.is_none() && is_tag(&e, tag) {
                    let start = tag_start(content, position, e.len() + 2)?;
                    open = Some((tag_name(&e), start, stack.len()));
                }
            }
            Event::Empty(e) => {
                check_attributes(&e, position)?;
                if open.is_none() && is_tag(&e, tag) {
                    let start = tag_start(content, position, e.len() + 3)?;
                    blocks.push(Block::new(content, tag_name(&e), start, position));
                }
            }
            Event::End(e) => {
                let name = e.name();
                let Some(expected) = stack.pop() else {
                    return Err(Error::malformed(
                        position,
                        format!("unexpected </{}>", lossy(name.as_ref())),
                    ));
                };
                if !end_matches(&expected, name.as_ref(), tag) {
                    return Err(Error::malformed(
                        position,
                        format!(
                            "expected </{}>, found </{}>",
                            lossy(&expected),
                            lossy(name.as_ref())
                        ),
                    ));
                }

                let closes_block = matches!(open, Some((_, _, depth)) if depth == stack.len() + 1);
                if closes_block && let Some((name, start, _)) = open.take() {
                    blocks.push(Block::new(content, name, start, position));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some((name, start, _)) = open {
        return Err(Error::malformed(
            start,
            format!("<{}> is never closed", name),
        ));
    }

    tracing::trace!(tag, count = blocks.len(), "Located blocks");
    Ok(blocks)
}

/// Finds the longest `tag` element, the first one winning ties.
///
/// Several matches usually mean a stub plus the real definition; the longest is
/// taken as the most complete.
pub fn find_longest(content: &str, tag: &str) -> Result<Option<Block>> {
    let blocks = parse_blocks(content, tag)?;
    if blocks.len() > 1 {
        tracing::debug!(tag, count = blocks.len(), "Multiple blocks, choosing the longest");
    }
    Ok(blocks
        .into_iter()
        .min_by_key(|block| std::cmp::Reverse(block.len())))
}

/// Finds the bookmark block in a region or game file.
///
/// # Example
/// ```
/// use sea_blocks::find_bookmark;
///
/// let content = "<worldmapbookmark><Point/></worldmapbookmark>";
/// let block = find_bookmark(content).unwrap().unwrap();
/// assert_eq!(block.text, content);
/// ```
pub fn find_bookmark(content: &str) -> Result<Option<Block>> {
    find_longest(content, BOOKMARK_TAG)
}

/// Checks whether a well-formed `tag` element exists in the content.
///
/// Malformed documents report `false`.
pub fn has_block(content: &str, tag: &str) -> bool {
    matches!(parse_blocks(content, tag), Ok(blocks) if !blocks.is_empty())
}

fn is_tag(e: &BytesStart<'_>, tag: &str) -> bool {
    e.local_name().as_ref().eq_ignore_ascii_case(tag.as_bytes())
}

fn tag_name(e: &BytesStart<'_>) -> String {
    lossy(e.name().as_ref())
}

fn lossy(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

/// Whether `end` closes the element opened as `open`.
fn end_matches(open: &[u8], end: &[u8], tag: &str) -> bool {
    if open == end {
        return true;
    }
    let local = |name: &[u8]| match name.iter().rposition(|&b| b == b':') {
        Some(idx) => name[idx + 1..].to_vec(),
        None => name.to_vec(),
    };
    open.eq_ignore_ascii_case(end) && local(open).eq_ignore_ascii_case(tag.as_bytes())
}

fn check_attributes(e: &BytesStart<'_>, position: usize) -> Result<()> {
    for attr in e.attributes() {
        attr.map_err(|err| {
            Error::malformed(position, format!("<{}>: {}", tag_name(e), err))
        })?;
    }
    Ok(())
}

/// Offset of the `<` opening a tag that ends at `end` and spans `len` bytes.
fn tag_start(content: &str, end: usize, len: usize) -> Result<usize> {
    let bytes = content.as_bytes();
    match end.checked_sub(len) {
        Some(start) if bytes.get(start) == Some(&b'<') => Ok(start),
        _ => content[..end]
            .rfind('<')
            .ok_or_else(|| Error::malformed(end, "cannot find start of tag")),
    }
}

fn line_of(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset.min(content.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_blocks_empty() {
        let blocks = parse_blocks("No blocks here", BOOKMARK_TAG).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_parse_single_block() {
        let content = "<WorldmapBookMark><Point x=\"1\"/></WorldmapBookMark>";
        let blocks = parse_blocks(content, BOOKMARK_TAG).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, content);
        assert_eq!(blocks[0].span(), 0..content.len());
        assert_eq!(blocks[0].name, "WorldmapBookMark");
    }

    #[test]
    fn test_block_after_text_starts_at_angle_bracket() {
        let content = "text before <WorldmapBookMark a=\"b\">x</WorldmapBookMark> after";
        let block = find_bookmark(content).unwrap().unwrap();
        assert_eq!(block.start, 12);
        assert_eq!(
            block.text,
            "<WorldmapBookMark a=\"b\">x</WorldmapBookMark>"
        );
    }

    #[test]
    fn test_self_closing_block() {
        let content = "<Game>\n  <WorldmapBookMark id=\"3\" />\n</Game>";
        let block = find_bookmark(content).unwrap().unwrap();
        assert_eq!(block.text, "<WorldmapBookMark id=\"3\" />");
        assert_eq!(block.start_line, 2);
        assert_eq!(block.end_line, 2);
    }

    #[test]
    fn test_mismatched_end_tag_is_malformed() {
        let content = "<WorldmapBookMark><Point></WorldmapBookMark>";
        let result = parse_blocks(content, BOOKMARK_TAG);
        assert!(matches!(result, Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_unclosed_block_is_malformed() {
        let content = "<Game><WorldmapBookMark><Point/>";
        let result = parse_blocks(content, BOOKMARK_TAG);
        assert!(matches!(result, Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_has_block() {
        assert!(has_block("<WorldmapBookMark/>", BOOKMARK_TAG));
        assert!(!has_block("<Other/>", BOOKMARK_TAG));
        assert!(!has_block("<WorldmapBookMark>", BOOKMARK_TAG));
    }
}
