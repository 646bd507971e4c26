//! Replacing a located element with another one.
//!
//! Only the bytes of the first matching element change; everything before and
//! after it is copied through untouched.

use crate::error::{Error, Result};
use crate::locator::{BOOKMARK_TAG, Block, parse_blocks};

/// The outcome of a splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// The document with the block replaced.
    pub content: String,
    /// The block that was replaced, positioned in the original document.
    pub replaced: Block,
    /// Further matching blocks left unchanged after the replaced one.
    pub untouched: usize,
}

impl Splice {
    /// Whether the splice changed the document at all.
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Replaces the first `tag` element in `content` with `replacement`.
///
/// `replacement` must be exactly one well-formed `tag` element; surrounding
/// whitespace is dropped.
///
/// # Errors
///
/// - [`Error::InvalidReplacement`] if `replacement` is not a single element
/// - [`Error::BlockNotFound`] if `content` has no `tag` element
/// - [`Error::Malformed`] if `content` is not well-formed
///
/// # Example
/// ```
/// use sea_blocks::splice_block;
///
/// let content = "<Game>\n<Sea><Old/></Sea>\n</Game>";
/// let splice = splice_block(content, "Sea", "<Sea id=\"2\"/>").unwrap();
/// assert_eq!(splice.content, "<Game>\n<Sea id=\"2\"/>\n</Game>");
/// ```
pub fn splice_block(content: &str, tag: &str, replacement: &str) -> Result<Splice> {
    let replacement = validate_replacement(tag, replacement)?;

    let mut blocks = parse_blocks(content, tag)?.into_iter();
    let replaced = blocks.next().ok_or_else(|| Error::BlockNotFound {
        tag: tag.to_string(),
    })?;
    let untouched = blocks.count();
    if untouched > 0 {
        tracing::warn!(tag, untouched, "Document has more than one block, replacing the first only");
    }

    let mut spliced = String::with_capacity(content.len() - replaced.len() + replacement.len());
    spliced.push_str(&content[..replaced.start]);
    spliced.push_str(replacement);
    spliced.push_str(&content[replaced.end..]);

    Ok(Splice {
        content: spliced,
        replaced,
        untouched,
    })
}

/// Replaces the bookmark block of a game file.
pub fn splice_bookmark(content: &str, replacement: &str) -> Result<Splice> {
    splice_block(content, BOOKMARK_TAG, replacement)
}

fn validate_replacement<'a>(tag: &str, replacement: &'a str) -> Result<&'a str> {
    let trimmed = replacement.trim();
    let invalid = |reason: String| Error::InvalidReplacement {
        tag: tag.to_string(),
        reason,
    };

    let blocks = parse_blocks(trimmed, tag).map_err(|e| invalid(e.to_string()))?;
    match blocks.as_slice() {
        [] => Err(invalid("no element found".into())),
        [block] if block.span() == (0..trimmed.len()) => Ok(trimmed),
        [_] => Err(invalid("text outside the element".into())),
        many => Err(invalid(format!("{} elements found", many.len()))),
    }
}
