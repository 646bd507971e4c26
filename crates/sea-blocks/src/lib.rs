//! Bookmark element location and splicing for sea-selector.
//!
//! Region files and the game's `gamevariable.xml` each carry one
//! `WorldmapBookMark` element:
//!
//! ```text
//! <WorldmapBookMark id="1">
//!   <Point x="1"/>
//! </WorldmapBookMark>
//! ```
//!
//! The [`locator`] module streams a document with `quick-xml` and reports the
//! exact byte span of each outermost element with a given tag, so extraction
//! returns a verbatim substring of the source. The [`splice`] module swaps one
//! such span for another block, leaving every other byte untouched.
//!
//! Tag names match ignoring ASCII case.

pub mod error;
pub mod locator;
pub mod splice;

pub use error::{Error, Result};
pub use locator::{BOOKMARK_TAG, Block, find_bookmark, find_longest, has_block, parse_blocks};
pub use splice::{Splice, splice_block, splice_bookmark};
