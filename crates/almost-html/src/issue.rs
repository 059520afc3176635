use thiserror::Error;

/// A recoverable problem found while parsing.
///
/// Parsing never fails: every issue is repaired on the spot and the parse
/// continues. Issues are only collected for callers that want to layer
/// stricter checks on top of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    /// A `<` appeared inside a tag, as in `<a <b>`. The partial tag is dropped.
    #[error("unexpected '<' inside a tag at offset {offset}")]
    UnexpectedLessThanInTag {
        /// Char offset of the offending `<`.
        offset: usize,
    },

    /// A tag with nothing in it, `<>`.
    #[error("empty tag at offset {offset}")]
    EmptyTag {
        /// Char offset just past the opening `<`.
        offset: usize,
    },

    /// Input ended inside a `<!--` comment.
    #[error("comment starting at offset {offset} is not terminated")]
    UnterminatedComment {
        /// Char offset just past the comment's `<`.
        offset: usize,
    },

    /// Input ended inside a `script` body.
    #[error("script body starting at offset {offset} is not terminated")]
    UnterminatedScript {
        /// Char offset of the first char of the body.
        offset: usize,
    },

    /// A closing tag arrived while no element was open.
    #[error("closing tag `{name}` at offset {offset} has no open element")]
    StrayClosingTag {
        /// Name of the closing tag, including the leading `/`.
        name: String,
        /// Char offset of the tag name.
        offset: usize,
    },

    /// Elements still open when input ended. They keep their children.
    #[error("{count} element(s) left open at end of input")]
    UnclosedElements {
        /// How many elements were open, not counting the root.
        count: usize,
    },
}
