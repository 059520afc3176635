use std::fmt;

use strum_macros::Display;

/// What a [`Token`] was scanned as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenKind {
    /// Plain text between tags.
    Data,
    /// An opening or closing tag. Closing tags have a name starting with `/`.
    Tag,
    /// The opaque body of a `script` element.
    ScriptRawText,
    /// A `<!-- ... -->` comment. The name is `!--`.
    Comment,
    /// A malformed tag that was discarded, such as `<>` or `<a <b>`.
    Error,
    /// End of a token stream.
    ///
    /// [`tokenize`](super::tokenize) never emits it; the end of the returned
    /// vector is the end of input. Hand-assembled streams may use it to stop
    /// the tree builder early.
    EndOfInput,
}

/// One unit of scanned input.
///
/// Offsets count `char`s, not bytes, and form a half-open range. For tags,
/// comments and errors the range covers the interior of the brackets; for
/// text it covers exactly the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token was scanned as.
    pub kind: TokenKind,
    /// Tag name for tags and comments, empty for text.
    pub name: String,
    /// Fragments after the name, in source order, including literal `=`.
    pub values: Vec<String>,
    /// Offset of the first char of the token.
    pub start: usize,
    /// Offset one past the last char of the token.
    pub end: usize,
}

impl Token {
    /// Create an empty token of `kind` starting at `start`.
    #[must_use]
    pub const fn new(kind: TokenKind, start: usize) -> Self {
        Self {
            kind,
            name: String::new(),
            values: Vec::new(),
            start,
            end: start,
        }
    }

    /// Whether nothing has been collected into this token yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.values.is_empty()
    }

    /// Whether this is a closing tag such as `</div>`.
    #[must_use]
    pub fn is_closing_tag(&self) -> bool {
        self.kind == TokenKind::Tag && self.name.starts_with('/')
    }

    /// Add a fragment. The first fragment of a tag-like token becomes its
    /// name; text tokens only collect values.
    pub(crate) fn push(&mut self, fragment: String) {
        let collects_name = !matches!(self.kind, TokenKind::Data | TokenKind::ScriptRawText);
        if collects_name && self.name.is_empty() {
            self.name = fragment;
        } else {
            self.values.push(fragment);
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.to_string();
        match self.kind {
            TokenKind::Data | TokenKind::ScriptRawText => write!(
                f,
                "{kind:<13} [{}:{}] {:?}",
                self.start,
                self.end,
                self.values.join(", ")
            ),
            _ => write!(
                f,
                "{kind:<13} [{}:{}] {:?} {:?}",
                self.start,
                self.end,
                self.name,
                self.values.join(", ")
            ),
        }
    }
}
