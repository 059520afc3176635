use std::iter;

use almost_dom::{AttributesMap, DomTree, DomTreeBuilder, Node, NodeId};
use tracing::{debug, trace};

use crate::issue::ParseIssue;
use crate::tokenizer::{Token, TokenKind};

/// Elements that never own children, however the markup nests.
///
/// `#text` is listed so text nodes are never pushed on the stack.
pub const VOID_TAGS: [&str; 16] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr", "!DOCTYPE", "#text",
];

/// Whether `name` is one of [`VOID_TAGS`].
#[must_use]
pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

/// Builds a [`DomTree`] from a token stream.
///
/// Keeps a stack of open elements seeded with the root. Opening tags push,
/// closing tags pop whatever is on top without comparing names.
pub struct TreeBuilder<'a> {
    source: &'a str,

    /// Byte offset of every char of `source`, plus `source.len()` at the end.
    char_offsets: Vec<usize>,

    tokens: Vec<Token>,

    tree: DomTreeBuilder,

    /// Stores `NodeId`s into the arena. The root is never popped.
    stack_of_open_elements: Vec<NodeId>,

    /// Keep comments as `#text` leaves instead of dropping them.
    keep_comments: bool,

    issues: Vec<ParseIssue>,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder for `tokens`, which must have been scanned from
    /// `source`.
    #[must_use]
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        let char_offsets = source
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(iter::once(source.len()))
            .collect();
        Self {
            source,
            char_offsets,
            tokens,
            tree: DomTreeBuilder::new(),
            stack_of_open_elements: vec![NodeId::ROOT],
            keep_comments: false,
            issues: Vec::new(),
        }
    }

    /// Keep comments in the tree as `#text` leaves holding the comment's
    /// interior (`!-- text --`).
    #[must_use]
    pub const fn with_comments(mut self) -> Self {
        self.keep_comments = true;
        self
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn get_issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Build the tree.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Build the tree and return the issues recorded while building it.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        for token in &tokens {
            if !self.process_token(token) {
                break;
            }
        }

        let open = self.stack_of_open_elements.len() - 1;
        if open > 0 {
            self.record_issue(ParseIssue::UnclosedElements { count: open });
        }
        (self.tree.finish(), self.issues)
    }

    /// Returns false once the stream says input has ended.
    fn process_token(&mut self, token: &Token) -> bool {
        match token.kind {
            // The closing `</script` is part of the body, so `script` stays
            // open until the next closing tag.
            TokenKind::Data | TokenKind::ScriptRawText => self.insert_text(token),
            TokenKind::Comment if self.keep_comments => self.insert_text(token),
            TokenKind::Comment => trace!(start = token.start, "dropping comment"),
            TokenKind::Error => trace!(start = token.start, "skipping malformed tag"),
            TokenKind::Tag if token.is_closing_tag() => self.close_element(token),
            TokenKind::Tag => self.insert_element(token),
            TokenKind::EndOfInput => return false,
        }
        true
    }

    fn insert_text(&mut self, token: &Token) {
        let raw = self.source_slice(token.start, token.end);
        let parent = self.current_node();
        let _ = self.tree.append_child(parent, Node::text(raw));
    }

    fn insert_element(&mut self, token: &Token) {
        let raw = self.source_slice(token.start, token.end);
        let node = Node::element(
            token.name.clone(),
            raw,
            attributes_from_fragments(&token.values),
        );
        let parent = self.current_node();
        let Some(id) = self.tree.append_child(parent, node) else {
            return;
        };
        if !is_void_tag(&token.name) {
            self.stack_of_open_elements.push(id);
        }
    }

    fn close_element(&mut self, token: &Token) {
        if self.stack_of_open_elements.len() > 1 {
            let closed = self.stack_of_open_elements.pop();
            trace!(?closed, closer = %token.name, "closed element");
        } else {
            self.record_issue(ParseIssue::StrayClosingTag {
                name: token.name.clone(),
                offset: token.start,
            });
        }
    }

    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    /// Source text between two char offsets. Offsets past the end clamp to
    /// the end of the source.
    fn source_slice(&self, start: usize, end: usize) -> &'a str {
        let source: &'a str = self.source;
        let byte = |offset: usize| {
            self.char_offsets
                .get(offset)
                .copied()
                .unwrap_or(source.len())
        };
        source.get(byte(start)..byte(end.max(start))).unwrap_or_default()
    }

    fn record_issue(&mut self, issue: ParseIssue) {
        debug!(%issue, "tree builder recovered");
        self.issues.push(issue);
    }
}

/// Recovers attributes from a tag's fragments in one left-to-right pass.
///
/// `=` fragments are skipped. A fragment right after `=` is the value for the
/// fragment before that `=`; any other fragment is a boolean attribute with
/// an empty value. Later keys overwrite earlier ones.
///
/// An empty quoted value is its own fragment, so `a="" b` gives `a` the
/// value `""` and makes `b` a separate boolean attribute rather than the
/// value of `a`.
#[must_use]
pub fn attributes_from_fragments(values: &[String]) -> AttributesMap {
    let mut attributes = AttributesMap::new();
    for (i, value) in values.iter().enumerate() {
        if value == "=" {
            continue;
        }
        if i > 1 && values[i - 1] == "=" {
            let _ = attributes.insert(values[i - 2].clone(), value.clone());
        } else {
            let _ = attributes.insert(value.clone(), String::new());
        }
    }
    attributes
}
