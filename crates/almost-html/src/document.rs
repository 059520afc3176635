use almost_dom::{DomTree, NodeId};

use crate::issue::ParseIssue;
use crate::parser::TreeBuilder;
use crate::tokenizer::{Tokenizer, tokenize};

/// Parse `source` into a tree rooted at a `#root` node.
#[must_use]
pub fn parse_html(source: &str) -> DomTree {
    TreeBuilder::new(source, tokenize(source)).run()
}

/// Parse `source` and also return every issue recovered from, tokenizer
/// issues first.
#[must_use]
pub fn parse_html_with_issues(source: &str) -> (DomTree, Vec<ParseIssue>) {
    let mut tokenizer = Tokenizer::new(source);
    tokenizer.run();
    let (tokens, mut issues) = tokenizer.into_tokens_with_issues();
    let (tree, builder_issues) = TreeBuilder::new(source, tokens).run_with_issues();
    issues.extend(builder_issues);
    (tree, issues)
}

/// Remove all markup from `source`, keeping the text runs in order.
///
/// `script` bodies are text as far as the tree is concerned, so they are kept.
#[must_use]
pub fn strip_tags(source: &str) -> String {
    parse_html(source).text_content(NodeId::ROOT)
}

/// Text of the first `title` element, or an empty string when there is no
/// such element or it has no children.
#[must_use]
pub fn get_title(source: &str) -> String {
    let tree = parse_html(source);
    tree.first_element_by_tag(NodeId::ROOT, "title")
        .and_then(|title| tree.first_child(title))
        .and_then(|child| tree.get(child))
        .map(|node| node.raw.clone())
        .unwrap_or_default()
}
