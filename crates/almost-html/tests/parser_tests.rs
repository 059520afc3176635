//! Tests for tree construction and the document helpers.

#![allow(clippy::needless_pass_by_value)]

use almost_dom::{AttributesMap, DomTree, DomTreeBuilder, Node, NodeId, TEXT_NODE_NAME};
use almost_html::{
    ParseIssue, TokenKind, TreeBuilder, get_title, is_void_tag, parse_html, parse_html_with_issues,
    strip_tags, tokenize,
};
use almost_html::parser::attributes_from_fragments;
use quickcheck::quickcheck;

fn element(name: &str, raw: &str) -> Node {
    Node::element(name, raw, AttributesMap::new())
}

fn element_with(name: &str, raw: &str, attrs: &[(&str, &str)]) -> Node {
    let attributes = attrs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Node::element(name, raw, attributes)
}

fn append(builder: &mut DomTreeBuilder, parent: NodeId, node: Node) -> NodeId {
    builder.append_child(parent, node).expect("parent exists")
}

fn fragments(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Names of the children of `id`, in order.
fn child_names(tree: &DomTree, id: NodeId) -> Vec<&str> {
    tree.children(id)
        .iter()
        .filter_map(|&child| tree.name(child))
        .collect()
}

// ========== documents ==========

#[test]
fn test_plain_text_only() {
    let mut expected = DomTreeBuilder::new();
    let _ = expected.append_child(NodeId::ROOT, Node::text("Hello world"));
    assert_eq!(parse_html("Hello world"), expected.finish());
}

#[test]
fn test_empty_document_is_bare_root() {
    let tree = parse_html("");
    assert_eq!(tree.len(), 1);
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_simple_tag_not_nested() {
    let mut expected = DomTreeBuilder::new();
    let node = append(&mut expected, NodeId::ROOT, element("node", "node"));
    let _ = expected.append_child(node, Node::text("Whatever"));
    assert_eq!(parse_html("<node>Whatever</node>"), expected.finish());
}

#[test]
fn test_tags_with_parameters_are_siblings() {
    let mut expected = DomTreeBuilder::new();
    let _ = expected.append_child(
        NodeId::ROOT,
        element_with("tag", "tag key=value", &[("key", "value")]),
    );
    let _ = expected.append_child(
        NodeId::ROOT,
        element_with("tag", "tag key=\"Value quoted\"", &[("key", "Value quoted")]),
    );
    assert_eq!(
        parse_html("<tag key=value></tag><tag key=\"Value quoted\"></tag>"),
        expected.finish()
    );
}

#[test]
fn test_unterminated_comment_swallows_the_rest() {
    let (tree, issues) = parse_html_with_issues("<html><!-- Hello <world>intag</world>");

    let mut expected = DomTreeBuilder::new();
    let _ = expected.append_child(NodeId::ROOT, element("html", "html"));
    assert_eq!(tree, expected.finish());
    assert_eq!(
        issues,
        vec![
            ParseIssue::UnterminatedComment { offset: 7 },
            ParseIssue::UnclosedElements { count: 1 },
        ]
    );
}

#[test]
fn test_script_contents_are_text() {
    let source = "<html><script>function () {\n  console.log('<a tag></tag>');\n} </script>";

    let mut expected = DomTreeBuilder::new();
    let html = append(&mut expected, NodeId::ROOT, element("html", "html"));
    let script = append(&mut expected, html, element("script", "script"));
    let _ = expected.append_child(
        script,
        Node::text("function () {\n  console.log('<a tag></tag>');\n} </script"),
    );
    assert_eq!(parse_html(source), expected.finish());
}

#[test]
fn test_script_stays_open_after_its_body() {
    let (tree, issues) = parse_html_with_issues("<script>a</script><p>b</p>");
    assert_eq!(child_names(&tree, NodeId::ROOT), vec!["script"]);

    let script = tree.children(NodeId::ROOT)[0];
    assert_eq!(child_names(&tree, script), vec![TEXT_NODE_NAME, "p"]);
    assert_eq!(tree.text_content(script), "a</scriptb");
    assert_eq!(issues, vec![ParseIssue::UnclosedElements { count: 1 }]);
}

#[test]
fn test_closer_after_script_pops_the_script() {
    let tree = parse_html("<div><script>x</script></div><p>y</p>");
    assert_eq!(child_names(&tree, NodeId::ROOT), vec!["div"]);

    let div = tree.children(NodeId::ROOT)[0];
    assert_eq!(child_names(&tree, div), vec!["script", "p"]);

    let script = tree.children(div)[0];
    assert_eq!(child_names(&tree, script), vec![TEXT_NODE_NAME]);
}

#[test]
fn test_doctype_is_a_void_sibling() {
    let tree = parse_html("<!DOCTYPE html><html><body>x</body></html>");
    assert_eq!(child_names(&tree, NodeId::ROOT), vec!["!DOCTYPE", "html"]);

    let doctype = tree.children(NodeId::ROOT)[0];
    assert_eq!(tree.get_attribute(doctype, "html"), Some(""));
    assert!(tree.children(doctype).is_empty());
}

// ========== stack of open elements ==========

#[test]
fn test_void_tags_never_own_children() {
    let tree = parse_html("<div><br><img src=x.png>text</div>");
    let div = tree.children(NodeId::ROOT)[0];
    assert_eq!(child_names(&tree, div), vec!["br", "img", TEXT_NODE_NAME]);

    let img = tree.children(div)[1];
    assert_eq!(tree.get_attribute(img, "src"), Some("x.png"));
    assert_eq!(tree.get(img).map(|n| n.raw.as_str()), Some("img src=x.png"));
}

#[test]
fn test_void_tag_list() {
    for name in ["br", "img", "input", "meta", "!DOCTYPE", TEXT_NODE_NAME] {
        assert!(is_void_tag(name), "{name} should be void");
    }
    for name in ["div", "p", "script", "BR"] {
        assert!(!is_void_tag(name), "{name} should not be void");
    }
}

#[test]
fn test_closing_tag_pops_without_matching_names() {
    let (tree, issues) = parse_html_with_issues("<a><b></a>c");
    let a = tree.children(NodeId::ROOT)[0];
    assert_eq!(child_names(&tree, a), vec!["b", TEXT_NODE_NAME]);
    assert_eq!(issues, vec![ParseIssue::UnclosedElements { count: 1 }]);
}

#[test]
fn test_stray_closing_tags_at_root() {
    let (tree, issues) = parse_html_with_issues("</p>hi</div>");
    assert_eq!(child_names(&tree, NodeId::ROOT), vec![TEXT_NODE_NAME]);
    assert_eq!(
        issues,
        vec![
            ParseIssue::StrayClosingTag {
                name: "/p".to_string(),
                offset: 1,
            },
            ParseIssue::StrayClosingTag {
                name: "/div".to_string(),
                offset: 7,
            },
        ]
    );
}

#[test]
fn test_unclosed_elements_nest() {
    let (tree, issues) = parse_html_with_issues("<ul><li>one<li>two");
    let ul = tree.children(NodeId::ROOT)[0];
    let first = tree.children(ul)[0];
    assert_eq!(child_names(&tree, first), vec![TEXT_NODE_NAME, "li"]);
    assert_eq!(tree.text_content(ul), "onetwo");
    assert_eq!(issues, vec![ParseIssue::UnclosedElements { count: 3 }]);
}

#[test]
fn test_malformed_tags_are_dropped() {
    let (tree, issues) = parse_html_with_issues("<>hello");
    assert_eq!(child_names(&tree, NodeId::ROOT), vec![TEXT_NODE_NAME]);
    assert_eq!(strip_tags("<>hello"), "hello");
    assert_eq!(issues, vec![ParseIssue::EmptyTag { offset: 1 }]);

    assert_eq!(strip_tags("<a <b>c"), "b>c");
}

// ========== comments ==========

#[test]
fn test_comments_are_dropped_by_default() {
    let tree = parse_html("<p>a<!--c-->b</p>");
    let p = tree.children(NodeId::ROOT)[0];
    assert_eq!(child_names(&tree, p), vec![TEXT_NODE_NAME, TEXT_NODE_NAME]);
    assert_eq!(tree.text_content(p), "ab");
}

#[test]
fn test_comments_can_be_kept_as_text() {
    let source = "<p>a<!--c-->b</p>";
    let tree = TreeBuilder::new(source, tokenize(source))
        .with_comments()
        .run();
    let p = tree.children(NodeId::ROOT)[0];
    assert_eq!(tree.text_content(p), "a!--c--b");
}

// ========== attributes ==========

#[test]
fn test_attributes_without_values() {
    let tree = parse_html("<input disabled value=\"\">");
    let input = tree.children(NodeId::ROOT)[0];
    assert_eq!(tree.get_attribute(input, "disabled"), Some(""));
    assert_eq!(tree.get_attribute(input, "value"), Some(""));
    assert_eq!(tree.get_attribute(input, "name"), None);
}

#[test]
fn test_later_attributes_overwrite_earlier() {
    let tree = parse_html("<a x=1 x=2 y z=>");
    let a = tree.children(NodeId::ROOT)[0];
    let node = tree.get(a).expect("element exists");
    assert_eq!(node.attributes.len(), 3);
    assert_eq!(node.get_attribute("x"), Some("2"));
    assert_eq!(node.get_attribute("y"), Some(""));
    assert_eq!(node.get_attribute("z"), Some(""));
}

#[test]
fn test_empty_quoted_value_does_not_take_the_next_word() {
    let tree = parse_html("<p a=\"\" b>");
    let p = tree.children(NodeId::ROOT)[0];
    assert_eq!(tree.get_attribute(p, "a"), Some(""));
    assert_eq!(tree.get_attribute(p, "b"), Some(""));

    let attributes = attributes_from_fragments(&fragments(&["a", "=", "", "b"]));
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes.get("a").map(String::as_str), Some(""));
}

#[test]
fn test_attribute_scan_is_positional() {
    let attributes = attributes_from_fragments(&fragments(&["a", "=", "=", "b"]));
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes.get("a").map(String::as_str), Some(""));
    assert_eq!(attributes.get("=").map(String::as_str), Some("b"));
}

#[test]
fn test_attribute_scan_of_mixed_fragments() {
    let attributes = attributes_from_fragments(&fragments(&[
        "a", "b", "=", "c,", "d a", "=", "e", "f", "=", "g h", "param a", "=", "param b",
    ]));
    let mut pairs: Vec<(&str, &str)> = attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    pairs.sort_unstable();
    assert_eq!(
        pairs,
        vec![
            ("a", ""),
            ("b", "c,"),
            ("d a", "e"),
            ("f", "g h"),
            ("param a", "param b"),
        ]
    );
}

#[test]
fn test_leading_equals_is_not_a_value() {
    let attributes = attributes_from_fragments(&fragments(&["=", "x"]));
    assert_eq!(attributes.get("x").map(String::as_str), Some(""));
    assert_eq!(attributes.len(), 1);
}

// ========== queries on parsed documents ==========

#[test]
fn test_tag_and_class_query_needs_every_class() {
    let tree = parse_html(
        "<div class=\"a b c\">1</div><div class=a>2</div><div>3</div><div class=\"b a\">4</div>",
    );
    let found: Vec<String> = tree
        .get_elements_by_tag_and_class(NodeId::ROOT, "div", &["a", "b"])
        .into_iter()
        .map(|id| tree.text_content(id))
        .collect();
    assert_eq!(found, vec!["1", "4"]);
}

#[test]
fn test_inner_html_of_tag_only_subtree() {
    let tree = parse_html("<p class=x>hello</p>");
    let p = tree.children(NodeId::ROOT)[0];
    assert_eq!(tree.inner_html(p), "p class=xhello");
}

// ========== document helpers ==========

#[test]
fn test_get_title() {
    assert_eq!(get_title("<title>Hi</title>"), "Hi");
    assert_eq!(get_title("<html><head><title>Hi</title></head></html>"), "Hi");
    assert_eq!(get_title("<title></title>"), "");
    assert_eq!(get_title("no title here"), "");
}

#[test]
fn test_strip_tags() {
    assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
    assert_eq!(strip_tags("no markup"), "no markup");
    assert_eq!(strip_tags("<br><hr>"), "");
}

#[test]
fn test_parse_is_deterministic() {
    let source = "<div class=\"a b\"><p>x<br>y</p><!-- c --><script>1<2</script></div>";
    assert_eq!(parse_html(source), parse_html(source));
    assert_eq!(parse_html_with_issues(source), parse_html_with_issues(source));
}

// ========== properties ==========

#[test]
fn prop_text_without_markup_is_one_text_node() {
    fn prop(text: String) -> bool {
        if text.contains('<') {
            return true;
        }
        let tree = parse_html(&text);
        let children = tree.children(NodeId::ROOT);
        if text.is_empty() {
            return children.is_empty();
        }
        children.len() == 1 && tree.inner_html(children[0]) == text
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn prop_text_round_trips_through_inner_html() {
    fn prop(text: String) -> bool {
        if text.contains('<') {
            return true;
        }
        let tree = parse_html(&text);
        parse_html(&tree.inner_html(NodeId::ROOT)) == tree
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn prop_strip_tags_keeps_every_text_token() {
    fn prop(source: String) -> bool {
        let chars: Vec<char> = source.chars().collect();
        let expected: String = tokenize(&source)
            .iter()
            .filter(|token| matches!(token.kind, TokenKind::Data | TokenKind::ScriptRawText))
            .flat_map(|token| chars[token.start..token.end].iter())
            .collect();
        strip_tags(&source) == expected
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn prop_token_offsets_stay_in_bounds_and_ordered() {
    fn prop(source: String) -> bool {
        let len = source.chars().count();
        let mut previous_end = 0;
        tokenize(&source).iter().all(|token| {
            let ok = previous_end <= token.start && token.start <= token.end && token.end <= len;
            previous_end = token.end;
            ok
        })
    }
    quickcheck(prop as fn(String) -> bool);
}
