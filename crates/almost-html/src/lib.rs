//! Lenient tokenizer and tree builder for almost-HTML documents.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer**: a character-level state machine with text, tag,
//!   quoted value, raw `script` body and comment modes
//! - **Tree Builder**: a single pass over the tokens with an explicit stack
//!   of open elements, producing an [`almost_dom::DomTree`]
//! - **Document helpers**: [`parse_html`], [`strip_tags`], [`get_title`]
//!
//! Parsing never fails. Malformed markup is repaired on the spot and
//! reported as [`ParseIssue`]s to callers that ask for them.
//!
//! # Not Implemented
//!
//! - HTML5 error recovery and implicit tags
//! - DOCTYPE handling and encoding sniffing
//! - Character references
//! - Nesting validation

/// Whole-document entry points.
pub mod document;
/// Recoverable parse problems.
pub mod issue;
/// Tree construction from tokens.
pub mod parser;
/// Tokenizer for converting input into tokens.
pub mod tokenizer;

pub use document::{get_title, parse_html, parse_html_with_issues, strip_tags};
pub use issue::ParseIssue;
pub use parser::{TreeBuilder, VOID_TAGS, is_void_tag};
pub use tokenizer::{Token, TokenKind, Tokenizer, TokenizerState, tokenize};
