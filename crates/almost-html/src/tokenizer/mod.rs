//! Almost-HTML tokenizer module.
//!
//! A character-level state machine that splits a document into text, tag,
//! raw script and comment tokens. Malformed markup never stops it.

/// Tokenizer state machine implementation.
pub mod machine;
/// Helper methods for state transitions and token bookkeeping.
mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use machine::{Tokenizer, TokenizerState, tokenize};
pub use token::{Token, TokenKind};
