//! Helper functions for the tokenizer.
//!
//! - State transitions ("switch to", "reconsume in")
//! - Input handling
//! - Token bookkeeping (flushing fragments, starting and emitting tokens)
//! - Recovery from malformed tags

use tracing::{debug, trace};

use super::machine::{Tokenizer, TokenizerState};
use super::token::{Token, TokenKind};
use crate::issue::ParseIssue;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl Tokenizer {
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) fn switch_to(&mut self, new_state: TokenizerState) {
        if self.state != new_state {
            trace!(from = %self.state, to = %new_state, pos = self.pos, "tokenizer state change");
        }
        self.state = new_state;
    }

    /// Transitions to a new state without consuming the current character.
    /// The same character will be processed again in the new state.
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.switch_to(new_state);
    }
}

// =============================================================================
// Input Helpers
// =============================================================================

impl Tokenizer {
    /// Returns the next character and advances. Returns None at end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.next_pos).copied()?;
        self.pos = self.next_pos;
        self.next_pos += 1;
        Some(c)
    }
}

// =============================================================================
// Token Helpers
// =============================================================================

impl Tokenizer {
    /// Moves the buffered fragment, if any, into the current token.
    pub(super) fn flush_buffer(&mut self) {
        if !self.buffer.is_empty() {
            let fragment = std::mem::take(&mut self.buffer);
            self.current_token.push(fragment);
        }
    }

    /// Ends the current token at the char being processed and starts a new
    /// one of `kind` at `start`.
    ///
    /// A finished token with nothing collected is dropped, except error
    /// tokens, which mark where markup was discarded.
    pub(super) fn begin_token(&mut self, kind: TokenKind, start: usize) {
        let mut finished = std::mem::replace(&mut self.current_token, Token::new(kind, start));
        if finished.is_empty() && finished.kind != TokenKind::Error {
            return;
        }
        finished.end = self.pos;
        self.token_stream.push(finished);
    }

    /// Closes a tag at `>`. A tag named exactly `script` switches to raw text.
    pub(super) fn close_tag(&mut self) {
        self.flush_buffer();
        if self.current_token.name == "script" {
            self.begin_token(TokenKind::ScriptRawText, self.pos + 1);
            self.switch_to(TokenizerState::ScriptRawText);
        } else {
            self.begin_token(TokenKind::Data, self.pos + 1);
            self.switch_to(TokenizerState::Data);
        }
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl Tokenizer {
    /// `<` inside a tag: the partial tag becomes an error token and scanning
    /// resumes as text with the next char.
    pub(super) fn drop_malformed_tag(&mut self) {
        self.record_issue(ParseIssue::UnexpectedLessThanInTag { offset: self.pos });
        self.current_token.kind = TokenKind::Error;
        self.switch_to(TokenizerState::Error);
    }

    /// `<>`: emit an error token and go back to text.
    pub(super) fn drop_empty_tag(&mut self) {
        self.record_issue(ParseIssue::EmptyTag {
            offset: self.current_token.start,
        });
        self.current_token.kind = TokenKind::Error;
        self.begin_token(TokenKind::Data, self.pos + 1);
        self.switch_to(TokenizerState::Data);
    }

    /// Logged at debug level; callers read issues back from the tokenizer.
    pub(super) fn record_issue(&mut self, issue: ParseIssue) {
        debug!(%issue, "recovered from malformed markup");
        self.issues.push(issue);
    }
}
