use strum_macros::Display;

use super::token::{Token, TokenKind};
use crate::issue::ParseIssue;

/// The tokenizer state machine. Each state has exactly one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Text outside of any tag.
    Data,
    /// Inside `<...>`, between fragments.
    TagOpen,
    /// Inside an unquoted word of a tag: a name, key or bare value.
    TagWord,
    /// Inside a `"`-quoted value.
    DoubleQuoted,
    /// Inside a `'`-quoted value.
    SingleQuoted,
    /// Inside the opaque body of a `script` element.
    ScriptRawText,
    /// Just read `<!`.
    CommentMaybe,
    /// Just read `<!-`.
    CommentMaybeDash,
    /// Inside `<!-- ... -->`.
    Comment,
    /// A malformed tag was dropped; the next char resumes text.
    Error,
    /// All input has been consumed.
    EndOfInput,
}

/// Splits an almost-HTML document into [`Token`]s.
///
/// The tokenizer collects characters into a buffer; whenever a fragment
/// ends, the buffer is flushed into the token currently being built. A new
/// token starts at every `<` that opens a tag and every `>` that closes one.
pub struct Tokenizer {
    pub(super) state: TokenizerState,
    pub(super) input: Vec<char>,
    /// Index of the next char to consume.
    pub(super) next_pos: usize,
    /// Index of the char being processed.
    pub(super) pos: usize,
    pub(super) current_input_character: Option<char>,
    // When true, the next iteration of the main loop will not consume a new character.
    pub(super) reconsume: bool,
    /// Chars of the fragment being read.
    pub(super) buffer: String,
    pub(super) current_token: Token,
    pub(super) token_stream: Vec<Token>,
    pub(super) issues: Vec<ParseIssue>,
}

impl Tokenizer {
    /// Create a new tokenizer for the given input. The initial state is the
    /// data state.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            state: TokenizerState::Data,
            input: input.chars().collect(),
            next_pos: 0,
            pos: 0,
            current_input_character: None,
            reconsume: false,
            buffer: String::new(),
            current_token: Token::new(TokenKind::Data, 0),
            token_stream: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after [`run`](Self::run).
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Consume the tokenizer and return the tokens together with the issues
    /// recovered from along the way.
    #[must_use]
    pub fn into_tokens_with_issues(self) -> (Vec<Token>, Vec<ParseIssue>) {
        (self.token_stream, self.issues)
    }

    /// Issues recovered from so far.
    #[must_use]
    pub fn get_issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Current state of the machine.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Run the state machine over the whole input. Calling it again after it
    /// finished does nothing.
    pub fn run(&mut self) {
        while self.state != TokenizerState::EndOfInput {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }

            let Some(c) = self.current_input_character else {
                self.handle_end_of_input();
                break;
            };

            match self.state {
                TokenizerState::Data => self.handle_data_state(c),
                TokenizerState::TagOpen => self.handle_tag_open_state(c),
                TokenizerState::TagWord => self.handle_tag_word_state(c),
                TokenizerState::DoubleQuoted => self.handle_quoted_state(c, '"'),
                TokenizerState::SingleQuoted => self.handle_quoted_state(c, '\''),
                TokenizerState::ScriptRawText => self.handle_script_raw_text_state(c),
                TokenizerState::CommentMaybe => self.handle_comment_maybe_state(c),
                TokenizerState::CommentMaybeDash => self.handle_comment_maybe_dash_state(c),
                TokenizerState::Comment => self.handle_comment_state(c),
                TokenizerState::Error => self.handle_error_state(),
                TokenizerState::EndOfInput => break,
            }
        }
    }

    fn handle_data_state(&mut self, c: char) {
        match c {
            '<' => {
                self.flush_buffer();
                self.begin_token(TokenKind::Tag, self.pos + 1);
                self.switch_to(TokenizerState::TagOpen);
            }
            _ => self.buffer.push(c),
        }
    }

    fn handle_tag_open_state(&mut self, c: char) {
        match c {
            '!' => {
                self.buffer.push(c);
                self.switch_to(TokenizerState::CommentMaybe);
            }
            '"' => self.switch_to(TokenizerState::DoubleQuoted),
            '\'' => self.switch_to(TokenizerState::SingleQuoted),
            '=' => self.current_token.push("=".to_string()),
            '<' => self.drop_malformed_tag(),
            '>' if self.current_token.is_empty() => self.drop_empty_tag(),
            '>' => self.close_tag(),
            c if c.is_whitespace() => {}
            _ => {
                self.buffer.push(c);
                self.switch_to(TokenizerState::TagWord);
            }
        }
    }

    fn handle_tag_word_state(&mut self, c: char) {
        match c {
            c if c.is_whitespace() => {
                self.flush_buffer();
                self.switch_to(TokenizerState::TagOpen);
            }
            '=' => {
                self.flush_buffer();
                self.current_token.push("=".to_string());
                self.switch_to(TokenizerState::TagOpen);
            }
            '>' => self.close_tag(),
            _ => self.buffer.push(c),
        }
    }

    /// Quotes keep `<`, `>` and whitespace literally. An empty quoted value
    /// still counts as a fragment.
    fn handle_quoted_state(&mut self, c: char, quote: char) {
        if c == quote {
            let value = std::mem::take(&mut self.buffer);
            self.current_token.push(value);
            self.switch_to(TokenizerState::TagOpen);
        } else {
            self.buffer.push(c);
        }
    }

    /// The body ends at the first `>` whose preceding six chars spell
    /// `script`, so the closing `</script` stays part of the body.
    fn handle_script_raw_text_state(&mut self, c: char) {
        if c == '>' && self.buffer.ends_with("script") {
            self.flush_buffer();
            self.begin_token(TokenKind::Data, self.pos + 1);
            self.switch_to(TokenizerState::Data);
        } else {
            self.buffer.push(c);
        }
    }

    fn handle_comment_maybe_state(&mut self, c: char) {
        if c == '-' {
            self.buffer.push(c);
            self.switch_to(TokenizerState::CommentMaybeDash);
        } else {
            // Not a comment: `!` starts an ordinary word such as `!DOCTYPE`.
            self.reconsume_in(TokenizerState::TagWord);
        }
    }

    fn handle_comment_maybe_dash_state(&mut self, c: char) {
        if c == '-' {
            self.buffer.push(c);
            self.current_token.kind = TokenKind::Comment;
            self.flush_buffer();
            self.switch_to(TokenizerState::Comment);
        } else {
            self.reconsume_in(TokenizerState::TagWord);
        }
    }

    fn handle_comment_state(&mut self, c: char) {
        if c == '>' && self.buffer.ends_with("--") {
            self.flush_buffer();
            self.begin_token(TokenKind::Data, self.pos + 1);
            self.switch_to(TokenizerState::Data);
        } else {
            self.buffer.push(c);
        }
    }

    /// Resume text at the current char, which is processed again as data.
    fn handle_error_state(&mut self) {
        self.begin_token(TokenKind::Data, self.pos);
        self.reconsume_in(TokenizerState::Data);
    }

    fn handle_end_of_input(&mut self) {
        self.flush_buffer();
        match self.state {
            TokenizerState::Comment => self.record_issue(ParseIssue::UnterminatedComment {
                offset: self.current_token.start,
            }),
            TokenizerState::ScriptRawText => self.record_issue(ParseIssue::UnterminatedScript {
                offset: self.current_token.start,
            }),
            _ => {}
        }
        self.switch_to(TokenizerState::EndOfInput);
        self.pos = self.input.len();
        self.begin_token(TokenKind::EndOfInput, self.pos);
    }
}

/// Tokenize a whole document.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    tokenizer.run();
    tokenizer.into_tokens()
}
