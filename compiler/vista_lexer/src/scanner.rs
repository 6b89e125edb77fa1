//! Per-call scan state and the top-level scan loop.
//!
//! A [`ScanState`] lives for exactly one lexing call. The loop walks the
//! input once: at each position it tries every open delimiter (longest
//! first), then the escaped form of each, and otherwise moves the current
//! character into the literal buffer.

use tracing::trace;
use vista_ir::{DelimiterSource, Token, TokenKind, TokenList};
use vista_lexer_core::text::count_newlines;
use vista_lexer_core::Cursor;

use crate::candidates::{Candidates, Family, Statement};
use crate::LexResult;

pub(crate) struct ScanState<'src, 'd> {
    pub(crate) cursor: Cursor<'src>,
    /// 1-based line of the next token to be emitted.
    pub(crate) line: u32,
    /// Literal text outside any tag, not yet emitted.
    literal: String,
    tokens: TokenList,
    candidates: Candidates<'d>,
}

impl<'src, 'd> ScanState<'src, 'd> {
    pub(crate) fn new(delimiters: &'d impl DelimiterSource, input: &'src str) -> Self {
        ScanState {
            cursor: Cursor::new(input),
            line: 1,
            literal: String::new(),
            tokens: TokenList::new(),
            candidates: Candidates::new(delimiters),
        }
    }

    /// Scan the whole input and hand back the tokens.
    pub(crate) fn run(mut self) -> LexResult<TokenList> {
        while !self.cursor.is_eof() {
            if !self.try_statements()? {
                self.take_literal_run();
            }
        }
        self.flush_literal();
        Ok(self.tokens)
    }

    /// Try every candidate at the cursor, restarting from the longest after
    /// each match or escape. Returns `true` if anything was consumed.
    fn try_statements(&mut self) -> LexResult<bool> {
        let mut consumed = false;
        let mut index = 0;

        while index < self.candidates.len() {
            let statement = self.candidates.get(index);

            if self.cursor.eat(statement.open) {
                self.flush_literal();
                self.dispatch(statement)?;
                consumed = true;
                index = 0;
                continue;
            }

            if self.cursor.current_byte() == Some(b'\\')
                && self.cursor.matches_escaped(statement.open)
            {
                trace!(open = statement.open, line = self.line, "escaped delimiter");
                self.cursor.advance_n(1 + statement.open.len());
                self.literal.push_str(statement.open);
                consumed = true;
                index = 0;
                continue;
            }

            index += 1;
        }

        Ok(consumed)
    }

    fn dispatch(&mut self, statement: Statement<'d>) -> LexResult<()> {
        trace!(
            family = ?statement.family,
            open = statement.open,
            line = self.line,
            "statement"
        );
        match statement.family {
            Family::Directive => self.lex_directive(statement),
            Family::SanitizedTag | Family::UnsanitizedTag | Family::RawCode => {
                self.lex_delimited(statement)
            }
        }
    }

    /// Move one character into the literal buffer, plus the alphanumeric
    /// run right after it.
    ///
    /// The run stops before any byte that could start an open delimiter, so
    /// taking it in one step gives the same tokens as going char by char.
    fn take_literal_run(&mut self) {
        let Some(c) = self.cursor.advance_char() else {
            return;
        };
        self.literal.push(c);

        let candidates = &self.candidates;
        let run = self
            .cursor
            .eat_while(|b| b.is_ascii_alphanumeric() && !candidates.may_open_at(b));
        self.literal.push_str(run);
    }

    /// Emit pending literal text as an `Expression` token.
    pub(crate) fn flush_literal(&mut self) {
        if self.literal.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.literal);
        let newlines = count_newlines(&text);
        self.push(TokenKind::Expression, text);
        self.line += newlines;
    }

    pub(crate) fn push(&mut self, kind: TokenKind, text: impl Into<String>) {
        let token = Token::new(kind, text, self.line);
        trace!(kind = %token.kind, text = %token.text, line = token.line, "token");
        self.tokens.push(token);
    }
}
