//! Directive sub-scanner: `OPEN name (expression) CLOSE`.
//!
//! The name is a run of `[A-Za-z0-9_]` and whitespace. An optional
//! parenthesized expression follows; parentheses inside it are balanced,
//! and the outermost pair is dropped from the expression text.

use vista_ir::TokenKind;
use vista_lexer_core::text::{self, is_blank_byte, is_whitespace_byte, NewlineSplit};

use crate::candidates::Statement;
use crate::scanner::ScanState;
use crate::{LexError, LexResult};

#[inline]
fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || is_whitespace_byte(byte)
}

impl ScanState<'_, '_> {
    pub(crate) fn lex_directive(&mut self, statement: Statement<'_>) -> LexResult<()> {
        self.push(TokenKind::DirectiveOpen, statement.open);
        self.lex_directive_name()?;

        if self.cursor.eat("(") {
            self.lex_directive_expression(statement.close)?;
        }

        if !self.cursor.eat(statement.close) {
            let found = self.cursor.peek_str(statement.close.len());
            return Err(LexError::unterminated_delimiter(
                statement.close,
                found,
                self.line,
            ));
        }
        self.push(TokenKind::DirectiveClose, statement.close);
        Ok(())
    }

    fn lex_directive_name(&mut self) -> LexResult<()> {
        let raw = self.cursor.eat_while(is_name_byte);
        let newlines = NewlineSplit::of(raw);
        self.line += newlines.leading;

        let name = text::trim_blank(raw);
        if name.is_empty() {
            return Err(LexError::missing_directive_name(self.line));
        }
        self.push(TokenKind::DirectiveName, name);
        self.line += newlines.trailing;
        Ok(())
    }

    /// Scan after the opening `(` up to the directive's close delimiter.
    ///
    /// The close delimiter is not consumed. Quotes get no special treatment:
    /// a `)` or close delimiter inside a string literal still counts.
    fn lex_directive_expression(&mut self, close: &str) -> LexResult<()> {
        let mut depth: i64 = 1;
        let mut buffer = String::new();
        let mut has_content = false;
        let mut trailing_newlines = 0;

        while !self.cursor.matches(close) {
            let Some(c) = self.cursor.advance_char() else {
                break;
            };
            let kept = match c {
                '(' => {
                    depth += 1;
                    true
                }
                ')' => {
                    depth -= 1;
                    depth != 0
                }
                '\n' => {
                    if has_content {
                        trailing_newlines += 1;
                    } else {
                        self.line += 1;
                    }
                    true
                }
                _ => true,
            };
            if kept {
                buffer.push(c);
                has_content |= !u8::try_from(c).is_ok_and(is_blank_byte);
            }
        }

        if depth != 0 {
            return Err(LexError::unbalanced_parenthesis(self.line));
        }

        let expression = text::trim_blank(&buffer);
        if !expression.is_empty() {
            self.push(TokenKind::Expression, expression);
            self.line += trailing_newlines;
        }
        Ok(())
    }
}
