//! Tag and raw-code sub-scanner.
//!
//! Sanitized tags, unsanitized tags and raw-code blocks share one shape:
//! open delimiter, free-form body, close delimiter. The body runs to the
//! first occurrence of the close delimiter; nothing inside it (quotes
//! included) can hide a close.

use vista_ir::TokenKind;
use vista_lexer_core::text::{self, NewlineSplit};

use crate::candidates::Statement;
use crate::scanner::ScanState;
use crate::{LexError, LexResult};

impl ScanState<'_, '_> {
    pub(crate) fn lex_delimited(&mut self, statement: Statement<'_>) -> LexResult<()> {
        self.push(statement.open_kind, statement.open);

        let body = self.cursor.eat_until(statement.close);
        let newlines = NewlineSplit::of(body);
        self.line += newlines.leading;

        let expression = text::trim_blank(body);
        if !expression.is_empty() {
            self.push(TokenKind::Expression, expression);
            self.line += newlines.trailing;
        }

        if self.cursor.eat(statement.close) {
            self.push(statement.close_kind, statement.close);
            return Ok(());
        }

        if statement.close_optional {
            return Ok(());
        }

        let found = self.cursor.peek_str(statement.close.len());
        Err(LexError::unterminated_delimiter(
            statement.close,
            found,
            self.line,
        ))
    }
}
