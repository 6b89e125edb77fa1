use super::*;
use pretty_assertions::assert_eq;
use vista_ir::{DelimiterPair, Delimiters, Token, TokenKind};


use TokenKind::{
    DirectiveClose, DirectiveName, DirectiveOpen, Expression, RawCodeClose, RawCodeOpen,
    SanitizedTagClose, SanitizedTagOpen, UnsanitizedTagClose, UnsanitizedTagOpen,
};

/// `{{ }}`, `{{! !}}` and `@( )@`.
fn at_delimiters() -> Delimiters {
    Delimiters::default().with_directive(DelimiterPair::new("@(", ")@").unwrap())
}

fn tok(kind: TokenKind, text: &str, line: u32) -> Token {
    Token::new(kind, text, line)
}

fn lex_at(input: &str) -> Vec<Token> {
    lex(&at_delimiters(), input).unwrap().into_vec()
}

fn lex_default(input: &str) -> Vec<Token> {
    lex(&Delimiters::default(), input).unwrap().into_vec()
}

// === Basic scenarios ===

#[test]
fn empty_input_has_no_tokens() {
    assert!(lex_at("").is_empty());
}

#[test]
fn plain_text_is_one_expression() {
    assert_eq!(
        lex_at("just some text."),
        vec![tok(Expression, "just some text.", 1)]
    );
}

#[test]
fn sanitized_tag_between_text() {
    assert_eq!(
        lex_at("Hello {{name}}!"),
        vec![
            tok(Expression, "Hello ", 1),
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "name", 1),
            tok(SanitizedTagClose, "}}", 1),
            tok(Expression, "!", 1),
        ]
    );
}

#[test]
fn unsanitized_tag_is_not_split_on_sanitized_open() {
    assert_eq!(
        lex_at("{{! raw !}}"),
        vec![
            tok(UnsanitizedTagOpen, "{{!", 1),
            tok(Expression, "raw", 1),
            tok(UnsanitizedTagClose, "!}}", 1),
        ]
    );
}

#[test]
fn tag_body_is_trimmed() {
    assert_eq!(
        lex_at("{{   $user->name   }}"),
        vec![
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "$user->name", 1),
            tok(SanitizedTagClose, "}}", 1),
        ]
    );
}

#[test]
fn empty_tag_has_no_expression() {
    assert_eq!(
        lex_at("{{ }}{{!!}}"),
        vec![
            tok(SanitizedTagOpen, "{{", 1),
            tok(SanitizedTagClose, "}}", 1),
            tok(UnsanitizedTagOpen, "{{!", 1),
            tok(UnsanitizedTagClose, "!}}", 1),
        ]
    );
}

#[test]
fn adjacent_tags() {
    assert_eq!(
        lex_at("{{a}}{{b}}"),
        vec![
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "a", 1),
            tok(SanitizedTagClose, "}}", 1),
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "b", 1),
            tok(SanitizedTagClose, "}}", 1),
        ]
    );
}

#[test]
fn stray_close_delimiter_is_literal() {
    assert_eq!(lex_at("a }} b !}}"), vec![tok(Expression, "a }} b !}}", 1)]);
}

// === Directives ===

#[test]
fn directive_with_expression() {
    assert_eq!(
        lex_at("@(if(x > 1))@"),
        vec![
            tok(DirectiveOpen, "@(", 1),
            tok(DirectiveName, "if", 1),
            tok(Expression, "x > 1", 1),
            tok(DirectiveClose, ")@", 1),
        ]
    );
}

#[test]
fn directive_without_expression() {
    assert_eq!(
        lex_at("@(endif)@"),
        vec![
            tok(DirectiveOpen, "@(", 1),
            tok(DirectiveName, "endif", 1),
            tok(DirectiveClose, ")@", 1),
        ]
    );
}

#[test]
fn directive_name_is_trimmed() {
    assert_eq!(
        lex_default("<% part ('main') %>"),
        vec![
            tok(DirectiveOpen, "<%", 1),
            tok(DirectiveName, "part", 1),
            tok(Expression, "'main'", 1),
            tok(DirectiveClose, "%>", 1),
        ]
    );
}

#[test]
fn directive_keeps_nested_parentheses() {
    assert_eq!(
        lex_at("@(if((a) && (b)))@"),
        vec![
            tok(DirectiveOpen, "@(", 1),
            tok(DirectiveName, "if", 1),
            tok(Expression, "(a) && (b)", 1),
            tok(DirectiveClose, ")@", 1),
        ]
    );
}

#[test]
fn directive_with_empty_parentheses() {
    assert_eq!(
        lex_at("@(show())@"),
        vec![
            tok(DirectiveOpen, "@(", 1),
            tok(DirectiveName, "show", 1),
            tok(DirectiveClose, ")@", 1),
        ]
    );
}

#[test]
fn directive_surrounded_by_text() {
    assert_eq!(
        lex_default("<ul><% foreach($items as $item) %><li>"),
        vec![
            tok(Expression, "<ul>", 1),
            tok(DirectiveOpen, "<%", 1),
            tok(DirectiveName, "foreach", 1),
            tok(Expression, "$items as $item", 1),
            tok(DirectiveClose, "%>", 1),
            tok(Expression, "<li>", 1),
        ]
    );
}

#[test]
fn quoted_parenthesis_still_counts() {
    // No string-literal awareness: the quoted `(` still opens a group.
    let err = lex(&at_delimiters(), "@(if(\"(\"))@").unwrap_err();
    assert_eq!(err, LexError::unbalanced_parenthesis(1));
}

// === Raw code ===

#[test]
fn raw_code_block() {
    assert_eq!(
        lex_at("a<?php echo $x; ?>b"),
        vec![
            tok(Expression, "a", 1),
            tok(RawCodeOpen, "<?php", 1),
            tok(Expression, "echo $x;", 1),
            tok(RawCodeClose, "?>", 1),
            tok(Expression, "b", 1),
        ]
    );
}

#[test]
fn short_raw_code_open_keeps_its_own_text() {
    assert_eq!(
        lex_at("<?= $x ?>"),
        vec![
            tok(RawCodeOpen, "<?", 1),
            tok(Expression, "= $x", 1),
            tok(RawCodeClose, "?>", 1),
        ]
    );
}

#[test]
fn raw_code_close_is_optional_at_eof() {
    assert_eq!(
        lex_at("<?php\nreturn 1;\n"),
        vec![tok(RawCodeOpen, "<?php", 1), tok(Expression, "return 1;", 2)]
    );
}

#[test]
fn empty_raw_code_block() {
    assert_eq!(lex_at("<?php"), vec![tok(RawCodeOpen, "<?php", 1)]);
}

// === Escapes ===

#[test]
fn escaped_sanitized_open_is_literal() {
    assert_eq!(
        lex_at("\\{{ literal }}"),
        vec![tok(Expression, "{{ literal }}", 1)]
    );
}

#[test]
fn escaped_unsanitized_open_is_literal() {
    assert_eq!(
        lex_at("a \\{{! b !}}"),
        vec![tok(Expression, "a {{! b !}}", 1)]
    );
}

#[test]
fn escaped_directive_open_is_literal() {
    assert_eq!(lex_at("\\@(if)@"), vec![tok(Expression, "@(if)@", 1)]);
}

#[test]
fn escape_then_real_tag() {
    assert_eq!(
        lex_at("\\{{x}} {{y}}"),
        vec![
            tok(Expression, "{{x}} ", 1),
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "y", 1),
            tok(SanitizedTagClose, "}}", 1),
        ]
    );
}

#[test]
fn backslash_without_delimiter_is_kept() {
    assert_eq!(lex_at("C:\\dir\\n"), vec![tok(Expression, "C:\\dir\\n", 1)]);
}

// === Longest match ===

#[test]
fn longer_open_wins_over_its_prefix() {
    // Sanitized open is a prefix of the directive open.
    let delims = Delimiters::default()
        .with_sanitized(DelimiterPair::new("[", "]").unwrap())
        .with_directive(DelimiterPair::new("[%", "%]").unwrap());
    let tokens = lex(&delims, "[% show %][x]").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![
            DirectiveOpen,
            DirectiveName,
            DirectiveClose,
            SanitizedTagOpen,
            Expression,
            SanitizedTagClose,
        ]
    );
}

#[test]
fn long_raw_code_open_beats_short() {
    let tokens = lex_at("<?phpx?>");
    assert_eq!(tokens[0], tok(RawCodeOpen, "<?php", 1));
    assert_eq!(tokens[1], tok(Expression, "x", 1));
}

#[test]
fn alphanumeric_delimiters_are_not_swallowed_by_text_runs() {
    let delims = Delimiters::default().with_directive(DelimiterPair::new("x(", ")x").unwrap());
    assert_eq!(
        lex(&delims, "abx(if)x").unwrap().into_vec(),
        vec![
            tok(Expression, "ab", 1),
            tok(DirectiveOpen, "x(", 1),
            tok(DirectiveName, "if", 1),
            tok(DirectiveClose, ")x", 1),
        ]
    );
}

// === Line tracking ===

#[test]
fn literal_newlines_advance_following_tokens() {
    assert_eq!(
        lex_at("line1\nline2 {{ x }}\n"),
        vec![
            tok(Expression, "line1\nline2 ", 1),
            tok(SanitizedTagOpen, "{{", 2),
            tok(Expression, "x", 2),
            tok(SanitizedTagClose, "}}", 2),
            tok(Expression, "\n", 2),
        ]
    );
}

#[test]
fn tag_body_line_is_its_first_content_line() {
    assert_eq!(
        lex_at("{{\n\n  x\n}}after"),
        vec![
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "x", 3),
            tok(SanitizedTagClose, "}}", 4),
            tok(Expression, "after", 4),
        ]
    );
}

#[test]
fn blank_multiline_tag() {
    assert_eq!(
        lex_at("{{\n\n}}"),
        vec![
            tok(SanitizedTagOpen, "{{", 1),
            tok(SanitizedTagClose, "}}", 3),
        ]
    );
}

#[test]
fn multiline_directive() {
    assert_eq!(
        lex_default("<%\n if (\n$x\n) %>\nbody"),
        vec![
            tok(DirectiveOpen, "<%", 1),
            tok(DirectiveName, "if", 2),
            tok(Expression, "$x", 3),
            tok(DirectiveClose, "%>", 4),
            tok(Expression, "\nbody", 4),
        ]
    );
}

#[test]
fn directive_name_followed_by_newline() {
    assert_eq!(
        lex_default("<% endif\n%>x"),
        vec![
            tok(DirectiveOpen, "<%", 1),
            tok(DirectiveName, "endif", 1),
            tok(DirectiveClose, "%>", 2),
            tok(Expression, "x", 2),
        ]
    );
}

#[test]
fn multiline_expression_keeps_inner_newlines() {
    assert_eq!(
        lex_at("@(if(a &&\nb))@"),
        vec![
            tok(DirectiveOpen, "@(", 1),
            tok(DirectiveName, "if", 1),
            tok(Expression, "a &&\nb", 1),
            tok(DirectiveClose, ")@", 2),
        ]
    );
}

// === Errors ===

#[test]
fn unterminated_sanitized_tag() {
    let err = lex(&at_delimiters(), "{{unterminated").unwrap_err();
    assert_eq!(err, LexError::unterminated_delimiter("}}", "", 1));
    assert_eq!(err.to_string(), "Expected }}, found  on line 1");
}

#[test]
fn unterminated_unsanitized_tag_reports_line() {
    let err = lex(&at_delimiters(), "a\nb\n{{! x").unwrap_err();
    assert_eq!(err, LexError::unterminated_delimiter("!}}", "", 3));
}

#[test]
fn unbalanced_parenthesis() {
    let err = lex(&at_delimiters(), "@(if(x > 1)@").unwrap_err();
    assert_eq!(err, LexError::unbalanced_parenthesis(1));
}

#[test]
fn unbalanced_parenthesis_at_eof() {
    let err = lex(&at_delimiters(), "@(if((x)").unwrap_err();
    assert_eq!(err, LexError::unbalanced_parenthesis(1));
}

#[test]
fn missing_directive_name() {
    let err = lex(&at_delimiters(), "ok @( )@").unwrap_err();
    assert_eq!(err, LexError::missing_directive_name(1));
}

#[test]
fn missing_directive_name_after_newlines() {
    let err = lex(&at_delimiters(), "@(\n\n(x))@").unwrap_err();
    assert_eq!(err, LexError::missing_directive_name(3));
}

#[test]
fn wrong_directive_close_shows_found_text() {
    let err = lex(&Delimiters::default(), "<% if %}").unwrap_err();
    assert_eq!(err, LexError::unterminated_delimiter("%>", "%}", 1));
    assert_eq!(err.to_string(), "Expected %>, found %} on line 1");
}

#[test]
fn unterminated_directive_at_eof() {
    let err = lex(&at_delimiters(), "@(if(x)").unwrap_err();
    assert_eq!(err, LexError::unterminated_delimiter(")@", "", 1));
}

#[test]
fn nul_ends_directive_name() {
    let err = lex(&at_delimiters(), "@(if\0)@").unwrap_err();
    assert_eq!(err, LexError::unterminated_delimiter(")@", "\0)", 1));
}

#[test]
fn nul_padding_is_trimmed_from_tag_bodies() {
    assert_eq!(
        lex_at("{{\0name\0}}"),
        vec![
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "name", 1),
            tok(SanitizedTagClose, "}}", 1),
        ]
    );
}

// === Lexer reuse ===

#[test]
fn lexer_state_resets_between_calls() {
    let lexer = Lexer::new();
    let delims = at_delimiters();
    let first = lexer.lex(&delims, "a\nb\n{{x}}").unwrap();
    assert_eq!(first.last().map(|t| t.line), Some(3));

    // A failed call must not leak into the next.
    assert!(lexer.lex(&delims, "{{oops").is_err());

    let second = lexer.lex(&delims, "{{y}}").unwrap();
    assert_eq!(
        second.into_vec(),
        vec![
            tok(SanitizedTagOpen, "{{", 1),
            tok(Expression, "y", 1),
            tok(SanitizedTagClose, "}}", 1),
        ]
    );
}

#[test]
fn lexer_is_shareable_across_threads() {
    let lexer = Lexer::new();
    let delims = Delimiters::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let lexer = &lexer;
                let delims = &delims;
                scope.spawn(move || {
                    let input = format!("{i}{{{{ v{i} }}}}");
                    lexer.lex(delims, &input).unwrap().len()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }
    });
}
