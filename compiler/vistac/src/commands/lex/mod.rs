//! `vista lex`: tokenize a template file and print its tokens.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use vista_ir::{DelimiterError, DelimiterKind, DelimiterPair, Delimiters, TokenList};

use super::read_file;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// One `T_KIND "text" @ line N` line per token.
    #[default]
    Text,
    Json,
}

/// Parsed arguments of `vista lex`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOptions {
    pub path: String,
    pub delimiters: Delimiters,
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum OptionsError {
    #[error("missing file path")]
    MissingPath,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("invalid {kind} delimiters: {source}")]
    Delimiters {
        kind: DelimiterKind,
        source: DelimiterError,
    },
}

/// Parse the arguments that follow `vista lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, OptionsError> {
    let mut path = None;
    let mut delimiters = Delimiters::default();
    let mut format = OutputFormat::Text;

    for arg in args {
        if arg == "--json" {
            format = OutputFormat::Json;
        } else if let Some((flag, value)) = arg.strip_prefix("--").and_then(|a| a.split_once('=')) {
            let kind = match flag {
                "directive" => DelimiterKind::Directive,
                "sanitized" => DelimiterKind::SanitizedTag,
                "unsanitized" => DelimiterKind::UnsanitizedTag,
                _ => return Err(OptionsError::UnknownOption(arg.clone())),
            };
            let pair = DelimiterPair::parse(value)
                .map_err(|source| OptionsError::Delimiters { kind, source })?;
            delimiters.set(kind, pair);
        } else if arg.starts_with('-') {
            return Err(OptionsError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(OptionsError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(OptionsError::MissingPath)?;
    Ok(LexOptions {
        path,
        delimiters,
        format,
    })
}

/// Human-readable token dump.
pub fn render_text(path: &str, tokens: &TokenList) -> String {
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in tokens {
        out.push_str("  ");
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: &'static str,
    text: &'a str,
    line: u32,
}

/// Token dump as a JSON array of `{kind, text, line}` objects.
pub fn render_json(tokens: &TokenList) -> Result<String, serde_json::Error> {
    let tokens: Vec<JsonToken<'_>> = tokens
        .iter()
        .map(|token| JsonToken {
            kind: token.kind.display_name(),
            text: &token.text,
            line: token.line,
        })
        .collect();
    serde_json::to_string_pretty(&tokens)
}

pub fn lex_file(options: &LexOptions) {
    let content = read_file(&options.path);
    debug!(path = %options.path, bytes = content.len(), "lexing file");

    let tokens = match vista_lexer::lex(&options.delimiters, &content) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match options.format {
        OutputFormat::Text => print!("{}", render_text(&options.path, &tokens)),
        OutputFormat::Json => match render_json(&tokens) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
    }
}
