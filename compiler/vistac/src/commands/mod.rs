//! Command handlers for the Vista CLI.
//!
//! Shared helpers like `read_file` live in the module root.

mod lex;

pub use lex::{
    lex_file, parse_lex_options, render_json, render_text, LexOptions, OptionsError, OutputFormat,
};

/// Read a template file, or report the failure and exit.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
