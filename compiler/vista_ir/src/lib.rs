//! Vista IR - shared value types for the template front end.
//!
//! This crate contains the data that crosses crate boundaries:
//! - Tokens and `TokenList` for lexer output
//! - Delimiter pairs and the `DelimiterSource` capability the lexer reads
//!
//! Everything here is plain owned data: `Clone`, `Eq`, `Hash`, `Debug`,
//! and `Send + Sync`, so a token list can be handed to a parser on any
//! thread once lexing has finished.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod delimiter;
mod token;

pub use delimiter::{
    DelimiterError, DelimiterKind, DelimiterPair, DelimiterSource, Delimiters,
    RAW_CODE_CLOSE, RAW_CODE_OPEN, RAW_CODE_SHORT_OPEN,
};
pub use token::{Token, TokenKind, TokenList};
