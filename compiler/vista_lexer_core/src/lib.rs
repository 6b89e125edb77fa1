//! Low-level scanning primitives for Vista templates.
//!
//! This crate knows nothing about tokens or delimiter families. It provides:
//! - [`Window`]: cached view of the unscanned input
//! - [`Cursor`]: forward-only byte cursor that routes every read through a window
//! - [`text`]: blank-run trimming and newline bookkeeping shared by all scanners

mod cursor;
pub mod text;
mod window;

pub use cursor::Cursor;
pub use window::Window;
