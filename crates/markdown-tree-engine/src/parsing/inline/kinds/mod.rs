//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - toggles code
//! - **`Emphasis`** / **`Strikethrough`**: `**`, `*`, `_`, `~~` style toggles
//! - **`Escape`**: backslash handling and unescaped lookahead
//! - **`Link`**: `[text](url)` lookahead
//! - **`InlineImage`** / **`SizeHint`**: `![alt](url){width=..}` lookahead
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strikethrough};
pub use escape::Escape;
pub use image::{InlineImage, SizeHint};
pub use link::{Link, LinkParts};
