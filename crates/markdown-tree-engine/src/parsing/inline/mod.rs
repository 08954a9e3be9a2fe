//! # Inline Parsing
//!
//! Cursor-based scanning of a single line into styled text runs and images.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! one inline-bearing block at a time (paragraphs, headings, list items).
//!
//! The scanner carries four style toggles (bold, italic, strikethrough,
//! code) and the active link target as local state:
//! - Delimiters flip a toggle; every character emitted afterwards carries it
//! - Backslash escapes remove the special meaning of the next character
//! - Backticks toggle code; other markers stay live inside a code span
//! - Links recurse into their text with the current toggles inherited
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Image), `TextRun`, `Image`, `CssUnit`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`parser`**: `parse_text()` entry point and `merge_runs()`

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{merge_runs, parse_text};
pub use types::{CssUnit, CssUnitType, Image, Inline, TextRun};
