//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, trimmed text, kind, Setext underline)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` consumes classified lines
//!    in order and emits `MarkdownNode`s, keeping code fences and blockquotes open
//!    across lines
//!
//! ## Modules
//!
//! - **`types`**: The block AST (`MarkdownNode`, `ListItem`, `CodeLine`, ...)
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence,
//!   Heading, ListMarker, ThematicBreak)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ListKind` and `attach` for placing items in nested lists
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Consecutive blank lines collapse into one `Break` carrying the count
//! - List nesting follows indentation along the rightmost open path only
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Blockquote text is re-parsed from scratch, so quotes can hold any block

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use containers::ListKind;
pub use types::{CodeLine, ListItem, MarkdownNode, Table, XmlNode};
