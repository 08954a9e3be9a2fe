//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts the parsed tree to a stable, compact `Snap` format
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (breaks collapsed,
//!   runs merged, header levels in range)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture snapshots rather
//! than a separate formal grammar. Snapshots record block kinds, nesting, and
//! the text and style of every inline run.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
