use serde::{Deserialize, Serialize};

/// Knobs for the block scanner.
///
/// Every field has a default, so a config file may set any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Columns a tab contributes to a line's indentation.
    pub tab_width: usize,
    /// How many blockquotes deep the quoted text is still block-parsed.
    /// Deeper quotes keep their lines as plain paragraphs.
    pub max_quote_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_TAB_WIDTH: usize = 4;
    pub const DEFAULT_MAX_QUOTE_DEPTH: usize = 32;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_width: Self::DEFAULT_TAB_WIDTH,
            max_quote_depth: Self::DEFAULT_MAX_QUOTE_DEPTH,
        }
    }
}
