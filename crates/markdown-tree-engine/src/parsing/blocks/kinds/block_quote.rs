/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, marker plus one mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text of a trimmed line, or `None` if the line is
    /// not a quote line.
    ///
    /// Only the first `> ` is stripped; nested markers stay in the text so
    /// the recursive parse of the quote sees them.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX)
    }
}
