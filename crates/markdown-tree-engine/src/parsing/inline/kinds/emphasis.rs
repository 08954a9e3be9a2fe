/// Emphasis delimiters.
///
/// Each delimiter toggles a style flag; there is no pairing and no
/// end-of-line auto-closing, so an unmatched marker leaves its style on for
/// the rest of the line.
pub struct Emphasis;

impl Emphasis {
    /// `**` toggles bold. Checked before [`Emphasis::STAR`] so `**` always wins.
    pub const STRONG: &'static [u8; 2] = b"**";
    /// A single `*` toggles italic.
    pub const STAR: u8 = b'*';
    /// A `_` toggles italic only when the next byte is not another `_`, so
    /// in `__` the first is literal and the second may toggle.
    pub const UNDERSCORE: u8 = b'_';
}

pub struct Strikethrough;

impl Strikethrough {
    /// `~~` toggles strikethrough. A lone `~` is plain text.
    pub const DELIM: &'static [u8; 2] = b"~~";
}
