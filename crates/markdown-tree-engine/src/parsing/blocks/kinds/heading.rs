/// ATX (`# Title`) and Setext (`Title` / `===`) headings.
pub struct Heading;

impl Heading {
    pub const HASH: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses an ATX heading from a trimmed line, returning `(level, text)`.
    ///
    /// The level is the length of the leading `#` run, clamped to
    /// [`Heading::MAX_LEVEL`]. One space or tab after the run is dropped.
    pub fn atx(trimmed: &str) -> Option<(u8, &str)> {
        let hashes = trimmed.bytes().take_while(|&b| b == Self::HASH).count();
        if hashes == 0 {
            return None;
        }
        let rest = &trimmed[hashes..];
        let text = rest
            .strip_prefix(' ')
            .or_else(|| rest.strip_prefix('\t'))
            .unwrap_or(rest);
        let level = u8::try_from(hashes).unwrap_or(Self::MAX_LEVEL).min(Self::MAX_LEVEL);
        Some((level, text))
    }

    /// Returns the Setext level if the trimmed line is an underline:
    /// two or more `=` (level 1) or two or more `-` (level 2), nothing else.
    pub fn setext_underline(trimmed: &str) -> Option<u8> {
        let first = *trimmed.as_bytes().first()?;
        let level = match first {
            b'=' => 1,
            b'-' => 2,
            _ => return None,
        };
        if trimmed.len() >= 2 && trimmed.bytes().all(|b| b == first) {
            Some(level)
        } else {
            None
        }
    }
}
