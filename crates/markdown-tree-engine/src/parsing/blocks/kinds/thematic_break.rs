/// Horizontal rules: three or more of the same rule character, nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(trimmed: &str) -> bool {
        let Some(&first) = trimmed.as_bytes().first() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && trimmed.len() >= Self::MIN_LEN
            && trimmed.bytes().all(|b| b == first)
    }
}
