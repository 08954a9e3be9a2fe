/// Backslash escapes.
///
/// An unescaped backslash is dropped from the output and the character after
/// it loses any special meaning.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Finds the first occurrence of `target` at or after `from` that is not
    /// escaped by a preceding backslash.
    ///
    /// Escapes are consumed in pairs from the left, so `\\]` is an escaped
    /// backslash followed by a live `]`.
    pub fn find_unescaped(s: &[u8], from: usize, target: u8) -> Option<usize> {
        let mut i = from;
        while i < s.len() {
            match s[i] {
                Self::BACKSLASH => i += 2,
                b if b == target => return Some(i),
                _ => i += 1,
            }
        }
        None
    }
}
