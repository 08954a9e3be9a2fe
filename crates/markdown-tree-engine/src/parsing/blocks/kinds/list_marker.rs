/// List item markers: bullets, task boxes and ordinals.
pub struct ListMarker;

impl ListMarker {
    /// Bullet prefixes, each with its mandatory trailing space.
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "+ "];
    pub const TASK_OPEN: &'static str = "[ ]";
    pub const TASK_DONE: [&'static str; 2] = ["[x]", "[X]"];
    pub const ORDINAL_SUFFIX: &'static str = ". ";

    /// Strips a bullet marker from a trimmed line, returning the item text.
    pub fn bullet(trimmed: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
    }

    /// Splits a task box off bullet item text, returning `(completed, text)`.
    ///
    /// The box must be followed by a space or end the item.
    pub fn task(item: &str) -> Option<(bool, &str)> {
        let (completed, rest) = if let Some(rest) = item.strip_prefix(Self::TASK_OPEN) {
            (false, rest)
        } else {
            let rest = Self::TASK_DONE
                .iter()
                .find_map(|marker| item.strip_prefix(marker))?;
            (true, rest)
        };
        if rest.is_empty() {
            return Some((completed, rest));
        }
        rest.strip_prefix(' ').map(|text| (completed, text))
    }

    /// Strips an ordinal marker (`12. `) from a trimmed line, returning the item text.
    pub fn ordinal(trimmed: &str) -> Option<&str> {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        trimmed[digits..].strip_prefix(Self::ORDINAL_SUFFIX)
    }
}
