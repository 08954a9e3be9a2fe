/// Fenced code blocks delimited by three backticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If the trimmed line opens a fence, returns its language tag (possibly empty).
    pub fn open(trimmed: &str) -> Option<&str> {
        trimmed
            .strip_prefix(Self::BACKTICKS)
            .map(|rest| rest.trim_matches([' ', '\t']))
    }

    /// Only a bare fence closes a block; ```` ```rust ```` inside a block is content.
    pub fn closes(trimmed: &str) -> bool {
        trimmed == Self::BACKTICKS
    }
}
