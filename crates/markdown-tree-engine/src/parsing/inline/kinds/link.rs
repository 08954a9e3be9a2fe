use super::escape::Escape;

/// The pieces of a `[text](url)` construct found by lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParts<'a> {
    /// Raw link text between the brackets, still containing inline markup.
    pub text: &'a str,
    /// Target between the parentheses.
    pub url: &'a str,
    /// Byte length of the whole construct, from `[` to `)` inclusive.
    pub len: usize,
}

pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Checks whether `s` starts with a well-formed `[text](url)`.
    ///
    /// Requires an unescaped `]`, an immediately following `(`, and a `)`
    /// somewhere after it on the line. Returns `None` for anything else so
    /// the caller can emit the bracket as literal text.
    pub fn scan(s: &str) -> Option<LinkParts<'_>> {
        let b = s.as_bytes();
        if b.first() != Some(&Self::OPEN) {
            return None;
        }
        let close = Escape::find_unescaped(b, 1, Self::CLOSE)?;
        if b.get(close + 1) != Some(&Self::URL_OPEN) {
            return None;
        }
        let url_start = close + 2;
        let url_len = b[url_start..].iter().position(|&c| c == Self::URL_CLOSE)?;
        let url_end = url_start + url_len;

        Some(LinkParts {
            text: &s[1..close],
            url: &s[url_start..url_end],
            len: url_end + 1,
        })
    }
}
