use std::sync::OnceLock;

use regex::Regex;

use super::link::{Link, LinkParts};
use crate::parsing::inline::types::CssUnit;

/// `![alt](url)` images with an optional `{width=.. height=..}` annotation.
pub struct InlineImage;

impl InlineImage {
    pub const BANG: u8 = b'!';

    /// Checks whether `s` starts with `![alt](url)`.
    ///
    /// The returned `len` covers the leading `!`.
    pub fn scan(s: &str) -> Option<LinkParts<'_>> {
        let rest = s.strip_prefix(Self::BANG as char)?;
        let parts = Link::scan(rest)?;
        Some(LinkParts {
            len: parts.len + 1,
            ..parts
        })
    }
}

/// Dimensions read from a brace annotation directly after an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    pub width: Option<CssUnit>,
    pub height: Option<CssUnit>,
    /// Byte length of the annotation, braces included.
    pub len: usize,
}

impl SizeHint {
    pub const OPEN: char = '{';
    pub const CLOSE: char = '}';

    /// Reads a `{width=120px height=50%}` style annotation at the start of `s`.
    ///
    /// Properties may appear in either order and either may be missing.
    /// Returns `None` unless at least one property has a valid number and a
    /// `px` or `%` unit, in which case the annotation is left as text.
    pub fn scan(s: &str) -> Option<SizeHint> {
        let body = s.strip_prefix(Self::OPEN)?;
        let close = body.find(Self::CLOSE)?;
        let body = &body[..close];

        let mut width = None;
        let mut height = None;
        for caps in size_property_regex().captures_iter(body) {
            let Ok(value) = caps[2].parse::<f64>() else {
                continue;
            };
            let unit = match &caps[3] {
                "px" => CssUnit::pixels(value),
                _ => CssUnit::percent(value),
            };
            match &caps[1] {
                "width" => width = Some(unit),
                _ => height = Some(unit),
            }
        }

        if width.is_none() && height.is_none() {
            return None;
        }
        Some(SizeHint {
            width,
            height,
            len: close + 2,
        })
    }
}

fn size_property_regex() -> &'static Regex {
    static SIZE_REGEX: OnceLock<Regex> = OnceLock::new();
    SIZE_REGEX.get_or_init(|| {
        Regex::new(r"\b(width|height)\s*=\s*([0-9]+(?:\.[0-9]+)?)(px|%)")
            .expect("Invalid image size regex")
    })
}
