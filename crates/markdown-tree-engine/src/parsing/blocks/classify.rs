use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, ThematicBreak};

/// What a line is, judged from the line alone.
///
/// Setext underlines depend on the previous node and are reported separately
/// in [`LineClass::setext`]; this kind is what the line falls back to when
/// no paragraph precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    Quote { text: &'a str },
    Bullet { text: &'a str, completed: Option<bool> },
    Ordered { text: &'a str },
    ThematicBreak,
    FenceOpen { language: &'a str },
    Paragraph { text: &'a str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Leading whitespace width: spaces count 1, tabs count `tab_width`.
    pub indent: usize,
    /// The line with leading indentation removed, trailing whitespace kept.
    /// Used verbatim for code block content.
    pub content: &'a str,
    /// The line with leading and trailing spaces and tabs removed.
    pub trimmed: &'a str,
    /// Setext level if the line is a `===` / `---` underline.
    pub setext: Option<u8>,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownLineClassifier {
    tab_width: usize,
}

impl MarkdownLineClassifier {
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    /// Classifies a line (without its `\n`) into a [`LineClass`].
    ///
    /// Kinds are tried in priority order: blank, ATX heading, quote, bullet,
    /// ordinal, rule, fence, paragraph. The first match wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let content = line.trim_start_matches(WHITESPACE);
        let trimmed = content.trim_end_matches(WHITESPACE);

        LineClass {
            indent: self.indentation(line),
            content,
            trimmed,
            setext: Heading::setext_underline(trimmed),
            kind: Self::kind(trimmed),
        }
    }

    /// Width of the leading run of spaces and tabs.
    pub fn indentation(&self, line: &str) -> usize {
        line.bytes()
            .map_while(|b| match b {
                b' ' => Some(1),
                b'\t' => Some(self.tab_width),
                _ => None,
            })
            .sum()
    }

    fn kind(trimmed: &str) -> LineKind<'_> {
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if let Some((level, text)) = Heading::atx(trimmed) {
            return LineKind::Heading { level, text };
        }
        if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            return LineKind::Quote { text };
        }
        if let Some(item) = ListMarker::bullet(trimmed) {
            return match ListMarker::task(item) {
                Some((completed, text)) => LineKind::Bullet {
                    text,
                    completed: Some(completed),
                },
                None => LineKind::Bullet {
                    text: item,
                    completed: None,
                },
            };
        }
        if let Some(text) = ListMarker::ordinal(trimmed) {
            return LineKind::Ordered { text };
        }
        if ThematicBreak::matches(trimmed) {
            return LineKind::ThematicBreak;
        }
        if let Some(language) = CodeFence::open(trimmed) {
            return LineKind::FenceOpen { language };
        }
        LineKind::Paragraph { text: trimmed }
    }
}

const WHITESPACE: [char; 2] = [' ', '\t'];
