use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Escape, InlineImage, Link, SizeHint, Strikethrough},
    types::{Image, Inline, TextRun},
};

/// The style flags active at the cursor. Every run emitted while a flag is
/// set carries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Toggles {
    bold: bool,
    italic: bool,
    strikethrough: bool,
    code: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Bold,
    Italic,
    Strikethrough,
    Code,
}

impl Toggles {
    fn flip(&mut self, t: Toggle) {
        match t {
            Toggle::Bold => self.bold = !self.bold,
            Toggle::Italic => self.italic = !self.italic,
            Toggle::Strikethrough => self.strikethrough = !self.strikethrough,
            Toggle::Code => self.code = !self.code,
        }
    }

    fn run(self, text: String, url: &str) -> TextRun {
        TextRun {
            text,
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
            code: self.code,
            url: url.to_string(),
        }
    }
}

/// Parses one line of inline markup into styled runs and images.
///
/// Adjacent runs with identical styling are merged before returning, so the
/// result never contains two consecutive [`TextRun`]s that [`TextRun::same_style`].
///
/// # Example
/// `"*a* b"` yields an italic `"a"` followed by a plain `" b"`.
pub fn parse_text(line: &str) -> Vec<Inline> {
    merge_runs(scan(line, Toggles::default(), ""))
}

/// Merges consecutive text runs that share style flags and link target.
///
/// Images are merge barriers. Running this on its own output is a no-op.
pub fn merge_runs(nodes: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Inline::Text(run) = &node {
            if let Some(Inline::Text(prev)) = out.last_mut() {
                if prev.same_style(run) {
                    prev.text.push_str(&run.text);
                    continue;
                }
            }
        }
        out.push(node);
    }
    out
}

/// Scans `s` with the given starting toggles, tagging every run with `url`.
///
/// Link text is scanned by a nested call so it inherits the caller's toggles;
/// toggles flipped inside the link do not leak back out. A link with empty
/// text yields no runs, so its url is dropped.
fn scan(s: &str, mut toggles: Toggles, url: &str) -> Vec<Inline> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text = String::new();

    // Helper to flush accumulated characters as a run in the current style
    fn flush_text(out: &mut Vec<Inline>, text: &mut String, toggles: Toggles, url: &str) {
        if !text.is_empty() {
            out.push(Inline::Text(toggles.run(std::mem::take(text), url)));
        }
    }

    while let Some(b) = cur.peek() {
        if b == Escape::BACKSLASH {
            cur.bump();
            if let Some(c) = cur.bump_char() {
                text.push(c);
            }
            continue;
        }

        if let Some(t) = try_parse_toggle(&mut cur) {
            flush_text(&mut out, &mut text, toggles, url);
            toggles.flip(t);
            continue;
        }

        if b == Link::OPEN {
            if let Some(link) = Link::scan(cur.rest()) {
                flush_text(&mut out, &mut text, toggles, url);
                out.extend(scan(link.text, toggles, link.url));
                cur.bump_n(link.len);
                continue;
            }
        }

        if b == InlineImage::BANG {
            if let Some(image) = try_parse_image(&mut cur) {
                flush_text(&mut out, &mut text, toggles, url);
                out.push(Inline::Image(image));
                continue;
            }
        }

        if let Some(c) = cur.bump_char() {
            text.push(c);
        }
    }

    flush_text(&mut out, &mut text, toggles, url);
    out
}

/// Consumes a style delimiter at the cursor, returning the flag it flips.
///
/// Two-character delimiters are checked first so `**` is bold rather than
/// two italic toggles.
fn try_parse_toggle(cur: &mut Cursor<'_>) -> Option<Toggle> {
    if cur.starts_with(Emphasis::STRONG) {
        cur.bump_n(Emphasis::STRONG.len());
        return Some(Toggle::Bold);
    }
    if cur.starts_with(Strikethrough::DELIM) {
        cur.bump_n(Strikethrough::DELIM.len());
        return Some(Toggle::Strikethrough);
    }
    let t = match cur.peek()? {
        Emphasis::STAR => Toggle::Italic,
        Emphasis::UNDERSCORE if cur.peek_nth(1) != Some(Emphasis::UNDERSCORE) => Toggle::Italic,
        CodeSpan::TICK => Toggle::Code,
        _ => return None,
    };
    cur.bump();
    Some(t)
}

/// Attempts to parse `![alt](url)` plus an optional size annotation.
///
/// On failure the cursor is left untouched.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<Image> {
    let parts = InlineImage::scan(cur.rest())?;
    cur.bump_n(parts.len);

    let mut image = Image {
        url: parts.url.to_string(),
        alt: parts.text.to_string(),
        width: None,
        height: None,
    };
    if let Some(hint) = SizeHint::scan(cur.rest()) {
        image.width = hint.width;
        image.height = hint.height;
        cur.bump_n(hint.len);
    }
    Some(image)
}
