use crate::parsing::{ParseOptions, inline::parse_text, parse_at_depth};

use super::{
    classify::{LineClass, LineKind},
    containers::{ListKind, attach},
    kinds::CodeFence,
    types::{CodeLine, ListItem, MarkdownNode},
};

/// A code fence whose closing delimiter has not been seen yet.
#[derive(Debug)]
struct OpenFence {
    language: String,
    lines: Vec<CodeLine>,
}

/// A run of quote lines waiting to be re-parsed.
#[derive(Debug)]
struct OpenQuote<'a> {
    indent: usize,
    lines: Vec<&'a str>,
}

/// Phase 2 of block parsing: assembles classified lines into nodes.
///
/// Most lines become a node immediately. Two constructs stay open across
/// lines: a code fence (raw zone, every line is content until the closing
/// fence) and a blockquote (its lines are collected and parsed as a nested
/// document once the run ends).
pub struct BlockBuilder<'a> {
    options: ParseOptions,
    /// Blockquote nesting level of the document being built.
    depth: usize,
    fence: Option<OpenFence>,
    quote: Option<OpenQuote<'a>>,
    out: Vec<MarkdownNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(options: ParseOptions, depth: usize) -> Self {
        Self {
            options,
            depth,
            fence: None,
            quote: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.fence.is_some() {
            self.consume_fence_line(c);
            return;
        }

        if let LineKind::Quote { text } = c.kind {
            self.extend_quote(text, c.indent);
            return;
        }
        self.flush_quote();

        if let Some(level) = c.setext {
            if self.promote_paragraph(level) {
                return;
            }
        }

        match c.kind {
            LineKind::Blank => self.push_blank(),
            LineKind::Heading { level, text } => self.out.push(MarkdownNode::Header {
                level,
                inline: parse_text(text),
            }),
            LineKind::Bullet { text, completed } => {
                let kind = if completed.is_some() {
                    ListKind::Task
                } else {
                    ListKind::Bullet
                };
                self.push_item(kind, list_item(text, c.indent, completed));
            }
            LineKind::Ordered { text } => {
                self.push_item(ListKind::Ordered, list_item(text, c.indent, None));
            }
            LineKind::ThematicBreak => self.out.push(MarkdownNode::HorizontalRule),
            LineKind::FenceOpen { language } => {
                self.fence = Some(OpenFence {
                    language: language.to_string(),
                    lines: vec![],
                });
            }
            LineKind::Paragraph { text } => self.out.push(MarkdownNode::Paragraph {
                inline: parse_text(text),
            }),
            // Handled above
            LineKind::Quote { .. } => {}
        }
    }

    pub fn finish(mut self) -> Vec<MarkdownNode> {
        // EOF flush
        self.flush_quote();
        self.flush_fence();
        self.out
    }

    fn push_blank(&mut self) {
        if let Some(MarkdownNode::Break { size }) = self.out.last_mut() {
            *size += 1;
        } else {
            self.out.push(MarkdownNode::Break { size: 1 });
        }
    }

    /// Turns the previous paragraph into a Setext header. Returns false if
    /// the previous node is not a paragraph.
    fn promote_paragraph(&mut self, level: u8) -> bool {
        if !matches!(self.out.last(), Some(MarkdownNode::Paragraph { .. })) {
            return false;
        }
        if let Some(MarkdownNode::Paragraph { inline }) = self.out.pop() {
            self.out.push(MarkdownNode::Header { level, inline });
        }
        true
    }

    fn push_item(&mut self, kind: ListKind, item: ListItem) {
        let open = self
            .out
            .last_mut()
            .and_then(|node| kind.continues(node, item.indent));
        match open {
            Some(items) => attach(items, item),
            None => {
                log::debug!("opening {kind:?} list at indent {}", item.indent);
                self.out.push(kind.open(item));
            }
        }
    }

    fn extend_quote(&mut self, text: &'a str, indent: usize) {
        match &mut self.quote {
            Some(quote) => quote.lines.push(text),
            None => {
                self.quote = Some(OpenQuote {
                    indent,
                    lines: vec![text],
                })
            }
        }
    }

    fn flush_quote(&mut self) {
        let Some(quote) = self.quote.take() else {
            return;
        };

        let children = if self.depth < self.options.max_quote_depth {
            parse_at_depth(&quote.lines.join("\n"), self.options, self.depth + 1)
        } else {
            log::warn!(
                "blockquote nesting exceeds {} levels; keeping quoted lines as paragraphs",
                self.options.max_quote_depth
            );
            quote
                .lines
                .iter()
                .map(|line| MarkdownNode::Paragraph {
                    inline: parse_text(line),
                })
                .collect()
        };

        self.out.push(MarkdownNode::Blockquote {
            children,
            indent: quote.indent,
        });
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        let Some(fence) = self.fence.as_mut() else {
            return;
        };

        // Close on a bare fence only
        if CodeFence::closes(c.trimmed) {
            self.close_fence();
            return;
        }

        fence.lines.push(CodeLine {
            text: c.content.to_string(),
            indent: c.indent,
        });
    }

    fn close_fence(&mut self) {
        if let Some(fence) = self.fence.take() {
            self.out.push(MarkdownNode::CodeBlock {
                language: fence.language,
                lines: fence.lines,
            });
        }
    }

    fn flush_fence(&mut self) {
        if self.fence.is_some() {
            // Unterminated fence: emit as code block anyway
            log::debug!("code fence left open at end of input");
            self.close_fence();
        }
    }
}

fn list_item(text: &str, indent: usize, completed: Option<bool>) -> ListItem {
    ListItem {
        inline: parse_text(text),
        children: vec![],
        indent,
        completed,
    }
}
