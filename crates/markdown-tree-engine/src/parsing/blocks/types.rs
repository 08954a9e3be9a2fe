use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parsing::inline::Inline;

/// A block-level node of the document tree.
///
/// The set of variants is closed; every node serialises with a kebab-case
/// `"type"` tag so consumers can match exhaustively on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MarkdownNode {
    /// One or more consecutive blank lines.
    Break {
        /// How many blank source lines this node stands for.
        size: usize,
    },
    Paragraph {
        inline: Vec<Inline>,
    },
    /// An ATX (1..=6) or Setext (1..=2) heading.
    Header {
        level: u8,
        inline: Vec<Inline>,
    },
    /// A run of `> ` lines, re-parsed as a document of its own.
    Blockquote {
        children: Vec<MarkdownNode>,
        /// Indentation of the first quote line.
        indent: usize,
    },
    /// Bullet list (`-`, `*`, `+`).
    List {
        items: Vec<ListItem>,
    },
    /// Numbered list (`1.`).
    OrderedList {
        items: Vec<ListItem>,
    },
    /// Checkbox list (`- [ ]`, `- [x]`).
    TaskList {
        items: Vec<ListItem>,
    },
    CodeBlock {
        /// Tag after the opening fence, empty if none.
        language: String,
        lines: Vec<CodeLine>,
    },
    HorizontalRule,
    /// Declared for renderers; the parser never produces it.
    Table(Table),
    /// Declared for renderers; the parser never produces it.
    Xml(XmlNode),
}

impl MarkdownNode {
    /// The serialised `"type"` tag of this node.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            MarkdownNode::Break { .. } => "break",
            MarkdownNode::Paragraph { .. } => "paragraph",
            MarkdownNode::Header { .. } => "header",
            MarkdownNode::Blockquote { .. } => "blockquote",
            MarkdownNode::List { .. } => "list",
            MarkdownNode::OrderedList { .. } => "ordered-list",
            MarkdownNode::TaskList { .. } => "task-list",
            MarkdownNode::CodeBlock { .. } => "code-block",
            MarkdownNode::HorizontalRule => "horizontal-rule",
            MarkdownNode::Table(_) => "table",
            MarkdownNode::Xml(_) => "xml",
        }
    }

    /// Inline content of paragraphs and headers.
    #[must_use]
    pub fn inline(&self) -> Option<&[Inline]> {
        match self {
            MarkdownNode::Paragraph { inline } | MarkdownNode::Header { inline, .. } => {
                Some(inline)
            }
            _ => None,
        }
    }

    /// Items of any of the three list kinds.
    #[must_use]
    pub fn list_items(&self) -> Option<&[ListItem]> {
        match self {
            MarkdownNode::List { items }
            | MarkdownNode::OrderedList { items }
            | MarkdownNode::TaskList { items } => Some(items),
            _ => None,
        }
    }
}

/// One list item and the items nested beneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub inline: Vec<Inline>,
    pub children: Vec<ListItem>,
    /// Indentation of the marker line, tabs counted as `tab_width` columns.
    pub indent: usize,
    /// `Some` only for task items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// A verbatim line inside a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLine {
    /// The line with its leading indentation removed.
    pub text: String,
    pub indent: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<Inline>,
    pub rows: Vec<Vec<Inline>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlNode {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlNode>,
}
