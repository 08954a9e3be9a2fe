use serde::Serialize;

use crate::parsing::{
    blocks::{ListItem, MarkdownNode},
    inline::Inline,
};

#[derive(Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Serialize)]
pub struct BlockSnap {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<RunSnap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemSnap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockSnap>,
}

#[derive(Serialize)]
pub struct ItemSnap {
    pub indent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    pub runs: Vec<RunSnap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemSnap>,
}

#[derive(Serialize)]
pub struct RunSnap {
    pub text: String,
    /// Space-separated style names, or `plain` / `image`.
    pub marks: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

pub fn normalize(nodes: &[MarkdownNode]) -> Snap {
    Snap {
        blocks: nodes.iter().map(block_snap).collect(),
    }
}

fn block_snap(node: &MarkdownNode) -> BlockSnap {
    let mut snap = BlockSnap {
        kind: node.kind_name().to_string(),
        level: None,
        size: None,
        language: None,
        runs: node.inline().map(runs_snap).unwrap_or_default(),
        items: node
            .list_items()
            .map(|items| items.iter().map(item_snap).collect())
            .unwrap_or_default(),
        lines: vec![],
        children: vec![],
    };

    match node {
        MarkdownNode::Break { size } => snap.size = Some(*size),
        MarkdownNode::Header { level, .. } => snap.level = Some(*level),
        MarkdownNode::Blockquote { children, .. } => {
            snap.children = children.iter().map(block_snap).collect();
        }
        MarkdownNode::CodeBlock { language, lines } => {
            snap.language = Some(language.clone());
            snap.lines = lines
                .iter()
                .map(|l| format!("{}{}", " ".repeat(l.indent), l.text))
                .collect();
        }
        _ => {}
    }
    snap
}

fn item_snap(item: &ListItem) -> ItemSnap {
    ItemSnap {
        indent: item.indent,
        done: item.completed,
        runs: runs_snap(&item.inline),
        children: item.children.iter().map(item_snap).collect(),
    }
}

fn runs_snap(inline: &[Inline]) -> Vec<RunSnap> {
    inline
        .iter()
        .map(|node| match node {
            Inline::Text(run) => {
                let marks = [
                    (run.bold, "bold"),
                    (run.italic, "italic"),
                    (run.strikethrough, "strike"),
                    (run.code, "code"),
                ]
                .iter()
                .filter(|(on, _)| *on)
                .map(|(_, name)| *name)
                .collect::<Vec<_>>();
                RunSnap {
                    text: run.text.clone(),
                    marks: if marks.is_empty() {
                        "plain".to_string()
                    } else {
                        marks.join(" ")
                    },
                    url: run.url.clone(),
                }
            }
            Inline::Image(image) => RunSnap {
                text: image.alt.clone(),
                marks: "image".to_string(),
                url: image.url.clone(),
            },
        })
        .collect()
}
