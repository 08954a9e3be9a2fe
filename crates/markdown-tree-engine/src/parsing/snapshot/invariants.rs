use crate::parsing::{
    blocks::{ListItem, MarkdownNode},
    inline::Inline,
};

/// Validates parser output invariants.
///
/// Asserts that, at every nesting level:
/// - No two `Break` nodes are adjacent and every break has a positive size
/// - No text run is empty and no two adjacent runs share a style
/// - Header levels are within 1..=6
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(nodes: &[MarkdownNode]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(
                pair,
                [MarkdownNode::Break { .. }, MarkdownNode::Break { .. }]
            ),
            "adjacent breaks: {pair:?}"
        );
    }

    for node in nodes {
        match node {
            MarkdownNode::Break { size } => assert!(*size > 0, "empty break"),
            MarkdownNode::Header { level, inline } => {
                assert!((1..=6).contains(level), "header level out of range: {level}");
                check_inline(inline);
            }
            MarkdownNode::Paragraph { inline } => check_inline(inline),
            MarkdownNode::Blockquote { children, .. } => check(children),
            MarkdownNode::List { items }
            | MarkdownNode::OrderedList { items }
            | MarkdownNode::TaskList { items } => check_items(items),
            _ => {}
        }
    }
}

fn check_items(items: &[ListItem]) {
    for item in items {
        check_inline(&item.inline);
        check_items(&item.children);
    }
}

/// Asserts inline runs are non-empty and fully merged.
pub fn check_inline(inline: &[Inline]) {
    for node in inline {
        if let Inline::Text(run) = node {
            assert!(!run.text.is_empty(), "empty text run: {run:?}");
        }
    }
    for pair in inline.windows(2) {
        if let [Inline::Text(a), Inline::Text(b)] = pair {
            assert!(!a.same_style(b), "unmerged runs: {a:?} / {b:?}");
        }
    }
}
