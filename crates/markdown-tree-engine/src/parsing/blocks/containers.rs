use super::types::{ListItem, MarkdownNode};

/// Which list node a marker line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Task,
    Ordered,
}

impl ListKind {
    /// Wraps a first item in a new list node of this kind.
    pub fn open(self, item: ListItem) -> MarkdownNode {
        let items = vec![item];
        match self {
            ListKind::Bullet => MarkdownNode::List { items },
            ListKind::Task => MarkdownNode::TaskList { items },
            ListKind::Ordered => MarkdownNode::OrderedList { items },
        }
    }

    /// Returns the item vector of `node` if an item of this kind at `indent`
    /// continues it.
    ///
    /// A nested item joins whatever list is open, regardless of kind. At root
    /// level only a list of the same kind is continued.
    pub fn continues(self, node: &mut MarkdownNode, indent: usize) -> Option<&mut Vec<ListItem>> {
        let nested = node
            .list_items()
            .is_some_and(|items| is_nested(items, indent));
        if !nested && !self.matches(node) {
            return None;
        }
        match node {
            MarkdownNode::List { items }
            | MarkdownNode::TaskList { items }
            | MarkdownNode::OrderedList { items } => Some(items),
            _ => None,
        }
    }

    fn matches(self, node: &MarkdownNode) -> bool {
        matches!(
            (node, self),
            (MarkdownNode::List { .. }, ListKind::Bullet)
                | (MarkdownNode::TaskList { .. }, ListKind::Task)
                | (MarkdownNode::OrderedList { .. }, ListKind::Ordered)
        )
    }
}

fn is_nested(items: &[ListItem], indent: usize) -> bool {
    items.last().is_some_and(|root| indent > root.indent)
}

/// Places `item` in the tree rooted at `siblings`.
///
/// Walks down through the last item at each level while that item is indented
/// less than the new one; the new item becomes the last child of the deepest
/// such item, or a sibling at the level where the walk stopped. The walk only
/// follows the rightmost path, so it is as deep as the current nesting.
pub fn attach(siblings: &mut Vec<ListItem>, item: ListItem) {
    match siblings.last_mut() {
        Some(last) if last.indent < item.indent => attach(&mut last.children, item),
        _ => siblings.push(item),
    }
}
