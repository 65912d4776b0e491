//! Rendered menu tree.
//!
//! Nodes own their children; the whole tree is built for one render and
//! dropped afterwards.

use serde::Serialize;

use super::menu_item::MenuItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuNode {
    pub item: MenuItem,
    /// Resolved link target, `None` when the item has no usable link.
    pub url: Option<String>,
    /// The item's target matches the current request.
    pub active: bool,
    /// The item renders its children open.
    pub expanded: bool,
    /// Ordered by `(order, id)`.
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn id(&self) -> i64 {
        self.item.id
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }
}

/// Forest of root menu nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuTree {
    pub roots: Vec<MenuNode>,
    /// Items that could not be attached (parent missing, or part of a cycle).
    #[serde(skip)]
    pub unreachable: usize,
}

impl MenuTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of reachable nodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first, pre-order walk in sibling order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    pub fn find(&self, id: i64) -> Option<&MenuNode> {
        self.iter().find(|node| node.id() == id)
    }

    pub fn active_ids(&self) -> Vec<i64> {
        self.iter().filter(|node| node.active).map(MenuNode::id).collect()
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a MenuNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a MenuNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a MenuTree {
    type Item = &'a MenuNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
