// ============================================================================
// Menu Core - Tree Builder
// File: crates/menu-core/src/services/tree_builder.rs
// Description: Flat menu items -> active/expanded annotated forest
// ============================================================================
//! Builds the menu forest from the flat item list of one fetch.
//!
//! Items are indexed by id, grouped by parent, then assembled bottom-up
//! with an explicit stack. A node is expanded when it is active or when
//! any of its children is expanded, which also covers every ancestor of
//! an active node.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{CurrentRequest, MenuItem, MenuNode, MenuTree};
use super::activation::is_active;
use super::link_resolver::{resolve_link, UrlResolver};

/// Node state before its children are attached.
struct Pending {
    item: MenuItem,
    url: Option<String>,
    active: bool,
}

pub fn build_menu_tree(
    mut items: Vec<MenuItem>,
    resolver: &dyn UrlResolver,
    request: Option<&CurrentRequest>,
) -> MenuTree {
    // sibling order, whatever order the repository returned
    items.sort_by_key(MenuItem::sort_key);

    // 1. id -> slot, with URL and active flag computed once per item
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(items.len());
    let mut pending: Vec<Option<Pending>> = Vec::with_capacity(items.len());
    for item in items {
        if index.contains_key(&item.id) {
            warn!(item_id = item.id, "Duplicate menu item id, keeping the first occurrence");
            continue;
        }
        let url = resolve_link(&item.link, resolver);
        let active = request.is_some_and(|req| is_active(&item.link, url.as_deref(), req));
        index.insert(item.id, pending.len());
        pending.push(Some(Pending { item, url, active }));
    }

    // 2. parent -> children, in sibling order
    let mut roots: Vec<usize> = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); pending.len()];
    for (slot, entry) in pending.iter().enumerate() {
        let Some(entry) = entry else { continue };
        match entry.item.parent_id {
            None => roots.push(slot),
            Some(parent_id) => match index.get(&parent_id) {
                Some(&parent_slot) => children[parent_slot].push(slot),
                None => debug!(
                    item_id = entry.item.id,
                    parent_id, "Menu item references a missing parent"
                ),
            },
        }
    }

    // 3. post-order assembly from the roots
    let mut built: Vec<Option<MenuNode>> = (0..pending.len()).map(|_| None).collect();
    let mut visited = vec![false; pending.len()];
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&slot| (slot, false)).collect();

    while let Some((slot, children_done)) = stack.pop() {
        if children_done {
            let Some(Pending { item, url, active }) = pending[slot].take() else {
                continue;
            };
            let child_nodes: Vec<MenuNode> = children[slot]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            let expanded = active || child_nodes.iter().any(|child| child.expanded || child.active);

            built[slot] = Some(MenuNode {
                item,
                url,
                active,
                expanded,
                children: child_nodes,
            });
            continue;
        }

        if visited[slot] {
            continue;
        }
        visited[slot] = true;
        stack.push((slot, true));
        stack.extend(children[slot].iter().rev().map(|&child| (child, false)));
    }

    let roots: Vec<MenuNode> = roots.iter().filter_map(|&slot| built[slot].take()).collect();
    let unreachable = pending.iter().filter(|entry| entry.is_some()).count();
    if unreachable > 0 {
        warn!(unreachable, "Menu items dropped: parent missing or not reachable from a root");
    }

    MenuTree { roots, unreachable }
}
