//! Subtree deletion planning.
//!
//! Deleting a folder removes its entire subtree. Instead of recursing
//! over parent references, the plan is computed with an explicit
//! worklist over an arena of folder records indexed by id: no recursion
//! depth limit applies, and a malformed parent chain (self-reference or
//! loop) is detected via the visited set and fails fast instead of
//! looping forever.

use std::collections::{HashMap, HashSet};

use coursehub_core::error::AppError;
use coursehub_entity::folder::Folder;

/// Index the direct children of every folder in the arena.
pub fn children_by_parent(folders: &[Folder]) -> HashMap<i64, Vec<i64>> {
    let mut index: HashMap<i64, Vec<i64>> = HashMap::new();
    for folder in folders {
        if let Some(parent_id) = folder.parent_id {
            index.entry(parent_id).or_default().push(folder.id);
        }
    }
    index
}

/// Compute the deletion order for the subtree rooted at `root_id`.
///
/// The returned ids are post-order: every child appears before its
/// parent, so executing the deletes in order never leaves an orphan.
/// Fails if the parent chain contains a cycle.
pub fn plan_subtree_deletion(
    root_id: i64,
    children: &HashMap<i64, Vec<i64>>,
) -> Result<Vec<i64>, AppError> {
    let mut visited: HashSet<i64> = HashSet::new();
    let mut order: Vec<i64> = Vec::new();
    // (id, expanded): an id is pushed unexpanded, re-pushed expanded once
    // its children are on the stack, and emitted on the second pop.
    let mut stack: Vec<(i64, bool)> = vec![(root_id, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            order.push(id);
            continue;
        }
        if !visited.insert(id) {
            return Err(AppError::internal(format!(
                "Cycle detected in folder hierarchy at folder {id}"
            )));
        }
        stack.push((id, true));
        if let Some(child_ids) = children.get(&id) {
            for &child_id in child_ids {
                stack.push((child_id, false));
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn folder(id: i64, parent_id: Option<i64>) -> Folder {
        Folder {
            id,
            batch_id: 1,
            name: format!("folder-{id}"),
            parent_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_post_order_children_before_parent() {
        // root(1) -> {A(2) -> {C(4)}, B(3)}
        let arena = vec![
            folder(1, None),
            folder(2, Some(1)),
            folder(3, Some(1)),
            folder(4, Some(2)),
        ];
        let children = children_by_parent(&arena);

        let order = plan_subtree_deletion(1, &children).expect("plan");

        assert_eq!(order.len(), 4);
        assert_eq!(*order.last().unwrap(), 1);
        let position = |id: i64| order.iter().position(|&x| x == id).unwrap();
        assert!(position(4) < position(2));
        assert!(position(2) < position(1));
        assert!(position(3) < position(1));
    }

    #[test]
    fn test_leaf_plan_is_single_id() {
        let arena = vec![folder(1, None), folder(2, Some(1))];
        let children = children_by_parent(&arena);
        assert_eq!(plan_subtree_deletion(2, &children).expect("plan"), vec![2]);
    }

    #[test]
    fn test_subtree_plan_ignores_siblings() {
        let arena = vec![
            folder(1, None),
            folder(2, Some(1)),
            folder(3, Some(1)),
            folder(4, Some(2)),
        ];
        let children = children_by_parent(&arena);

        let order = plan_subtree_deletion(2, &children).expect("plan");
        assert_eq!(order, vec![4, 2]);
    }

    #[test]
    fn test_self_reference_fails_fast() {
        let arena = vec![folder(1, Some(1))];
        let children = children_by_parent(&arena);

        let err = plan_subtree_deletion(1, &children).unwrap_err();
        assert!(err.message.contains("Cycle detected"));
    }

    #[test]
    fn test_two_node_loop_fails_fast() {
        let arena = vec![folder(1, Some(2)), folder(2, Some(1))];
        let children = children_by_parent(&arena);

        assert!(plan_subtree_deletion(1, &children).is_err());
        assert!(plan_subtree_deletion(2, &children).is_err());
    }
}
