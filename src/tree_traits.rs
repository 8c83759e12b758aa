//! Terminal display of tree arrays.

use termtree::Tree;
use tracing::instrument;

use crate::render::TreeItem;

pub trait TreeDisplay {
    /// Build a printable tree labelled by `label_field` (falling back to the id).
    fn to_tree_string(&self, label_field: &str) -> Tree<String>;
}

fn label(item: &TreeItem, label_field: &str) -> String {
    item.record
        .text(label_field)
        .or_else(|| item.record.id().map(|id| id.to_string()))
        .unwrap_or_default()
}

impl TreeDisplay for TreeItem {
    fn to_tree_string(&self, label_field: &str) -> Tree<String> {
        let leaves: Vec<_> = self
            .child_list
            .iter()
            .map(|c| c.to_tree_string(label_field))
            .collect();
        Tree::new(label(self, label_field)).with_leaves(leaves)
    }
}

/// A forest hangs off a synthetic root named after the query id.
#[instrument(level = "trace", skip(items))]
pub fn forest_to_tree_string(root: &str, items: &[TreeItem], label_field: &str) -> Tree<String> {
    let leaves: Vec<_> = items
        .iter()
        .map(|item| item.to_tree_string(label_field))
        .collect();
    Tree::new(root.to_string()).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordSet;
    use crate::engine::TreeEngine;
    use serde_json::json;

    #[test]
    fn test_forest_display_lists_labels() {
        let engine = TreeEngine::new(
            RecordSet::from_value(json!([
                {"id": 1, "pid": 0, "name": "A"},
                {"id": 2, "pid": 1},
            ]))
            .unwrap(),
        );
        let items = engine.tree_array(0, "").unwrap();
        let rendered = forest_to_tree_string("0", &items, "name").to_string();
        assert!(rendered.starts_with("0\n"));
        assert!(rendered.contains("A"));
        assert!(rendered.contains("2"));
    }
}
