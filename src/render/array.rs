//! Structured output: nested tree arrays and their flattened projection.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::domain::{is_truthy, NodeId, Record, TreeResult};
use crate::engine::{Lineage, TreeEngine};
use crate::render::connector::{is_last, Connector};

/// One node of a tree array: the record, its spacer and its children.
///
/// Serializes as the record's fields plus `spacer` and `childList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeItem {
    #[serde(flatten)]
    pub record: Record,
    pub spacer: String,
    #[serde(rename = "childList", default)]
    pub child_list: Vec<TreeItem>,
}

impl TreeItem {
    pub fn has_children(&self) -> bool {
        !self.child_list.is_empty()
    }
}

impl TreeEngine {
    /// Nested data below `id` with the same spacers the option list draws.
    #[instrument(level = "debug", skip(self, id))]
    pub fn tree_array(&self, id: impl Into<NodeId>, prefix: &str) -> TreeResult<Vec<TreeItem>> {
        let id = id.into();
        let mut lineage = Lineage::rooted_at(&id);
        self.array_level(&id, prefix, &mut lineage)
    }

    fn array_level(
        &self,
        parent_id: &NodeId,
        prefix: &str,
        lineage: &mut Lineage,
    ) -> TreeResult<Vec<TreeItem>> {
        let connector = Connector::new(&self.config.icons, &self.config.nbsp);
        let mut items = Vec::new();

        for (position, child) in self.children_of(parent_id).into_iter().with_position() {
            let Some(child_id) = child.id() else {
                continue;
            };
            lineage.enter(&child_id)?;

            let step = connector.step(prefix, is_last(position));
            let mut record = child.clone();
            record.remove("spacer");
            record.remove("childList");
            let child_list = self.array_level(&child_id, &step.child_prefix, lineage)?;
            items.push(TreeItem {
                record,
                spacer: step.spacer,
                child_list,
            });

            lineage.leave();
        }
        Ok(items)
    }

    /// [`TreeEngine::tree_array`] flattened with [`flatten_tree`].
    pub fn tree_list(&self, id: impl Into<NodeId>, field: &str) -> TreeResult<Vec<Record>> {
        Ok(flatten_tree(&self.tree_array(id, "")?, field))
    }
}

/// Flatten a tree array depth-first into indented records.
///
/// Each record keeps its `spacer`, gets `field` rewritten to
/// `"{spacer} {field}"` and a boolean `hasChild`. Items whose `id` is falsy
/// are not emitted, but their children are.
pub fn flatten_tree(items: &[TreeItem], field: &str) -> Vec<Record> {
    let mut result = Vec::new();
    for item in items {
        let mut record = item.record.clone();
        let text = record.text(field).unwrap_or_default();
        record.insert(field, format!("{} {}", item.spacer, text));
        record.insert("spacer", item.spacer.as_str());
        record.insert("hasChild", Value::Bool(item.has_children()));
        if record.get("id").is_some_and(is_truthy) {
            result.push(record);
        }
        result.extend(flatten_tree(&item.child_list, field));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordSet;
    use serde_json::json;

    fn engine() -> TreeEngine {
        TreeEngine::new(
            RecordSet::from_value(json!([
                {"id": 1, "pid": 0, "name": "A"},
                {"id": 2, "pid": 1, "name": "B"},
                {"id": 3, "pid": 1, "name": "C"},
                {"id": 4, "pid": 2, "name": "D"},
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn test_tree_array_spacers_match_option_list() {
        let items = engine().tree_array(0, "").unwrap();
        assert_eq!(items.len(), 1);
        let a = &items[0];
        assert_eq!(a.spacer, "");
        assert_eq!(a.child_list[0].spacer, "&nbsp;├");
        assert_eq!(a.child_list[0].child_list[0].spacer, "&nbsp;│&nbsp;└");
        assert_eq!(a.child_list[1].spacer, "&nbsp;└");
    }

    #[test]
    fn test_tree_item_serializes_flat_with_child_list() {
        let items = engine().tree_array(2, "").unwrap();
        let value = serde_json::to_value(&items).unwrap();
        assert_eq!(
            value,
            json!([{"id": 4, "pid": 2, "name": "D", "spacer": "", "childList": []}])
        );
    }

    #[test]
    fn test_flatten_skips_falsy_ids_but_keeps_children() {
        let items = vec![TreeItem {
            record: Record::try_from(json!({"id": 0, "name": "hidden"})).unwrap(),
            spacer: String::new(),
            child_list: vec![TreeItem {
                record: Record::try_from(json!({"id": 5, "name": "E"})).unwrap(),
                spacer: "&nbsp;└".into(),
                child_list: vec![],
            }],
        }];
        let flat = flatten_tree(&items, "name");
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].text("name").unwrap(), "&nbsp;└ E");
        assert_eq!(flat[0].get("hasChild"), Some(&json!(false)));
    }
}
