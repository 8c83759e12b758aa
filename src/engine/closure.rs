//! Descendant and ancestor chains.
//!
//! `with_self` always contributes the record of the queried id exactly once
//! (first for descendants, last for ancestors), including for top-level ids
//! that are nobody's child.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::{NodeId, Record, TreeError, TreeResult};
use crate::engine::{Lineage, TreeEngine};

impl TreeEngine {
    /// All records below `id` in depth-first pre-order.
    #[instrument(level = "debug", skip(self, id))]
    pub fn descendants(&self, id: impl Into<NodeId>, with_self: bool) -> TreeResult<Vec<&Record>> {
        let id = id.into();
        let mut lineage = Lineage::rooted_at(&id);
        let below = self.descend(&id, &mut lineage)?;

        let mut result = Vec::with_capacity(below.len() + 1);
        if with_self {
            result.extend(self.find_by(&id));
        }
        result.extend(below);
        Ok(result)
    }

    fn descend(&self, id: &NodeId, lineage: &mut Lineage) -> TreeResult<Vec<&Record>> {
        let mut result = Vec::new();
        for child in self.children_of(id) {
            let Some(child_id) = child.id() else {
                continue;
            };
            lineage.enter(&child_id)?;
            result.push(child);
            result.extend(self.descend(&child_id, lineage)?);
            lineage.leave();
        }
        Ok(result)
    }

    pub fn descendant_ids(&self, id: impl Into<NodeId>, with_self: bool) -> TreeResult<Vec<NodeId>> {
        Ok(self
            .descendants(id, with_self)?
            .into_iter()
            .filter_map(Record::id)
            .collect())
    }

    /// Chain from the topmost ancestor down to the immediate parent of `id`.
    ///
    /// The walk stops at the root sentinel or at a parent id that is not in
    /// the record set.
    #[instrument(level = "debug", skip(self, id))]
    pub fn ancestors(&self, id: impl Into<NodeId>, with_self: bool) -> TreeResult<Vec<&Record>> {
        let id = id.into();
        let Some(start) = self.find_by(&id) else {
            return Ok(Vec::new());
        };

        let mut chain = Vec::new();
        if with_self {
            chain.push(start);
        }

        let mut visited = HashSet::from([id]);
        let mut next = start.parent_id(self.pid_name());
        while let Some(parent_id) = next.filter(|pid| !pid.is_root()) {
            let Some(parent) = self.find_by(&parent_id) else {
                break;
            };
            if !visited.insert(parent_id.clone()) {
                tracing::warn!("cycle in ancestors at id {parent_id}");
                return Err(TreeError::CycleDetected {
                    id: parent_id.to_string(),
                });
            }
            chain.push(parent);
            next = parent.parent_id(self.pid_name());
        }

        chain.reverse();
        Ok(chain)
    }

    pub fn ancestor_ids(&self, id: impl Into<NodeId>, with_self: bool) -> TreeResult<Vec<NodeId>> {
        Ok(self
            .ancestors(id, with_self)?
            .into_iter()
            .filter_map(Record::id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordSet;
    use serde_json::json;

    fn engine(records: serde_json::Value) -> TreeEngine {
        TreeEngine::new(RecordSet::from_value(records).unwrap())
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let engine = engine(json!([{"id": 1, "pid": 0}, {"id": 2, "pid": 2}]));
        assert!(matches!(
            engine.descendants(2, false),
            Err(TreeError::CycleDetected { .. })
        ));
        assert!(matches!(
            engine.ancestors(2, false),
            Err(TreeError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_cycle_unreachable_from_root_is_ignored() {
        let engine = engine(json!([
            {"id": 1, "pid": 0},
            {"id": 2, "pid": 3},
            {"id": 3, "pid": 2},
        ]));
        assert_eq!(engine.descendant_ids(0, false).unwrap(), vec![NodeId::Int(1)]);
    }

    #[test]
    fn test_root_level_with_self_emits_self_once() {
        let engine = engine(json!([{"id": 1, "pid": 0}, {"id": 2, "pid": 1}]));
        assert_eq!(
            engine.descendant_ids(1, true).unwrap(),
            vec![NodeId::Int(1), NodeId::Int(2)]
        );
    }
}
