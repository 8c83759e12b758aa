//! Direct relationships: children and parent.

use tracing::instrument;

use crate::domain::{NodeId, Record};
use crate::engine::TreeEngine;

impl TreeEngine {
    /// Records whose parent reference equals `parent_id`, in scan order.
    ///
    /// Records without an `id` are skipped.
    #[instrument(level = "trace", skip(self, parent_id))]
    pub fn children(&self, parent_id: impl Into<NodeId>) -> Vec<&Record> {
        self.children_of(&parent_id.into())
    }

    pub(crate) fn children_of(&self, parent_id: &NodeId) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.id().is_some())
            .filter(|record| record.parent_id(self.pid_name()).as_ref() == Some(parent_id))
            .collect()
    }

    pub(crate) fn has_children(&self, id: &NodeId) -> bool {
        self.records.iter().any(|record| {
            record.id().is_some() && record.parent_id(self.pid_name()).as_ref() == Some(id)
        })
    }

    pub(crate) fn find_by(&self, id: &NodeId) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.id().as_ref() == Some(id))
    }

    /// Parent record of `id`.
    ///
    /// `None` when `id` is unknown, is a top-level node, or references a
    /// parent that is not in the record set.
    #[instrument(level = "trace", skip(self, id))]
    pub fn parent(&self, id: impl Into<NodeId>) -> Option<&Record> {
        let record = self.find_by(&id.into())?;
        let parent_id = record.parent_id(self.pid_name())?;
        if parent_id.is_root() {
            return None;
        }
        self.find_by(&parent_id)
    }
}
