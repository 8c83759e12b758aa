use crate::domain::{NodeId, TreeError, TreeResult};

/// Ids on the current root-to-node path of a recursive descent.
///
/// Entering an id that is already on the path means the parent references
/// loop back, which would otherwise recurse forever.
#[derive(Debug, Default)]
pub(crate) struct Lineage(Vec<NodeId>);

impl Lineage {
    /// Lineage seeded with the query root.
    pub(crate) fn rooted_at(root: &NodeId) -> Self {
        Self(vec![root.clone()])
    }

    pub(crate) fn enter(&mut self, id: &NodeId) -> TreeResult<()> {
        if self.0.contains(id) {
            tracing::warn!("cycle at id {id}, path: {:?}", self.0);
            return Err(TreeError::CycleDetected { id: id.to_string() });
        }
        self.0.push(id.clone());
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.0.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reentering_id_on_path_is_cycle() {
        let mut lineage = Lineage::rooted_at(&NodeId::ROOT);
        lineage.enter(&NodeId::Int(1)).unwrap();
        lineage.enter(&NodeId::Int(2)).unwrap();
        let err = lineage.enter(&NodeId::from("1")).unwrap_err();
        assert!(matches!(err, TreeError::CycleDetected { id } if id == "1"));
    }

    #[test]
    fn test_siblings_may_share_id_after_leave() {
        let mut lineage = Lineage::rooted_at(&NodeId::ROOT);
        lineage.enter(&NodeId::Int(2)).unwrap();
        lineage.leave();
        assert!(lineage.enter(&NodeId::Int(2)).is_ok());
    }
}
