use itertools::Position;

use crate::config::Icons;
use crate::domain::{IdList, NodeId};

/// Per-node result of the connector computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
    /// Prefix drawn in front of the node itself
    pub spacer: String,
    /// Prefix handed down to the node's children
    pub child_prefix: String,
}

/// Glyph bookkeeping for visually indented output.
///
/// A node under prefix `P` gets `P + corner` if it is the last sibling and
/// `P + branch` otherwise; with an empty `P` (top level) it gets nothing.
/// Its children continue under `P + (nbsp | vertical) + nbsp`, the middle
/// part again only when `P` is non-empty.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Connector<'a> {
    icons: &'a Icons,
    nbsp: &'a str,
}

impl<'a> Connector<'a> {
    pub(crate) fn new(icons: &'a Icons, nbsp: &'a str) -> Self {
        Self { icons, nbsp }
    }

    pub(crate) fn step(&self, prefix: &str, is_last: bool) -> Step {
        let (glyph, continuation) = if is_last {
            (&self.icons.corner, self.nbsp)
        } else {
            (&self.icons.branch, self.icons.vertical.as_str())
        };
        if prefix.is_empty() {
            return Step {
                spacer: String::new(),
                child_prefix: self.nbsp.to_string(),
            };
        }
        Step {
            spacer: format!("{prefix}{glyph}"),
            child_prefix: format!("{prefix}{continuation}{}", self.nbsp),
        }
    }
}

pub(crate) fn is_last(position: Position) -> bool {
    matches!(position, Position::Last | Position::Only)
}

/// Selected and disabled ids of a rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marks {
    pub selected: IdList,
    pub disabled: IdList,
}

impl Marks {
    pub fn new(selected: impl Into<IdList>, disabled: impl Into<IdList>) -> Self {
        Self {
            selected: selected.into(),
            disabled: disabled.into(),
        }
    }

    /// `"selected"` or empty.
    pub(crate) fn selected(&self, id: &NodeId) -> &'static str {
        if self.selected.contains(id) {
            "selected"
        } else {
            ""
        }
    }

    /// `"disabled"` or empty.
    pub(crate) fn disabled(&self, id: &NodeId) -> &'static str {
        if self.disabled.contains(id) {
            "disabled"
        } else {
            ""
        }
    }
}
