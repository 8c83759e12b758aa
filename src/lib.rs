//! Derived tree views over flat, parent-referencing record sets.
//!
//! A [`TreeEngine`] owns an ordered [`RecordSet`] (adjacency list: every record
//! has an `id` and a parent reference, `pid` by default) and answers:
//!
//! - lookups: [`TreeEngine::children`], [`TreeEngine::parent`]
//! - closures: [`TreeEngine::descendants`], [`TreeEngine::ancestors`] and their `_ids` variants
//! - renderings: option lists, nested lists, menus, dual-template lists,
//!   tree arrays and their flattened projection
//!
//! ```
//! use fasttree::{OptionList, RecordSet, TreeEngine};
//! use serde_json::json;
//!
//! let records = RecordSet::from_value(json!([
//!     {"id": 1, "pid": 0, "name": "A"},
//!     {"id": 2, "pid": 1, "name": "B"},
//!     {"id": 3, "pid": 1, "name": "C"},
//! ])).unwrap();
//! let engine = TreeEngine::new(records);
//!
//! let html = engine.option_list(0, &OptionList::new("@spacer@name|")).unwrap();
//! assert_eq!(html, "A|&nbsp;├B|&nbsp;└C|");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod exitcode;
pub mod render;
pub mod tree_traits;
pub mod util;

pub use config::{Icons, TreeConfig};
pub use domain::{ids_equal, IdList, NodeId, Record, RecordSet, TreeError, TreeResult};
pub use engine::TreeEngine;
pub use render::{flatten_tree, DualList, Marks, NestedList, OptionList, Template, TreeItem};
