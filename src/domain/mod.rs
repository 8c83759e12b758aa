//! Domain layer: records, identifiers and errors
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod id;
pub mod record;

pub use error::{TreeError, TreeResult};
pub use id::{ids_equal, IdList, NodeId};
pub use record::{is_truthy, value_text, Record, RecordSet, ID_FIELD};
