//! Tree engine: a configured record set plus the traversals layered on it.
//!
//! - [`lookup`]: direct children and parent
//! - [`closure`]: descendant and ancestor chains
//! - [`crate::render`]: templated text and tree arrays
//!
//! The engine holds no derived state; every query re-scans the record set.

pub mod closure;
mod guard;
pub mod lookup;

pub(crate) use guard::Lineage;

use tracing::instrument;

use crate::config::{Icons, TreeConfig};
use crate::domain::{RecordSet, TreeError, TreeResult};

/// A record set together with its traversal configuration.
///
/// Constructed explicitly and owned by the caller. Queries take `&self`, so
/// one engine can serve concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct TreeEngine {
    pub(crate) records: RecordSet,
    pub(crate) config: TreeConfig,
}

impl TreeEngine {
    /// Engine with default configuration (`pid`, `&nbsp;`, `│ ├ └`).
    pub fn new(records: impl Into<RecordSet>) -> Self {
        Self {
            records: records.into(),
            config: TreeConfig::default(),
        }
    }

    /// Engine with optional parent-field and spacer-token overrides.
    pub fn init(
        records: impl Into<RecordSet>,
        pid_name: Option<&str>,
        nbsp: Option<&str>,
    ) -> TreeResult<Self> {
        let mut config = TreeConfig::default();
        if let Some(pid_name) = pid_name {
            config.pid_name = pid_name.to_string();
        }
        if let Some(nbsp) = nbsp {
            config.nbsp = nbsp.to_string();
        }
        Self::with_config(records, config)
    }

    #[instrument(level = "debug", skip(records))]
    pub fn with_config(records: impl Into<RecordSet>, config: TreeConfig) -> TreeResult<Self> {
        config.validate()?;
        let records = records.into();
        tracing::debug!("engine over {} records", records.len());
        Ok(Self { records, config })
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn pid_name(&self) -> &str {
        &self.config.pid_name
    }

    pub fn set_pid_name(&mut self, pid_name: impl Into<String>) -> TreeResult<()> {
        let pid_name = pid_name.into();
        if pid_name.trim().is_empty() {
            return Err(TreeError::config("parent field name must not be empty"));
        }
        self.config.pid_name = pid_name;
        Ok(())
    }

    pub fn set_nbsp(&mut self, nbsp: impl Into<String>) {
        self.config.nbsp = nbsp.into();
    }

    pub fn set_icons(&mut self, icons: Icons) -> TreeResult<()> {
        let candidate = TreeConfig {
            icons,
            ..self.config.clone()
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
