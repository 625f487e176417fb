//! # HR Configuration
//!
//! Settings a host applies when it creates an [`HrStore`](crate::store::HrStore).
//!
//! ## Configuration Sources
//! The core reads no environment variables and no files. A host that wants
//! configurable behavior deserializes an `HrConfig` from its own settings
//! (JSON, camelCase keys) and passes it in; otherwise the defaults below apply.

use serde::{Deserialize, Serialize};

/// How new employee ids are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4 strings.
    #[default]
    Uuid,

    /// Epoch milliseconds as a decimal string, bumped to stay strictly
    /// increasing when two ids are requested within the same millisecond.
    Timestamp,
}

/// HR store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HrConfig {
    /// Start new stores with the fixed seed roster.
    pub seed_on_start: bool,

    /// Id source for employees created through the form.
    pub id_strategy: IdStrategy,
}

impl Default for HrConfig {
    /// Seeded store with UUID ids.
    fn default() -> Self {
        HrConfig {
            seed_on_start: true,
            id_strategy: IdStrategy::Uuid,
        }
    }
}
