// lib/src/config/config_structs.rs

use std::path::PathBuf;

use models::Layout;
use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;

/// What to do with a graph that fails referential-integrity checks at load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityMode {
    /// Refuse the graph.
    #[default]
    Reject,
    /// Drop dangling edges and load the rest. Duplicate ids are still refused.
    Quarantine,
}

/// Settings for [`MedicalGraphService`](crate::graph_service::MedicalGraphService).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// JSON seed file loaded on startup, after the built-in dataset.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    #[serde(default = "default_load_builtin_seed")]
    pub load_builtin_seed: bool,
    #[serde(default = "default_integrity_mode")]
    pub integrity_mode: IntegrityMode,
    #[serde(default = "default_layout")]
    pub default_layout: Layout,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            seed_path: None,
            load_builtin_seed: default_load_builtin_seed(),
            integrity_mode: default_integrity_mode(),
            default_layout: default_layout(),
        }
    }
}
