// lib/src/config/config_defaults.rs

use models::Layout;

use crate::config::config_structs::IntegrityMode;

pub const ENV_PREFIX: &str = "MEDGRAPH";
pub const ENV_SEPARATOR: &str = "__";

pub fn default_load_builtin_seed() -> bool { true }
pub fn default_integrity_mode() -> IntegrityMode { IntegrityMode::Reject }
pub fn default_layout() -> Layout { Layout::Force }
