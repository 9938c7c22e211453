// lib/src/config/config_helpers.rs

use std::path::Path;

use config::{Config, Environment, File, Map};
use log::{debug, info};
use models::errors::{GraphError, GraphResult};

use crate::config::config_defaults::{ENV_PREFIX, ENV_SEPARATOR};
use crate::config::config_structs::ServiceConfig;

/// Loads [`ServiceConfig`] from an optional YAML or TOML file, overlaid with
/// `MEDGRAPH_`-prefixed environment variables. Missing keys take their
/// defaults; a named file that does not exist is an error.
pub fn load_service_config(path: Option<&Path>) -> GraphResult<ServiceConfig> {
    load_with_env(path, None)
}

// `env` replaces the process environment when given.
fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> GraphResult<ServiceConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        if !path.exists() {
            return Err(GraphError::ConfigurationError(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        info!("Loading service configuration from {}", path.display());
        builder = builder.add_source(File::from(path));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(env),
    );

    let config = builder
        .build()
        .map_err(|e| GraphError::ConfigurationError(e.to_string()))?;
    let service_config: ServiceConfig = config
        .try_deserialize()
        .map_err(|e| GraphError::ConfigurationError(e.to_string()))?;
    debug!("Service configuration: {:?}", service_config);
    Ok(service_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntegrityMode;
    use models::Layout;
    use std::io::Write;

    fn write_config(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = ServiceConfig::default();
        assert!(config.load_builtin_seed);
        assert_eq!(config.integrity_mode, IntegrityMode::Reject);
        assert_eq!(config.default_layout, Layout::Force);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn reads_yaml_file() {
        let file = write_config(
            ".yaml",
            "seed_path: /tmp/extra.json\nload_builtin_seed: false\nintegrity_mode: quarantine\ndefault_layout: circular\n",
        );
        let config = load_service_config(Some(file.path())).unwrap();
        assert_eq!(config.seed_path.as_deref(), Some(Path::new("/tmp/extra.json")));
        assert!(!config.load_builtin_seed);
        assert_eq!(config.integrity_mode, IntegrityMode::Quarantine);
        assert_eq!(config.default_layout, Layout::Circular);
    }

    #[test]
    fn reads_partial_toml_file() {
        let file = write_config(".toml", "default_layout = \"hierarchical\"\n");
        let config = load_service_config(Some(file.path())).unwrap();
        assert_eq!(config.default_layout, Layout::Hierarchical);
        assert!(config.load_builtin_seed);
        assert_eq!(config.integrity_mode, IntegrityMode::Reject);
    }

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        let mut map = Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        Some(map)
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        let file = write_config(".yaml", "integrity_mode: reject
default_layout: circular
");
        let vars = env(&[
            ("MEDGRAPH_INTEGRITY_MODE", "quarantine"),
            ("MEDGRAPH_LOAD_BUILTIN_SEED", "false"),
            ("OTHER_DEFAULT_LAYOUT", "hierarchical"),
        ]);
        let config = load_with_env(Some(file.path()), vars).unwrap();
        assert_eq!(config.integrity_mode, IntegrityMode::Quarantine);
        assert!(!config.load_builtin_seed);
        assert_eq!(config.default_layout, Layout::Circular);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn environment_alone_configures_service() {
        let vars = env(&[("MEDGRAPH_SEED_PATH", "/srv/seed.json"), ("MEDGRAPH_DEFAULT_LAYOUT", "hierarchical")]);
        let config = load_with_env(None, vars).unwrap();
        assert_eq!(config.seed_path.as_deref(), Some(Path::new("/srv/seed.json")));
        assert_eq!(config.default_layout, Layout::Hierarchical);
        assert!(config.load_builtin_seed);
        assert_eq!(config.integrity_mode, IntegrityMode::Reject);
    }

    #[test]
    fn rejects_bad_values_and_missing_files() {
        let file = write_config(".yaml", "integrity_mode: ignore\n");
        assert!(matches!(
            load_service_config(Some(file.path())),
            Err(GraphError::ConfigurationError(_))
        ));
        assert!(matches!(
            load_service_config(Some(Path::new("/definitely/not/here.yaml"))),
            Err(GraphError::ConfigurationError(_))
        ));
    }
}
