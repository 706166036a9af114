//! CLI configuration.
//!
//! Resolved in three layers, later layers winning:
//!
//! 1. A YAML file passed with `--config`:
//!
//!    ```yaml
//!    default_criterion: time
//!    strategy: binary-heap
//!    reported_metrics: [time, distance]
//!    ```
//!
//! 2. Environment variables `ROTA_CRITERION` and `ROTA_STRATEGY`.
//! 3. Per-command flags (`--criterion`, `--strategy`), applied by the
//!    subcommand handlers.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use rota_core::Metric;
use rota_engine::SelectionStrategy;

/// Environment variable overriding [`RotaConfig::default_criterion`].
pub const ENV_CRITERION: &str = "ROTA_CRITERION";
/// Environment variable overriding [`RotaConfig::strategy`].
pub const ENV_STRATEGY: &str = "ROTA_STRATEGY";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotaConfig {
    /// Metric minimized when a command has no `--criterion`.
    pub default_criterion: Metric,
    /// Engine selection strategy when a command has no `--strategy`.
    pub strategy: SelectionStrategy,
    /// Metrics totalled along each route. `None` reports every metric the
    /// graph carries.
    pub reported_metrics: Option<Vec<Metric>>,
}

impl RotaConfig {
    /// Read the optional file, then apply the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|var| std::env::var(var).ok())
    }

    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration file");
        Ok(config)
    }

    /// Apply `ROTA_*` overrides looked up through `lookup`. Blank values are
    /// ignored.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let value = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(ENV_CRITERION) {
            self.default_criterion =
                raw.trim()
                    .parse()
                    .map_err(|e: rota_core::ValidationError| ConfigError::InvalidValue {
                        var: ENV_CRITERION,
                        reason: e.to_string(),
                    })?;
        }
        if let Some(raw) = value(ENV_STRATEGY) {
            self.strategy = raw.parse().map_err(|e: rota_engine::UnknownStrategy| {
                ConfigError::InvalidValue {
                    var: ENV_STRATEGY,
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(self)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults() {
        let config = RotaConfig::default();
        assert_eq!(config.default_criterion.as_str(), "weight");
        assert_eq!(config.strategy, SelectionStrategy::LinearScan);
        assert!(config.reported_metrics.is_none());
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rota.yaml");
        std::fs::write(
            &path,
            "default_criterion: time\nstrategy: binary-heap\nreported_metrics: [time, distance]\n",
        )
        .unwrap();
        let config = RotaConfig::from_file(&path).unwrap();
        assert_eq!(config.default_criterion, Metric::time());
        assert_eq!(config.strategy, SelectionStrategy::BinaryHeap);
        assert_eq!(
            config.reported_metrics,
            Some(vec![Metric::time(), Metric::distance()])
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rota.yaml");
        std::fs::write(&path, "strategy: binary-heap\n").unwrap();
        let config = RotaConfig::from_file(&path).unwrap();
        assert_eq!(config.default_criterion, Metric::weight());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rota.yaml");
        std::fs::write(&path, "criterion: time\n").unwrap();
        assert!(matches!(
            RotaConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = RotaConfig::from_file(Path::new("/nonexistent/rota.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let config = RotaConfig {
            default_criterion: Metric::distance(),
            ..RotaConfig::default()
        }
        .with_env_overrides(|var| match var {
            ENV_CRITERION => Some("time".to_string()),
            ENV_STRATEGY => Some("heap".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.default_criterion, Metric::time());
        assert_eq!(config.strategy, SelectionStrategy::BinaryHeap);
    }

    #[test]
    fn blank_env_is_ignored() {
        let config = RotaConfig::default()
            .with_env_overrides(|_| Some("  ".to_string()))
            .unwrap();
        assert_eq!(config, RotaConfig::default());
        assert_eq!(RotaConfig::default().with_env_overrides(no_env).unwrap(), RotaConfig::default());
    }

    #[test]
    fn bad_env_strategy_names_the_variable() {
        let err = RotaConfig::default()
            .with_env_overrides(|var| (var == ENV_STRATEGY).then(|| "dfs".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_STRATEGY));
    }
}
