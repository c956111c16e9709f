//! Runtime configuration.
//!
//! Read from `config/config.toml` when present, overridden by `GP10__*`
//! environment variables (for example `GP10__DATABASE__URL`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/config.toml";
const ENV_PREFIX: &str = "GP10";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GpConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub note_index: NoteIndexConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
        }
    }
}

/// Location of the note index counter.
///
/// The counter lives in the system database rather than in the company
/// database, next to the company master table it is keyed by.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NoteIndexConfig {
    #[serde(default = "default_system_schema")]
    pub system_schema: String,
    #[serde(default = "default_procedure")]
    pub procedure: String,
    #[serde(default = "default_company_master")]
    pub company_master: String,
}

impl Default for NoteIndexConfig {
    fn default() -> Self {
        Self {
            system_schema: default_system_schema(),
            procedure: default_procedure(),
            company_master: default_company_master(),
        }
    }
}

fn default_db_url() -> String {
    "postgres://sa:sa@localhost:5432/TWO".to_string()
}

fn default_system_schema() -> String {
    "DYNAMICS".to_string()
}

fn default_procedure() -> String {
    "smGetNextNoteIndex".to_string()
}

fn default_company_master() -> String {
    "SY01500".to_string()
}

impl GpConfig {
    /// Load the configuration from `config/config.toml`, falling back to env vars.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if neither the file nor the environment can be read,
    /// or if a section is present but malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                if std::path::Path::new(CONFIG_FILE).exists() {
                    log::warn!("failed to load {CONFIG_FILE}, falling back to env: {err}");
                }
                Config::builder()
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {err}, then env-only error: {env_err}"
                        ))
                    })?
            }
        };

        settings.try_deserialize::<GpConfig>().map_err(|e| {
            ConfigError::Message(format!("GP configuration could not be deserialized: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> GpConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = from_toml("");
        assert_eq!(cfg, GpConfig::default());
        assert_eq!(cfg.note_index.procedure, "smGetNextNoteIndex");
        assert_eq!(cfg.note_index.system_schema, "DYNAMICS");
        assert!(cfg.database.url.ends_with("/TWO"));
    }

    #[test]
    fn test_partial_override() {
        let cfg = from_toml(
            r#"
            [database]
            url = "postgres://gp:gp@db:5432/FAB"

            [note_index]
            system_schema = "SYS"
            "#,
        );
        assert_eq!(cfg.database.url, "postgres://gp:gp@db:5432/FAB");
        assert_eq!(cfg.note_index.system_schema, "SYS");
        assert_eq!(cfg.note_index.company_master, "SY01500");
    }
}
