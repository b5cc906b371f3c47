use crate::error::Error;
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::Path;

const CONFIG_FILE_STEM: &str = "Quicktree";
const ENV_PREFIX: &str = "QUICKTREE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Glob patterns matched against bare entry names. Matching children are
    /// dropped before they reach the scanner.
    pub ignore_patterns: Vec<String>,
}

/// Load `Quicktree.toml` from the working directory (if present), with
/// `QUICKTREE_*` environment variables layered on top.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(CONFIG_FILE_STEM).required(false))
        .add_source(env_source())
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

/// Same as [`load_configuration`] but reads the config file from `dir`.
pub fn load_configuration_from(dir: &Path) -> Result<AppConfig, Error> {
    let file = dir.join(format!("{}.toml", CONFIG_FILE_STEM));
    let builder = Config::builder()
        .add_source(ConfigFile::from(file.as_path()).required(false))
        .add_source(env_source())
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("ignore_patterns")
}

impl AppConfig {
    /// Append extra patterns (e.g. from the command line) after the configured ones.
    pub fn with_extra_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }
}
