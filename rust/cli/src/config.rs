use serde::{Deserialize, Serialize};
use std::fs;

/// Largest hand the CLI will hand to the engine.
pub const MAX_HAND_SIZE: usize = 8;

pub const ENV_CONFIG: &str = "CRIB_CONFIG";
pub const ENV_KEEP: &str = "CRIB_KEEP";
pub const ENV_DEAL_SIZE: &str = "CRIB_DEAL_SIZE";
pub const ENV_SEED: &str = "CRIB_SEED";
pub const ENV_LOG: &str = "CRIB_LOG";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub keep: usize,
    pub deal_size: usize,
    pub seed: Option<u64>,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub keep: ValueSource,
    pub deal_size: ValueSource,
    pub seed: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            keep: ValueSource::Default,
            deal_size: ValueSource::Default,
            seed: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keep: 4,
            deal_size: 6,
            seed: None,
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `CRIB_CONFIG`, then `CRIB_*`
/// environment variables. Command-line flags are applied later by each command.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.keep {
            cfg.keep = v;
            sources.keep = ValueSource::File;
        }
        if let Some(v) = f.deal_size {
            cfg.deal_size = v;
            sources.deal_size = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(keep) = std::env::var(ENV_KEEP)
        && !keep.is_empty()
    {
        cfg.keep = keep
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_KEEP, keep)))?;
        sources.keep = ValueSource::Env;
    }
    if let Ok(size) = std::env::var(ENV_DEAL_SIZE)
        && !size.is_empty()
    {
        cfg.deal_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_DEAL_SIZE, size)))?;
        sources.deal_size = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_SEED, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(level) = std::env::var(ENV_LOG)
        && !level.is_empty()
    {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    keep: Option<usize>,
    #[serde(default)]
    deal_size: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_sizes(cfg.deal_size, cfg.keep).map_err(ConfigError::Invalid)?;
    let level = cfg.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

/// Shared by config validation and command flags.
pub fn validate_sizes(deal_size: usize, keep: usize) -> Result<(), String> {
    if keep == 0 {
        return Err("keep must be >=1".into());
    }
    if deal_size < keep {
        return Err(format!(
            "deal_size ({}) must be >= keep ({})",
            deal_size, keep
        ));
    }
    if deal_size > MAX_HAND_SIZE {
        return Err(format!("deal_size must be <= {}", MAX_HAND_SIZE));
    }
    Ok(())
}
