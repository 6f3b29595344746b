//! Layered CLI configuration.
//!
//! Values resolve as defaults, then the TOML file named by `BLACKJACK_CONFIG`,
//! then `BLACKJACK_*` environment overrides. Command-line flags win over all
//! of these and are applied by the individual commands.

use blackjack_ai::create_agent;
use blackjack_engine::dealer::{DealerPolicy, DEFAULT_THRESHOLD};
use blackjack_engine::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub dealer: String,
    pub threshold: u32,
    pub agent: String,
    pub rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            dealer: "reach17".into(),
            threshold: DEFAULT_THRESHOLD,
            agent: "baseline".into(),
            rounds: 1,
        }
    }
}

impl Config {
    /// Resolves a dealer policy name. `threshold` takes its limit from
    /// [`Config::threshold`]; other names go through
    /// [`DealerPolicy::from_name`].
    pub fn policy_named(&self, name: &str) -> Result<DealerPolicy, GameError> {
        if name.trim().eq_ignore_ascii_case("threshold") {
            return Ok(DealerPolicy::ReachThreshold {
                threshold: self.threshold,
            });
        }
        DealerPolicy::from_name(name)
    }

    pub fn dealer_policy(&self) -> Result<DealerPolicy, GameError> {
        self.policy_named(&self.dealer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub dealer: ValueSource,
    pub threshold: ValueSource,
    pub agent: ValueSource,
    pub rounds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            dealer: ValueSource::Default,
            threshold: ValueSource::Default,
            agent: ValueSource::Default,
            rounds: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration reading variables through `env`.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    // empty values count as unset
    let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.dealer {
            cfg.dealer = v;
            sources.dealer = ValueSource::File;
        }
        if let Some(v) = f.threshold {
            cfg.threshold = v;
            sources.threshold = ValueSource::File;
        }
        if let Some(v) = f.agent {
            cfg.agent = v;
            sources.agent = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
    }

    if let Some(seed) = var("BLACKJACK_SEED") {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(dealer) = var("BLACKJACK_DEALER") {
        cfg.dealer = dealer;
        sources.dealer = ValueSource::Env;
    }
    if let Some(threshold) = var("BLACKJACK_THRESHOLD") {
        cfg.threshold = threshold
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid threshold: {}", threshold)))?;
        sources.threshold = ValueSource::Env;
    }
    if let Some(agent) = var("BLACKJACK_AGENT") {
        cfg.agent = agent;
        sources.agent = ValueSource::Env;
    }
    if let Some(rounds) = var("BLACKJACK_ROUNDS") {
        cfg.rounds = rounds
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid rounds: {}", rounds)))?;
        sources.rounds = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    dealer: Option<String>,
    #[serde(default)]
    threshold: Option<u32>,
    #[serde(default)]
    agent: Option<String>,
    #[serde(default)]
    rounds: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(2..=21).contains(&cfg.threshold) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: threshold must be within 2..=21".into(),
        ));
    }
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    if let Err(e) = cfg.dealer_policy() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {}",
            e
        )));
    }
    if let Err(e) = create_agent(&cfg.agent, Some(0)) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {}",
            e
        )));
    }
    Ok(())
}
