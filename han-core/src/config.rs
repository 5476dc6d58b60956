//! Configuration of an episode.
//!
//! A configuration arrives as a [`RawConfig`], deserialized by whatever
//! collaborator loaded it, and is turned into a [`Configuration`] once by
//! [`Configuration::validate`]. The engine only ever sees the validated value.
use crate::{error::ComponentRole, ConfigError, Registry, UnknownComponentError};
use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Construction parameters of an environment or an agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(serde_json::Map<String, serde_json::Value>);

impl Params {
    /// Creates an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the raw value of a parameter.
    pub fn get_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Reads a single parameter, `None` if absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(v) => serde_json::from_value(v.clone())
                .map(Some)
                .with_context(|| format!("invalid parameter {:?}", key)),
        }
    }

    /// Parses all parameters into a typed configuration.
    pub fn parse<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        serde_json::from_value(serde_json::Value::Object(self.0.clone()))
            .context("invalid parameters")
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Params {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

/// An object built from a typed configuration and a random seed.
///
/// Types implementing this trait can be registered with
/// [`Registry::register_env_type`] and [`Registry::register_agent_type`]; the
/// configuration is parsed from [`Params`] at construction time.
pub trait Configurable: Sized {
    /// Identifier used as `kind` in configurations.
    const KIND: &'static str;

    /// Configuration.
    type Config: DeserializeOwned;

    /// Builds the object.
    fn build(config: Self::Config, seed: Option<u64>) -> anyhow::Result<Self>;
}

/// Unvalidated `environment` or `agent` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawComponentConfig {
    /// Identifier of the implementation.
    #[serde(default)]
    pub kind: String,

    /// Construction parameters.
    #[serde(default)]
    pub params: Params,
}

/// Unvalidated `episode` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEpisodeConfig {
    /// The maximum number of steps.
    pub max_steps: usize,

    /// Random seed passed to the environment and the agent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Unvalidated configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// The environment section.
    pub environment: RawComponentConfig,

    /// The agent section.
    pub agent: RawComponentConfig,

    /// The episode section.
    pub episode: RawEpisodeConfig,
}

impl RawConfig {
    /// Reads a configuration from an already-loaded tree of values.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Sets the maximum number of steps.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.episode.max_steps = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: Option<u64>) -> Self {
        self.episode.seed = v;
        self
    }
}

/// Validated `environment` or `agent` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentConfig {
    kind: String,
    params: Params,
}

impl ComponentConfig {
    /// Identifier of the implementation.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Construction parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Validated `episode` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EpisodeConfig {
    max_steps: usize,
    seed: Option<u64>,
}

impl EpisodeConfig {
    /// The maximum number of steps, always positive.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Random seed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Immutable, validated configuration of an episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    environment: ComponentConfig,
    agent: ComponentConfig,
    episode: EpisodeConfig,
}

impl Configuration {
    /// Validates a raw configuration against the kinds known to `registry`.
    ///
    /// Checks that both kinds are given, that `max_steps` is positive and that
    /// both kinds have a registered constructor.
    pub fn validate(raw: RawConfig, registry: &Registry) -> Result<Self, ConfigError> {
        if raw.environment.kind.is_empty() {
            return Err(ConfigError::MissingField("environment.kind"));
        }
        if raw.agent.kind.is_empty() {
            return Err(ConfigError::MissingField("agent.kind"));
        }
        if raw.episode.max_steps == 0 {
            return Err(ConfigError::InvalidMaxSteps(raw.episode.max_steps));
        }
        if !registry.contains_env(&raw.environment.kind) {
            return Err(UnknownComponentError {
                role: ComponentRole::Environment,
                kind: raw.environment.kind,
            }
            .into());
        }
        if !registry.contains_agent(&raw.agent.kind) {
            return Err(UnknownComponentError {
                role: ComponentRole::Agent,
                kind: raw.agent.kind,
            }
            .into());
        }

        Ok(Self {
            environment: ComponentConfig {
                kind: raw.environment.kind,
                params: raw.environment.params,
            },
            agent: ComponentConfig {
                kind: raw.agent.kind,
                params: raw.agent.params,
            },
            episode: EpisodeConfig {
                max_steps: raw.episode.max_steps,
                seed: raw.episode.seed,
            },
        })
    }

    /// The environment section.
    pub fn environment(&self) -> &ComponentConfig {
        &self.environment
    }

    /// The agent section.
    pub fn agent(&self) -> &ComponentConfig {
        &self.agent
    }

    /// The episode section.
    pub fn episode(&self) -> &EpisodeConfig {
        &self.episode
    }
}
