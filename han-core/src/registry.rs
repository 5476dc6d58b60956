//! Constructors of environments and agents keyed by `kind` identifiers.
use crate::{
    error::ComponentRole, Agent, ComponentConfig, Configurable, Env, Params,
    UnknownComponentError,
};
use log::warn;
use std::{collections::HashMap, fmt};

/// Builds an environment from its parameters and a random seed.
pub type EnvConstructor =
    Box<dyn Fn(&Params, Option<u64>) -> anyhow::Result<Box<dyn Env>> + Send + Sync>;

/// Builds an agent from its parameters and a random seed.
pub type AgentConstructor =
    Box<dyn Fn(&Params, Option<u64>) -> anyhow::Result<Box<dyn Agent>> + Send + Sync>;

/// Maps `kind` identifiers to constructors.
///
/// A registry is populated by the application at startup and then shared
/// read-only, e.g. behind an [`Arc`](std::sync::Arc), with every episode.
/// Registration needs `&mut self`, so a registry cannot change while an
/// episode borrows it.
#[derive(Default)]
pub struct Registry {
    envs: HashMap<String, EnvConstructor>,
    agents: HashMap<String, AgentConstructor>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("envs", &self.env_kinds())
            .field("agents", &self.agent_kinds())
            .finish()
    }
}

impl Registry {
    /// Constructs an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an environment constructor under `kind`.
    ///
    /// A constructor already registered under the same `kind` is replaced.
    pub fn register_env<F>(&mut self, kind: impl Into<String>, ctor: F) -> &mut Self
    where
        F: Fn(&Params, Option<u64>) -> anyhow::Result<Box<dyn Env>> + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.envs.insert(kind.clone(), Box::new(ctor)).is_some() {
            warn!("Replaced environment constructor {:?}", kind);
        }
        self
    }

    /// Registers an agent constructor under `kind`.
    ///
    /// A constructor already registered under the same `kind` is replaced.
    pub fn register_agent<F>(&mut self, kind: impl Into<String>, ctor: F) -> &mut Self
    where
        F: Fn(&Params, Option<u64>) -> anyhow::Result<Box<dyn Agent>> + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.agents.insert(kind.clone(), Box::new(ctor)).is_some() {
            warn!("Replaced agent constructor {:?}", kind);
        }
        self
    }

    /// Registers an environment type under [`Configurable::KIND`].
    pub fn register_env_type<E>(&mut self) -> &mut Self
    where
        E: Env + Configurable + 'static,
    {
        self.register_env(E::KIND, |params, seed| {
            let env = E::build(params.parse()?, seed)?;
            Ok(Box::new(env) as Box<dyn Env>)
        })
    }

    /// Registers an agent type under [`Configurable::KIND`].
    pub fn register_agent_type<A>(&mut self) -> &mut Self
    where
        A: Agent + Configurable + 'static,
    {
        self.register_agent(A::KIND, |params, seed| {
            let agent = A::build(params.parse()?, seed)?;
            Ok(Box::new(agent) as Box<dyn Agent>)
        })
    }

    /// Returns `true` if an environment is registered under `kind`.
    pub fn contains_env(&self, kind: &str) -> bool {
        self.envs.contains_key(kind)
    }

    /// Returns `true` if an agent is registered under `kind`.
    pub fn contains_agent(&self, kind: &str) -> bool {
        self.agents.contains_key(kind)
    }

    /// Registered environment kinds in lexicographic order.
    pub fn env_kinds(&self) -> Vec<&str> {
        sorted_keys(&self.envs)
    }

    /// Registered agent kinds in lexicographic order.
    pub fn agent_kinds(&self) -> Vec<&str> {
        sorted_keys(&self.agents)
    }

    /// Looks up the environment constructor for `config`.
    pub fn env_constructor(
        &self,
        config: &ComponentConfig,
    ) -> Result<&EnvConstructor, UnknownComponentError> {
        self.envs
            .get(config.kind())
            .ok_or_else(|| UnknownComponentError {
                role: ComponentRole::Environment,
                kind: config.kind().to_string(),
            })
    }

    /// Looks up the agent constructor for `config`.
    pub fn agent_constructor(
        &self,
        config: &ComponentConfig,
    ) -> Result<&AgentConstructor, UnknownComponentError> {
        self.agents
            .get(config.kind())
            .ok_or_else(|| UnknownComponentError {
                role: ComponentRole::Agent,
                kind: config.kind().to_string(),
            })
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
