//! Agent repeating a single action.
use han_core::{Act, Agent, Configurable, Obs};
use serde::{Deserialize, Serialize};

/// Configuration of [`ConstantAgent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantAgentConfig {
    /// The action.
    pub action: Act,
}

/// Returns the configured action whatever the observation.
#[derive(Debug)]
pub struct ConstantAgent {
    action: Act,
}

impl Configurable for ConstantAgent {
    const KIND: &'static str = "constant";
    type Config = ConstantAgentConfig;

    fn build(config: Self::Config, _seed: Option<u64>) -> anyhow::Result<Self> {
        Ok(Self {
            action: config.action,
        })
    }
}

impl Agent for ConstantAgent {
    fn act(&mut self, _obs: &Obs) -> anyhow::Result<Act> {
        Ok(self.action.clone())
    }
}
