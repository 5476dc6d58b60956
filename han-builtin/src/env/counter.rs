//! Counting environment.
use han_core::{Act, Configurable, Env, Info, Obs, Step};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Configuration of [`CountingEnv`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountingEnvConfig {
    /// The counter value at which the episode ends.
    pub target: u64,

    /// Reward of every step.
    pub reward: f64,
}

impl Default for CountingEnvConfig {
    fn default() -> Self {
        Self {
            target: 5,
            reward: 1.0,
        }
    }
}

impl CountingEnvConfig {
    /// Sets the counter value at which the episode ends.
    pub fn target(mut self, v: u64) -> Self {
        self.target = v;
        self
    }

    /// Sets the reward of every step.
    pub fn reward(mut self, v: f64) -> Self {
        self.reward = v;
        self
    }
}

/// Increments a counter at every step, whatever the action.
///
/// The observation is the counter value. The episode ends when the counter
/// reaches `target`.
#[derive(Debug)]
pub struct CountingEnv {
    config: CountingEnvConfig,
    count: u64,
}

impl Configurable for CountingEnv {
    const KIND: &'static str = "counter";
    type Config = CountingEnvConfig;

    fn build(config: Self::Config, _seed: Option<u64>) -> anyhow::Result<Self> {
        if config.target == 0 {
            anyhow::bail!("target must be positive");
        }
        Ok(Self { config, count: 0 })
    }
}

impl Env for CountingEnv {
    fn reset(&mut self, _seed: Option<u64>) -> anyhow::Result<Obs> {
        self.count = 0;
        Ok(json!(self.count))
    }

    fn step(&mut self, _act: &Act) -> anyhow::Result<Step> {
        self.count += 1;
        let done = self.count >= self.config.target;
        Ok(Step::new(json!(self.count), self.config.reward, done, Info::new()))
    }
}
