//! Uniformly random agent.
use han_core::{Act, Agent, Configurable, Obs};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Configuration of [`RandomAgent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomAgentConfig {
    /// The number of discrete actions.
    pub n_actions: usize,
}

impl Default for RandomAgentConfig {
    fn default() -> Self {
        Self { n_actions: 2 }
    }
}

/// Picks an action in `0..n_actions` uniformly at random.
pub struct RandomAgent {
    n_actions: usize,
    rng: fastrand::Rng,
}

impl Configurable for RandomAgent {
    const KIND: &'static str = "random";
    type Config = RandomAgentConfig;

    fn build(config: Self::Config, seed: Option<u64>) -> anyhow::Result<Self> {
        if config.n_actions == 0 {
            anyhow::bail!("n_actions must be positive");
        }
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Ok(Self {
            n_actions: config.n_actions,
            rng,
        })
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, _obs: &Obs) -> anyhow::Result<Act> {
        Ok(json!(self.rng.usize(0..self.n_actions)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_seeded() -> anyhow::Result<()> {
        let config = RandomAgentConfig { n_actions: 3 };
        let mut a = RandomAgent::build(config.clone(), Some(5))?;
        let mut b = RandomAgent::build(config, Some(5))?;
        for _ in 0..20 {
            let act = a.act(&json!(null))?;
            assert!(act.as_u64().unwrap() < 3);
            assert_eq!(act, b.act(&json!(null))?);
        }
        Ok(())
    }

    #[test]
    fn test_no_actions() {
        assert!(RandomAgent::build(RandomAgentConfig { n_actions: 0 }, None).is_err());
    }
}
