//! Greedy agent on running mean rewards.
use super::discrete_action;
use han_core::{Act, Agent, Configurable, Obs, Transition};
use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Configuration of [`GreedyTallyAgent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreedyTallyAgentConfig {
    /// The number of discrete actions.
    pub n_actions: usize,
}

impl Default for GreedyTallyAgentConfig {
    fn default() -> Self {
        Self { n_actions: 2 }
    }
}

/// Keeps the mean reward of each action and picks the best one.
///
/// Every action is tried once, in index order, before the agent turns greedy.
/// Ties go to the lowest index. The observation is ignored, so this agent
/// suits bandit-like environments.
#[derive(Debug)]
pub struct GreedyTallyAgent {
    sums: Vec<f64>,
    counts: Vec<u64>,
}

impl GreedyTallyAgent {
    /// Mean reward of each action, `None` for untried actions.
    pub fn means(&self) -> Vec<Option<f64>> {
        self.sums
            .iter()
            .zip(&self.counts)
            .map(|(s, &n)| if n == 0 { None } else { Some(s / n as f64) })
            .collect()
    }
}

impl Configurable for GreedyTallyAgent {
    const KIND: &'static str = "greedy_tally";
    type Config = GreedyTallyAgentConfig;

    fn build(config: Self::Config, _seed: Option<u64>) -> anyhow::Result<Self> {
        if config.n_actions == 0 {
            anyhow::bail!("n_actions must be positive");
        }
        Ok(Self {
            sums: vec![0.0; config.n_actions],
            counts: vec![0; config.n_actions],
        })
    }
}

impl Agent for GreedyTallyAgent {
    fn act(&mut self, _obs: &Obs) -> anyhow::Result<Act> {
        let means = self.means();
        let a = match means.iter().position(Option::is_none) {
            Some(untried) => untried,
            None => {
                let mut best = 0;
                for (i, m) in means.iter().enumerate() {
                    if m > &means[best] {
                        best = i;
                    }
                }
                best
            }
        };
        Ok(json!(a))
    }

    fn accepts_feedback(&self) -> bool {
        true
    }

    fn observe(&mut self, transition: &Transition) -> anyhow::Result<()> {
        let a = discrete_action(&transition.act, self.sums.len())?;
        self.sums[a] += transition.reward;
        self.counts[a] += 1;
        trace!("action {} mean = {:?}", a, self.means()[a]);
        Ok(())
    }
}
