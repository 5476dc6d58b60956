//! One-dimensional random walk.
use crate::agent::discrete_action;
use han_core::{Act, Configurable, Env, Info, Obs, Space, Step};
use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Configuration of [`RandomWalkEnv`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomWalkEnvConfig {
    /// The walk ends at `-bound` or `bound`.
    pub bound: i64,

    /// Probability that an action moves in the opposite direction.
    pub slip: f64,

    /// Reward of reaching `bound`.
    pub goal_reward: f64,

    /// Reward of every other step.
    pub step_reward: f64,
}

impl Default for RandomWalkEnvConfig {
    fn default() -> Self {
        Self {
            bound: 5,
            slip: 0.0,
            goal_reward: 10.0,
            step_reward: -1.0,
        }
    }
}

impl RandomWalkEnvConfig {
    /// Sets the bound.
    pub fn bound(mut self, v: i64) -> Self {
        self.bound = v;
        self
    }

    /// Sets the slip probability.
    pub fn slip(mut self, v: f64) -> Self {
        self.slip = v;
        self
    }
}

/// Walk on the integers in `[-bound, bound]`, starting at 0.
///
/// Action `0` moves left and `1` moves right; with probability `slip` the move
/// goes the other way. The episode ends at either bound. The observation is
/// `[position]` and `info.position` holds the position as well.
pub struct RandomWalkEnv {
    config: RandomWalkEnvConfig,
    position: i64,
    rng: fastrand::Rng,
}

impl Configurable for RandomWalkEnv {
    const KIND: &'static str = "random_walk";
    type Config = RandomWalkEnvConfig;

    fn build(config: Self::Config, seed: Option<u64>) -> anyhow::Result<Self> {
        if config.bound <= 0 {
            anyhow::bail!("bound must be positive, got {}", config.bound);
        }
        if !(0.0..=1.0).contains(&config.slip) {
            anyhow::bail!("slip must be in [0, 1], got {}", config.slip);
        }
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Ok(Self {
            config,
            position: 0,
            rng,
        })
    }
}

impl Env for RandomWalkEnv {
    fn reset(&mut self, seed: Option<u64>) -> anyhow::Result<Obs> {
        if let Some(seed) = seed {
            self.rng.seed(seed);
        }
        self.position = 0;
        Ok(json!([self.position]))
    }

    fn step(&mut self, act: &Act) -> anyhow::Result<Step> {
        let right = discrete_action(act, 2)? == 1;
        let slipped = self.config.slip > 0.0 && self.rng.f64() < self.config.slip;
        self.position += if right != slipped { 1 } else { -1 };
        trace!("position = {}, slipped = {}", self.position, slipped);

        let bound = self.config.bound;
        let reward = if self.position == bound {
            self.config.goal_reward
        } else {
            self.config.step_reward
        };
        let mut info = Info::new();
        info.insert("position".to_string(), json!(self.position));

        Ok(Step::new(
            json!([self.position]),
            reward,
            self.position.abs() >= bound,
            info,
        ))
    }

    fn observation_space(&self) -> Space {
        let b = self.config.bound as f64;
        Space::Box {
            low: vec![-b],
            high: vec![b],
            shape: vec![1],
        }
    }

    fn action_space(&self) -> Space {
        Space::Discrete { n: 2 }
    }
}
