//! Environment.
use serde::{Deserialize, Serialize};

/// Observation of an environment.
///
/// The engine treats observations as opaque values: they are handed to the
/// agent and recorded in the trajectory verbatim.
pub type Obs = serde_json::Value;

/// Action of an agent, opaque to the engine.
pub type Act = serde_json::Value;

/// Additional information emitted by an environment at every step.
pub type Info = serde_json::Map<String, serde_json::Value>;

/// Description of an observation or action space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Space {
    /// Nothing is known about the values.
    #[default]
    Any,

    /// Integers in `0..n`.
    Discrete {
        /// The number of values.
        n: usize,
    },

    /// A box in a real vector space.
    Box {
        /// Lower bound of each element.
        low: Vec<f64>,

        /// Upper bound of each element.
        high: Vec<f64>,

        /// Shape of the values.
        shape: Vec<usize>,
    },
}

impl Space {
    /// Returns `true` if `value` lies in the space.
    ///
    /// [`Space::Box`] values are expected as flat arrays of numbers.
    pub fn contains(&self, value: &serde_json::Value) -> bool {
        match self {
            Space::Any => true,
            Space::Discrete { n } => value.as_u64().map_or(false, |v| (v as usize) < *n),
            Space::Box { low, high, .. } => match value.as_array() {
                Some(xs) if xs.len() == low.len() => xs.iter().zip(low.iter().zip(high)).all(
                    |(x, (lo, hi))| x.as_f64().map_or(false, |x| *lo <= x && x <= *hi),
                ),
                _ => false,
            },
        }
    }
}

/// Outcome of a single environment step `(o_t+1, r_t, done_t, info_t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Observation after the step.
    pub obs: Obs,

    /// Reward.
    pub reward: f64,

    /// Flag denoting if the episode ended.
    pub done: bool,

    /// Information defined by the environment.
    pub info: Info,
}

impl Step {
    /// Constructs a [`Step`] object.
    pub fn new(obs: Obs, reward: f64, done: bool, info: Info) -> Self {
        Self {
            obs,
            reward,
            done,
            info,
        }
    }
}

/// Represents an environment, typically an MDP.
///
/// The episode engine calls [`Env::reset`] exactly once before the first
/// [`Env::step`] and never steps an environment after it reported `done`.
pub trait Env {
    /// Reinitializes the internal state and returns the initial observation.
    ///
    /// Given the same `seed`, an environment should produce the same sequence of
    /// observations for the same sequence of actions.
    fn reset(&mut self, seed: Option<u64>) -> anyhow::Result<Obs>;

    /// Performs an environment step.
    fn step(&mut self, act: &Act) -> anyhow::Result<Step>;

    /// Describes the observation space.
    fn observation_space(&self) -> Space {
        Space::Any
    }

    /// Describes the action space.
    fn action_space(&self) -> Space {
        Space::Any
    }
}
