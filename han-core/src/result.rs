//! Result of an episode.
use crate::{Act, Info, Obs};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of one step `(o_t, a_t, r_t, o_t+1, done_t, info_t)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Observation the action was selected on.
    pub obs: Obs,

    /// Action.
    pub act: Act,

    /// Reward.
    pub reward: f64,

    /// Observation after the step.
    pub next_obs: Obs,

    /// Flag denoting if the environment ended the episode at this step.
    pub done: bool,

    /// Information emitted by the environment.
    pub info: Info,
}

/// Ordered sequence of the transitions of one episode.
///
/// Transitions are appended by the engine while the episode runs; once handed
/// out in an [`EpisodeResult`] the trajectory can only be read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<Transition>);

impl Trajectory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, transition: Transition) -> &Transition {
        self.0.push(transition);
        &self.0[self.0.len() - 1]
    }

    /// The number of transitions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no transition was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the transitions.
    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.0.iter()
    }

    /// The last recorded transition.
    pub fn last(&self) -> Option<&Transition> {
        self.0.last()
    }

    /// Rewards of all transitions in order.
    pub fn rewards(&self) -> Vec<f64> {
        self.0.iter().map(|t| t.reward).collect()
    }

    /// Sum of rewards over all transitions.
    pub fn total_reward(&self) -> f64 {
        self.0.iter().map(|t| t.reward).sum()
    }

    /// Returns the transitions as a slice.
    pub fn as_slice(&self) -> &[Transition] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Why an episode that ended with [`TerminationReason::Error`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCause {
    /// An environment or agent implementation failed.
    Runtime,

    /// The cancellation token fired.
    Cancelled,
}

/// Classified cause of the end of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminationReason {
    /// The step budget was exhausted.
    MaxSteps,

    /// The environment signaled the end of the episode.
    EnvironmentDone,

    /// The episode was stopped by an error or a cancellation.
    Error(ErrorCause),
}

impl TerminationReason {
    /// Returns `true` for [`TerminationReason::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, TerminationReason::Error(_))
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::MaxSteps => write!(f, "MAX_STEPS"),
            TerminationReason::EnvironmentDone => write!(f, "ENVIRONMENT_DONE"),
            TerminationReason::Error(ErrorCause::Runtime) => write!(f, "ERROR"),
            TerminationReason::Error(ErrorCause::Cancelled) => write!(f, "ERROR (cancelled)"),
        }
    }
}

/// Outcome of an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeResult {
    total_reward: f64,
    step_count: usize,
    termination_reason: TerminationReason,
    trajectory: Trajectory,
}

impl EpisodeResult {
    /// Sum of rewards.
    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    /// The number of completed steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Why the episode ended.
    pub fn termination_reason(&self) -> TerminationReason {
        self.termination_reason
    }

    /// Recorded transitions.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Takes the trajectory out of the result.
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    /// Renders the result as JSON.
    ///
    /// The field order is fixed, so equal results render to identical strings.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// One-line description of the result.
    pub fn summary(&self) -> String {
        format!(
            "{} after {} steps, total reward = {}",
            self.termination_reason, self.step_count, self.total_reward
        )
    }
}

impl fmt::Display for EpisodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Packages the state of a finished episode into an [`EpisodeResult`].
pub fn finalize(
    step_count: usize,
    total_reward: f64,
    termination_reason: TerminationReason,
    trajectory: Trajectory,
) -> EpisodeResult {
    EpisodeResult {
        total_reward,
        step_count,
        termination_reason,
        trajectory,
    }
}
