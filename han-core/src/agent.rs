//! Agent.
use crate::{Act, Obs, Transition};

/// A decision-making component acting on an environment.
///
/// An agent is a mapping from an observation to an action. The mapping can be
/// either deterministic or stochastic; any internal state is the agent's own
/// concern.
///
/// Agents that adapt within an episode advertise it with
/// [`Agent::accepts_feedback`]. The engine reads the flag once, right after
/// the agent has been built, and from then on calls [`Agent::observe`] after
/// every recorded transition and before requesting the next action.
pub trait Agent {
    /// Selects an action given an observation.
    fn act(&mut self, obs: &Obs) -> anyhow::Result<Act>;

    /// Returns `true` if the agent wants to receive transitions.
    fn accepts_feedback(&self) -> bool {
        false
    }

    /// Notifies the agent of the outcome of its last action.
    fn observe(&mut self, _transition: &Transition) -> anyhow::Result<()> {
        Ok(())
    }
}
