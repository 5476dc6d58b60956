//! Agents.
mod constant;
mod greedy_tally;
mod random;
pub use constant::{ConstantAgent, ConstantAgentConfig};
pub use greedy_tally::{GreedyTallyAgent, GreedyTallyAgentConfig};
pub use random::{RandomAgent, RandomAgentConfig};

/// Reads a discrete action in `0..n_actions`.
pub(crate) fn discrete_action(act: &han_core::Act, n_actions: usize) -> anyhow::Result<usize> {
    match act.as_u64() {
        Some(a) if (a as usize) < n_actions => Ok(a as usize),
        _ => anyhow::bail!("invalid action {}, expected an integer in 0..{}", act, n_actions),
    }
}
