//! Reference environments and agents.
//!
//! [`register_builtins`] makes every component of this crate available to a
//! [`Registry`] under its [`Configurable::KIND`](han_core::Configurable::KIND):
//!
//! | kind           | component             |
//! |----------------|-----------------------|
//! | `counter`      | [`CountingEnv`]       |
//! | `random_walk`  | [`RandomWalkEnv`]     |
//! | `random`       | [`RandomAgent`]       |
//! | `constant`     | [`ConstantAgent`]     |
//! | `greedy_tally` | [`GreedyTallyAgent`]  |
mod agent;
mod env;
pub use agent::{
    ConstantAgent, ConstantAgentConfig, GreedyTallyAgent, GreedyTallyAgentConfig, RandomAgent,
    RandomAgentConfig,
};
pub use env::{CountingEnv, CountingEnvConfig, RandomWalkEnv, RandomWalkEnvConfig};
use han_core::Registry;

/// Registers all components of this crate.
pub fn register_builtins(registry: &mut Registry) -> &mut Registry {
    registry
        .register_env_type::<CountingEnv>()
        .register_env_type::<RandomWalkEnv>()
        .register_agent_type::<RandomAgent>()
        .register_agent_type::<ConstantAgent>()
        .register_agent_type::<GreedyTallyAgent>()
}
