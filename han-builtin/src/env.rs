//! Environments.
mod counter;
mod random_walk;
pub use counter::{CountingEnv, CountingEnvConfig};
pub use random_walk::{RandomWalkEnv, RandomWalkEnvConfig};
