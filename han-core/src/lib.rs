#![warn(missing_docs)]
//! Runs a single episode of interaction between an agent and an environment.
//!
//! The environment and the agent are selected by string identifiers in a
//! [`Configuration`] and constructed through a [`Registry`] populated by the
//! surrounding application. [`Episode::run`] drives the interaction loop and
//! returns an [`EpisodeResult`].
//!
//! ```
//! use han_core::{
//!     Act, Agent, Configuration, Env, Episode, Info, Obs, RawConfig, Registry, Step,
//!     TerminationReason,
//! };
//! use serde_json::json;
//!
//! struct Clock(u64);
//!
//! impl Env for Clock {
//!     fn reset(&mut self, _seed: Option<u64>) -> anyhow::Result<Obs> {
//!         self.0 = 0;
//!         Ok(json!(0))
//!     }
//!
//!     fn step(&mut self, _act: &Act) -> anyhow::Result<Step> {
//!         self.0 += 1;
//!         Ok(Step::new(json!(self.0), 1.0, false, Info::new()))
//!     }
//! }
//!
//! struct Idle;
//!
//! impl Agent for Idle {
//!     fn act(&mut self, _obs: &Obs) -> anyhow::Result<Act> {
//!         Ok(json!(null))
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register_env("clock", |_, _| Ok(Box::new(Clock(0))));
//! registry.register_agent("idle", |_, _| Ok(Box::new(Idle)));
//!
//! let raw = RawConfig::from_value(json!({
//!     "environment": { "kind": "clock" },
//!     "agent": { "kind": "idle" },
//!     "episode": { "max_steps": 3 },
//! }))
//! .unwrap();
//! let config = Configuration::validate(raw, &registry).unwrap();
//! let result = Episode::new(config, &registry).run().unwrap();
//!
//! assert_eq!(result.step_count(), 3);
//! assert_eq!(result.termination_reason(), TerminationReason::MaxSteps);
//! ```
mod agent;
mod cancel;
mod config;
mod env;
mod episode;
mod error;
pub mod record;
mod registry;
mod result;

pub use agent::Agent;
pub use cancel::CancellationToken;
pub use config::{
    ComponentConfig, Configurable, Configuration, EpisodeConfig, Params, RawComponentConfig,
    RawConfig, RawEpisodeConfig,
};
pub use env::{Act, Env, Info, Obs, Space, Step};
pub use episode::Episode;
pub use error::{
    ComponentRole, ConfigError, EpisodeError, EpisodeFailure, Phase, UnknownComponentError,
};
pub use registry::{AgentConstructor, EnvConstructor, Registry};
pub use result::{finalize, EpisodeResult, ErrorCause, TerminationReason, Trajectory, Transition};
