//! Errors in the library.
use crate::EpisodeResult;
use std::fmt;
use thiserror::Error;

/// Which side of the interaction a component plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRole {
    /// An [`Env`](crate::Env) implementation.
    Environment,

    /// An [`Agent`](crate::Agent) implementation.
    Agent,
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentRole::Environment => write!(f, "environment"),
            ComponentRole::Agent => write!(f, "agent"),
        }
    }
}

/// A `kind` identifier has no registered constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {role} kind: {kind:?}")]
pub struct UnknownComponentError {
    /// Role of the missing component.
    pub role: ComponentRole,

    /// The identifier that failed to resolve.
    pub kind: String,
}

/// Malformed or incomplete configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// `episode.max_steps` is not positive.
    #[error("episode.max_steps must be positive, got {0}")]
    InvalidMaxSteps(usize),

    /// A `kind` identifier is not registered.
    #[error(transparent)]
    UnknownComponent(#[from] UnknownComponentError),

    /// The configuration tree does not have the expected shape.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The stage of an episode in which an implementation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the environment or the agent.
    Construct,

    /// [`Env::reset`](crate::Env::reset).
    Reset,

    /// [`Agent::act`](crate::Agent::act).
    Act,

    /// [`Env::step`](crate::Env::step).
    Step,

    /// [`Agent::observe`](crate::Agent::observe).
    Observe,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Construct => "construct",
            Phase::Reset => "reset",
            Phase::Act => "act",
            Phase::Step => "step",
            Phase::Observe => "observe",
        };
        f.write_str(s)
    }
}

/// Errors raised while running an episode.
#[derive(Error, Debug)]
pub enum EpisodeError {
    /// A component could not be resolved from the registry.
    #[error(transparent)]
    UnknownComponent(#[from] UnknownComponentError),

    /// An environment or agent implementation failed.
    #[error("{phase} failed at step {step}: {source}")]
    RuntimeStep {
        /// Where the failure happened.
        phase: Phase,

        /// Number of completed transitions when the failure happened.
        step: usize,

        /// The error raised by the implementation.
        source: anyhow::Error,
    },

    /// The cancellation token fired.
    #[error("episode cancelled after {step} steps")]
    Cancelled {
        /// Number of completed transitions when the episode stopped.
        step: usize,
    },
}

/// The error returned by [`Episode::run`](crate::Episode::run).
///
/// Errors raised once the engine started building the environment and the
/// agent come with the result of the episode up to the last completed
/// transition. Errors raised while resolving the components carry no result.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct EpisodeFailure {
    /// The error that stopped the episode.
    #[source]
    pub error: EpisodeError,

    /// The truncated result, `None` if nothing was built.
    pub partial: Option<EpisodeResult>,
}

impl EpisodeFailure {
    pub(crate) fn new(error: EpisodeError, partial: Option<EpisodeResult>) -> Self {
        Self { error, partial }
    }

    /// Returns `true` if the episode was stopped by its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.error, EpisodeError::Cancelled { .. })
    }
}

impl From<UnknownComponentError> for EpisodeFailure {
    fn from(e: UnknownComponentError) -> Self {
        Self::new(e.into(), None)
    }
}
