//! Runs an episode.
use crate::{
    finalize,
    record::{Record, RecordValue, Recorder},
    Agent, CancellationToken, Configuration, Env, EpisodeError, EpisodeFailure, EpisodeResult,
    ErrorCause, Obs, Phase, Registry, Step, TerminationReason, Trajectory, Transition,
};
use log::{debug, info, warn};

/// Mixed into the episode seed to obtain the seed of the agent, so that the
/// agent and the environment do not draw from identical random streams.
const AGENT_SEED_MASK: u64 = 0x9e37_79b9_7f4a_7c15;

/// One bounded interaction between an agent and an environment.
///
/// An [`Episode`] is created from a validated [`Configuration`] and the
/// [`Registry`] the configuration was validated against. Nothing is built
/// until [`Episode::run`] is called. `run` consumes the episode, so a
/// terminated episode can not be resumed.
///
/// # Interaction loop
///
/// 1. Build the environment and the agent from their `kind` and `params`, then
///    reset the environment with the configured seed.
/// 2. While fewer than `max_steps` steps have been taken:
///     1. Ask the agent for an action on the current observation.
///     2. Step the environment with the action.
///     3. Append the transition to the trajectory and accumulate the reward.
///     4. Stop if the cancellation token has fired. This takes precedence
///        over `done` reported by the same step.
///     5. Give the transition to the agent if it accepts feedback.
///     6. Stop if the environment signaled `done`.
///
/// The episode ends with [`TerminationReason::EnvironmentDone`] when the
/// environment signals `done`, also on the step that exhausts the budget, and
/// with [`TerminationReason::MaxSteps`] otherwise. A failure of the
/// environment or the agent ends the episode immediately; it is returned as an
/// [`EpisodeFailure`] together with the result up to the last completed
/// transition.
pub struct Episode<'a> {
    config: Configuration,
    registry: &'a Registry,
    cancel: Option<CancellationToken>,
    recorder: Option<&'a mut dyn Recorder>,
}

impl<'a> Episode<'a> {
    /// Creates an episode that has not started yet.
    pub fn new(config: Configuration, registry: &'a Registry) -> Self {
        Self {
            config,
            registry,
            cancel: None,
            recorder: None,
        }
    }

    /// Stops the episode when `token` fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Writes a record for every completed transition to `recorder`.
    pub fn with_recorder(mut self, recorder: &'a mut dyn Recorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// The configuration of the episode.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Runs the episode to termination.
    pub fn run(self) -> Result<EpisodeResult, EpisodeFailure> {
        let Self {
            config,
            registry,
            cancel,
            recorder,
        } = self;
        let env_config = config.environment();
        let agent_config = config.agent();
        let seed = config.episode().seed();
        let max_steps = config.episode().max_steps();

        // Kinds are resolved before anything is built
        let env_ctor = registry.env_constructor(env_config)?;
        let agent_ctor = registry.agent_constructor(agent_config)?;

        info!(
            "Starts episode: env = {:?}, agent = {:?}, max_steps = {}, seed = {:?}",
            env_config.kind(),
            agent_config.kind(),
            max_steps,
            seed
        );

        let progress = Progress::new();
        let mut env = match env_ctor(env_config.params(), seed) {
            Ok(env) => env,
            Err(e) => return Err(progress.abort(Phase::Construct, e)),
        };
        let agent = match agent_ctor(agent_config.params(), seed.map(|s| s ^ AGENT_SEED_MASK)) {
            Ok(agent) => agent,
            Err(e) => return Err(progress.abort(Phase::Construct, e)),
        };
        debug!(
            "observation space = {:?}, action space = {:?}",
            env.observation_space(),
            env.action_space()
        );
        let obs = match env.reset(seed) {
            Ok(obs) => obs,
            Err(e) => return Err(progress.abort(Phase::Reset, e)),
        };

        let feedback = agent.accepts_feedback();
        let runner = Runner {
            env,
            agent,
            feedback,
            max_steps,
            cancel,
            recorder,
            progress,
        };
        let result = runner.run(obs);

        match &result {
            Ok(r) => info!(
                "Episode terminated: reason = {}, steps = {}, total reward = {}",
                r.termination_reason(),
                r.step_count(),
                r.total_reward()
            ),
            Err(e) => warn!("Episode aborted: {}", e),
        }
        result
    }
}

/// State accumulated while the episode runs.
struct Progress {
    step_count: usize,
    total_reward: f64,
    trajectory: Trajectory,
}

impl Progress {
    fn new() -> Self {
        Self {
            step_count: 0,
            total_reward: 0.0,
            trajectory: Trajectory::new(),
        }
    }

    fn finish(self, reason: TerminationReason) -> EpisodeResult {
        finalize(self.step_count, self.total_reward, reason, self.trajectory)
    }

    /// Ends the episode because an implementation failed.
    fn abort(self, phase: Phase, source: anyhow::Error) -> EpisodeFailure {
        let error = EpisodeError::RuntimeStep {
            phase,
            step: self.step_count,
            source,
        };
        let partial = self.finish(TerminationReason::Error(ErrorCause::Runtime));
        EpisodeFailure::new(error, Some(partial))
    }

    /// Ends the episode because the cancellation token fired.
    fn cancel(self) -> EpisodeFailure {
        let error = EpisodeError::Cancelled {
            step: self.step_count,
        };
        let partial = self.finish(TerminationReason::Error(ErrorCause::Cancelled));
        EpisodeFailure::new(error, Some(partial))
    }
}

/// A running episode, owning the environment and the agent.
struct Runner<'a> {
    env: Box<dyn Env>,
    agent: Box<dyn Agent>,
    feedback: bool,
    max_steps: usize,
    cancel: Option<CancellationToken>,
    recorder: Option<&'a mut dyn Recorder>,
    progress: Progress,
}

impl<'a> Runner<'a> {
    fn run(mut self, mut obs: Obs) -> Result<EpisodeResult, EpisodeFailure> {
        loop {
            if self.progress.step_count >= self.max_steps {
                return Ok(self.progress.finish(TerminationReason::MaxSteps));
            }

            let act = match self.agent.act(&obs) {
                Ok(act) => act,
                Err(e) => return Err(self.progress.abort(Phase::Act, e)),
            };
            let Step {
                obs: next_obs,
                reward,
                done,
                info,
            } = match self.env.step(&act) {
                Ok(step) => step,
                Err(e) => return Err(self.progress.abort(Phase::Step, e)),
            };

            // Only complete transitions enter the trajectory
            self.progress.step_count += 1;
            self.progress.total_reward += reward;
            let transition = self.progress.trajectory.push(Transition {
                obs,
                act,
                reward,
                next_obs: next_obs.clone(),
                done,
                info,
            });
            debug!(
                "step = {}, reward = {}, done = {}",
                self.progress.step_count, reward, done
            );

            if let Some(recorder) = self.recorder.as_mut() {
                recorder.write(Record::from_slice(&[
                    ("step", RecordValue::Scalar(self.progress.step_count as _)),
                    ("reward", RecordValue::Scalar(reward)),
                    ("total_reward", RecordValue::Scalar(self.progress.total_reward)),
                    ("done", RecordValue::Scalar(if done { 1.0 } else { 0.0 })),
                ]));
            }

            if self.cancel.as_ref().map_or(false, |c| c.is_cancelled()) {
                warn!("Cancelled at step {}", self.progress.step_count);
                return Err(self.progress.cancel());
            }

            if self.feedback {
                if let Err(e) = self.agent.observe(transition) {
                    return Err(self.progress.abort(Phase::Observe, e));
                }
            }

            obs = next_obs;
            if done {
                return Ok(self.progress.finish(TerminationReason::EnvironmentDone));
            }
        }
    }
}
