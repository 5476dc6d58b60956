//! Environments and agents used in the tests.
#![allow(dead_code)]
use han_core::{
    Act, Agent, CancellationToken, Configurable, Env, Info, Obs, Params, RawConfig, Registry,
    Step, Transition,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Counts steps and signals `done` when the counter reaches `target`.
pub struct CountingEnv {
    count: u64,
    target: u64,
}

#[derive(Deserialize)]
pub struct CountingEnvConfig {
    #[serde(default = "default_target")]
    target: u64,
}

fn default_target() -> u64 {
    5
}

impl Configurable for CountingEnv {
    const KIND: &'static str = "counter";
    type Config = CountingEnvConfig;

    fn build(config: Self::Config, _seed: Option<u64>) -> anyhow::Result<Self> {
        Ok(Self {
            count: 0,
            target: config.target,
        })
    }
}

impl Env for CountingEnv {
    fn reset(&mut self, _seed: Option<u64>) -> anyhow::Result<Obs> {
        self.count = 0;
        Ok(json!(0))
    }

    fn step(&mut self, _act: &Act) -> anyhow::Result<Step> {
        self.count += 1;
        let mut info = Info::new();
        info.insert("count".to_string(), json!(self.count));
        Ok(Step::new(
            json!(self.count),
            1.0,
            self.count >= self.target,
            info,
        ))
    }
}

/// Emits random rewards drawn from a seeded generator, never done.
pub struct NoisyEnv {
    rng: fastrand::Rng,
}

impl Env for NoisyEnv {
    fn reset(&mut self, seed: Option<u64>) -> anyhow::Result<Obs> {
        if let Some(seed) = seed {
            self.rng.seed(seed);
        }
        Ok(json!(self.rng.u32(..)))
    }

    fn step(&mut self, act: &Act) -> anyhow::Result<Step> {
        let reward = self.rng.f64() - 0.5;
        let obs = json!([self.rng.u32(..), act]);
        Ok(Step::new(obs, reward, false, Info::new()))
    }
}

/// Fails at the given step.
pub struct FailingEnv {
    count: usize,
    fail_at: usize,
}

impl Env for FailingEnv {
    fn reset(&mut self, _seed: Option<u64>) -> anyhow::Result<Obs> {
        if self.fail_at == 0 {
            anyhow::bail!("reset failed");
        }
        self.count = 0;
        Ok(json!(0))
    }

    fn step(&mut self, _act: &Act) -> anyhow::Result<Step> {
        self.count += 1;
        if self.count == self.fail_at {
            anyhow::bail!("step {} failed", self.count);
        }
        Ok(Step::new(json!(self.count), 0.5, false, Info::new()))
    }
}

/// Fires a cancellation token from inside `step`, done at `done_at` if set.
pub struct CancellingEnv {
    count: usize,
    cancel_at: usize,
    done_at: Option<usize>,
    token: CancellationToken,
}

impl Env for CancellingEnv {
    fn reset(&mut self, _seed: Option<u64>) -> anyhow::Result<Obs> {
        self.count = 0;
        Ok(json!(0))
    }

    fn step(&mut self, _act: &Act) -> anyhow::Result<Step> {
        self.count += 1;
        if self.count == self.cancel_at {
            self.token.cancel();
        }
        let done = self.done_at == Some(self.count);
        Ok(Step::new(json!(self.count), 1.0, done, Info::new()))
    }
}

/// Picks a seeded random action in `0..2`.
pub struct RandomAgent {
    rng: fastrand::Rng,
}

impl Agent for RandomAgent {
    fn act(&mut self, _obs: &Obs) -> anyhow::Result<Act> {
        Ok(json!(self.rng.usize(0..2)))
    }
}

/// Echoes the observation as its action.
pub struct EchoAgent;

impl Agent for EchoAgent {
    fn act(&mut self, obs: &Obs) -> anyhow::Result<Act> {
        Ok(obs.clone())
    }
}

/// Fails on the `fail_at`-th call of `act`.
pub struct FailingAgent {
    calls: usize,
    fail_at: usize,
}

impl Agent for FailingAgent {
    fn act(&mut self, _obs: &Obs) -> anyhow::Result<Act> {
        self.calls += 1;
        if self.calls == self.fail_at {
            anyhow::bail!("act failed");
        }
        Ok(json!(null))
    }
}

/// Accepts feedback and fails on the `fail_at`-th call of `observe`.
pub struct PickyAgent {
    calls: usize,
    fail_at: usize,
}

impl Agent for PickyAgent {
    fn act(&mut self, _obs: &Obs) -> anyhow::Result<Act> {
        Ok(json!(0))
    }

    fn accepts_feedback(&self) -> bool {
        true
    }

    fn observe(&mut self, _transition: &Transition) -> anyhow::Result<()> {
        self.calls += 1;
        if self.calls == self.fail_at {
            anyhow::bail!("boom");
        }
        Ok(())
    }
}

/// Log of calls made to a [`SpyAgent`].
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Records every `act` and `observe` call.
pub struct SpyAgent {
    log: CallLog,
    feedback: bool,
}

impl Agent for SpyAgent {
    fn act(&mut self, obs: &Obs) -> anyhow::Result<Act> {
        self.log.lock().unwrap().push(format!("act {}", obs));
        Ok(json!("go"))
    }

    fn accepts_feedback(&self) -> bool {
        self.feedback
    }

    fn observe(&mut self, transition: &Transition) -> anyhow::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("observe {}", transition.next_obs));
        Ok(())
    }
}

/// A registry with all test components.
///
/// `spy` and `spy_nofeedback` share `log`; `cancelling` fires `token`.
pub fn registry(log: CallLog, token: CancellationToken) -> Registry {
    let mut registry = Registry::new();
    registry.register_env_type::<CountingEnv>();
    registry.register_env("noisy", |_, seed| {
        Ok(Box::new(NoisyEnv {
            rng: fastrand::Rng::with_seed(seed.unwrap_or(0)),
        }))
    });
    registry.register_env("failing", |params: &Params, _| {
        Ok(Box::new(FailingEnv {
            count: 0,
            fail_at: params.get("fail_at")?.unwrap_or(1),
        }))
    });
    registry.register_env("broken", |_, _| anyhow::bail!("cannot build"));
    registry.register_env("cancelling", move |params: &Params, _| {
        Ok(Box::new(CancellingEnv {
            count: 0,
            cancel_at: params.get("cancel_at")?.unwrap_or(1),
            done_at: params.get("done_at")?,
            token: token.clone(),
        }))
    });
    registry.register_agent("random", |_, seed| {
        Ok(Box::new(RandomAgent {
            rng: fastrand::Rng::with_seed(seed.unwrap_or(0)),
        }))
    });
    registry.register_agent("echo", |_, _| Ok(Box::new(EchoAgent)));
    registry.register_agent("failing", |params: &Params, _| {
        Ok(Box::new(FailingAgent {
            calls: 0,
            fail_at: params.get("fail_at")?.unwrap_or(1),
        }))
    });
    registry.register_agent("picky", |params: &Params, _| {
        Ok(Box::new(PickyAgent {
            calls: 0,
            fail_at: params.get("fail_at")?.unwrap_or(1),
        }))
    });
    let spy_log = log.clone();
    registry.register_agent("spy", move |_, _| {
        Ok(Box::new(SpyAgent {
            log: spy_log.clone(),
            feedback: true,
        }))
    });
    registry.register_agent("spy_nofeedback", move |_, _| {
        Ok(Box::new(SpyAgent {
            log: log.clone(),
            feedback: false,
        }))
    });
    registry
}

/// A raw configuration for the given kinds.
pub fn raw(env: &str, env_params: Params, agent: &str, max_steps: usize) -> RawConfig {
    let mut raw = RawConfig::default().max_steps(max_steps);
    raw.environment.kind = env.to_string();
    raw.environment.params = env_params;
    raw.agent.kind = agent.to_string();
    raw
}
