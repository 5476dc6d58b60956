//! Runs one episode described by a YAML configuration and prints the result.
mod config;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use config::load_config;
use han_builtin::register_builtins;
use han_core::{Configuration, Episode, EpisodeResult, Registry};
use log::info;
use std::path::PathBuf;

/// How the result is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line.
    Summary,

    /// JSON, including the trajectory.
    Json,

    /// YAML, including the trajectory.
    Yaml,
}

/// Run an episode of an agent in an environment
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "configs/env.yaml")]
    config: PathBuf,

    /// Overrides `episode.max_steps`
    #[arg(long)]
    max_steps: Option<usize>,

    /// Overrides `episode.seed`
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: Format,
}

fn render(result: &EpisodeResult, format: Format) -> Result<String> {
    Ok(match format {
        Format::Summary => result.summary(),
        Format::Json => serde_json::to_string_pretty(result)?,
        Format::Yaml => serde_yaml::to_string(result)?,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut raw = load_config(&args.config)?;
    if let Some(max_steps) = args.max_steps {
        raw = raw.max_steps(max_steps);
    }
    if args.seed.is_some() {
        raw = raw.seed(args.seed);
    }

    let mut registry = Registry::new();
    register_builtins(&mut registry);
    info!(
        "Registered environments {:?}, agents {:?}",
        registry.env_kinds(),
        registry.agent_kinds()
    );

    let config = Configuration::validate(raw, &registry)?;
    match Episode::new(config, &registry).run() {
        Ok(result) => {
            println!("{}", render(&result, args.format)?);
            Ok(())
        }
        Err(failure) => {
            if let Some(partial) = &failure.partial {
                println!("{}", render(partial, args.format)?);
            }
            Err(failure.into())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use han_core::RawConfig;

    fn result() -> EpisodeResult {
        let mut registry = Registry::new();
        register_builtins(&mut registry);
        let mut raw = RawConfig::default().max_steps(3).seed(Some(1));
        raw.environment.kind = "counter".to_string();
        raw.agent.kind = "random".to_string();
        let config = Configuration::validate(raw, &registry).unwrap();
        Episode::new(config, &registry).run().unwrap()
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["han", "--max-steps", "7", "-f", "json"]);
        assert_eq!(args.config, PathBuf::from("configs/env.yaml"));
        assert_eq!(args.max_steps, Some(7));
        assert_eq!(args.seed, None);
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_render() -> Result<()> {
        let result = result();
        assert_eq!(
            render(&result, Format::Summary)?,
            "MAX_STEPS after 3 steps, total reward = 3"
        );

        let json: serde_json::Value = serde_json::from_str(&render(&result, Format::Json)?)?;
        assert_eq!(json["step_count"], 3);

        let back: EpisodeResult = serde_yaml::from_str(&render(&result, Format::Yaml)?)?;
        assert_eq!(back, result);
        Ok(())
    }
}
