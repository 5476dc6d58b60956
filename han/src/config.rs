//! Loading of episode configurations.
use anyhow::{Context, Result};
use han_core::RawConfig;
use std::{fs::File, io::BufReader, path::Path};

/// Reads a [`RawConfig`] from a YAML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {:?}", path))?;
    let rdr = BufReader::new(file);
    let config = serde_yaml::from_reader(rdr)
        .with_context(|| format!("failed to parse {:?}", path))?;
    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn test_load_config() -> Result<()> {
        let dir = TempDir::new("han_config")?;
        let path = dir.path().join("env.yaml");
        let mut file = File::create(&path)?;
        file.write_all(
            b"environment:\n  kind: counter\n  params:\n    target: 3\n\
              agent:\n  kind: random\n\
              episode:\n  max_steps: 10\n",
        )?;

        let config = load_config(&path)?;
        assert_eq!(config.environment.kind, "counter");
        assert_eq!(config.environment.params.get::<u64>("target")?, Some(3));
        assert!(config.agent.params.is_empty());
        assert_eq!(config.episode.max_steps, 10);
        assert_eq!(config.episode.seed, None);
        Ok(())
    }

    #[test]
    fn test_load_bundled_configs() -> Result<()> {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs");
        assert_eq!(load_config(dir.join("env.yaml"))?.episode.seed, Some(42));
        assert_eq!(
            load_config(dir.join("random_walk.yaml"))?.agent.kind,
            "greedy_tally"
        );
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config("no/such/file.yaml").is_err());
    }
}
