use anyhow::{Context as AnyhowContext, Result};
use tracker_core::{ConfigManager, Limits, TrackerConfig};

use crate::cli::Cli;

/// Application context that gets passed to the tracker sessions
///
/// Built once at startup from the command line; sessions only read it.
pub struct Context {
    config: TrackerConfig,
}

impl Context {
    /// Resolve configuration using precedence: CLI flag > --config file > defaults
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => ConfigManager::read_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => TrackerConfig::default(),
        };

        let limits = &mut config.limits;
        if let Some(max) = cli.max_projects {
            limits.max_projects = max;
        }
        if let Some(max) = cli.max_comments {
            limits.max_comments = max;
        }
        if let Some(max) = cli.max_tasks {
            limits.max_tasks = max;
        }

        // Validated once, after the flags have been layered over the file
        ConfigManager::validate_config(&config).context("Invalid limits")?;
        tracing::debug!(?config, "configuration resolved");

        Ok(Self::from_config(config))
    }

    /// Wrap an already validated configuration
    pub fn from_config(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// Get collection limits
    pub fn limits(&self) -> &Limits {
        &self.config.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let ctx = Context::new(&parse(&["tracker", "tasks"])).unwrap();
        assert_eq!(ctx.limits(), &Limits::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "[limits]\nmax_projects = 3\nmax_tasks = 4\n").unwrap();

        let cli = parse(&[
            "tracker",
            "--config",
            path.to_str().unwrap(),
            "--max-tasks",
            "9",
            "projects",
        ]);
        let ctx = Context::new(&cli).unwrap();
        assert_eq!(ctx.limits().max_projects, 3);
        assert_eq!(ctx.limits().max_tasks, 9);
        assert_eq!(ctx.limits().max_comments, 100);
    }

    #[test]
    fn test_flag_overrides_zero_limit_in_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "[limits]\nmax_projects = 0\n").unwrap();

        let cli = parse(&[
            "tracker",
            "--config",
            path.to_str().unwrap(),
            "--max-projects",
            "5",
            "projects",
        ]);
        let ctx = Context::new(&cli).unwrap();
        assert_eq!(ctx.limits().max_projects, 5);
    }

    #[test]
    fn test_zero_limit_in_config_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "[limits]\nmax_tasks = 0\n").unwrap();

        let cli = parse(&["tracker", "--config", path.to_str().unwrap(), "tasks"]);
        let err = Context::new(&cli).err().unwrap();
        assert!(format!("{:#}", err).contains("limits.max_tasks must be greater than zero"));
    }

    #[test]
    fn test_zero_limit_flag_is_rejected() {
        let cli = parse(&["tracker", "projects", "--max-comments", "0"]);
        assert!(Context::new(&cli).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = parse(&["tracker", "--config", "/definitely/not/here.toml", "tasks"]);
        let err = Context::new(&cli).err().unwrap();
        assert!(format!("{:#}", err).contains("Configuration file not found"));
    }
}
