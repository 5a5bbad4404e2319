use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Interactive console trackers for projects and tasks")]
#[command(version)]
pub struct Cli {
    /// TOML file with collection limits
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum number of projects (overrides the config file)
    #[arg(long, global = true)]
    pub max_projects: Option<usize>,

    /// Maximum number of comments per project (overrides the config file)
    #[arg(long, global = true)]
    pub max_comments: Option<usize>,

    /// Maximum number of tasks (overrides the config file)
    #[arg(long, global = true)]
    pub max_tasks: Option<usize>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored notices
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two interactive trackers
#[derive(Subcommand)]
pub enum Commands {
    /// Track projects: create, delete, complete, comment, export
    Projects,

    /// Track simple and recurring tasks
    Tasks,
}
