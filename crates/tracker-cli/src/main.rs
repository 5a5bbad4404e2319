// crates/tracker-cli/src/main.rs - CLI Application Entry Point
//
// One binary, two interactive trackers:
//
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   Arguments     │───▶│     Context      │───▶│  Tracker session    │
// │ (clap, cli.rs)  │    │ (limits config)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                                          │
//                                                          ▼
//                                                ┌─────────────────────┐
//                                                │ Console (stdin.rs)  │
//                                                │ + tracker_core      │
//                                                └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// tracker projects                          # project tracker with defaults
// tracker tasks --max-tasks 50              # task tracker, smaller limit
// tracker --config limits.toml projects     # limits from a TOML file
// tracker -v tasks 2>debug.log              # debug diagnostics on stderr
// ```

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::Level;

mod cli; // Command-line interface definitions
mod commands; // Tracker sessions and their menus
mod context; // Resolved configuration handed to sessions
mod messages; // Console strings
mod stdin; // Prompted console input

use cli::{Cli, Commands};
use context::Context;
use stdin::Console;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let ctx = Context::new(&cli)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match cli.command {
        Commands::Projects => commands::projects::run(&ctx, &mut console),
        Commands::Tasks => commands::tasks::run(&ctx, &mut console),
    }
}

/// Install the stderr subscriber; stdout carries only the menus
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
