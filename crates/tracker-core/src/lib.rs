// crates/tracker-core/src/lib.rs - Core library for the project and task trackers
//
// Records, the bounded collections that own them, the listing layout shared by
// console and export, and configuration. Nothing here reads from the console;
// the CLI crate drives these types from its menus.

pub mod collection;
pub mod config;
pub mod error;
pub mod record;
pub mod render;

pub use collection::{Collection, ProjectManager, RecordId, TaskManager};
pub use config::{ConfigError, ConfigManager, Limits, TrackerConfig};
pub use error::{TrackerError, TrackerResult};
pub use record::{Comment, Project, Record, RecordKind, Task, TaskKind};
