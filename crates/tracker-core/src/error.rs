// crates/tracker-core/src/error.rs - Errors for record and collection operations
//
// Every failure a collection can report is a value of TrackerError. None of
// them is fatal: callers print a notice and carry on with the collection
// exactly as it was before the call.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::collection::RecordId;
use crate::record::RecordKind;

/// Errors that can occur while managing records
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Capacity exceeded: at most {limit} {kind} allowed")]
    CapacityExceeded { kind: RecordKind, limit: usize },

    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Position {position} out of range (collection holds {len} records)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Comment index {index} out of range (project holds {count} comments)")]
    CommentOutOfRange { index: usize, count: usize },

    #[error("Failed to export to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for record and collection operations
pub type TrackerResult<T> = Result<T, TrackerError>;
