// crates/tracker-core/src/collection.rs - Bounded, insertion-ordered record storage
//
// A Collection owns its records outright. Each record gets a RecordId handle
// when it is added; handles are never reused, so a handle to a removed record
// stays dead. Users never see handles: menus work with 1-based positions and
// translate them through `select_by_position`.
//
// EXAMPLE USAGE:
// ```rust
// use tracker_core::{Project, ProjectManager};
//
// let mut manager = ProjectManager::new(100);
// let id = manager.add(Project::new("Build API", "Backend work", "2024-01-01"))?;
// manager.add_comment(id, "needs review")?;
// manager.mark_complete(id)?;
// manager.write_listing(&mut std::io::stdout())?;
// ```

use indexmap::IndexMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::record::{Project, Record, Task};
use crate::render::DIVIDER;

/// Stable handle to a record inside one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered collection of owned records with a fixed maximum size
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: IndexMap<RecordId, T>,
    capacity: usize,
    next_id: u64,
}

/// Collection used by the project tracker
pub type ProjectManager = Collection<Project>;

/// Collection used by the task tracker
pub type TaskManager = Collection<Task>;

impl<T: Record> Collection<T> {
    /// Create an empty collection that accepts at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self {
            records: IndexMap::new(),
            capacity,
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a record at the end of the collection
    ///
    /// ERROR HANDLING:
    /// A full collection returns `CapacityExceeded`; the record is dropped and
    /// nothing already stored is touched.
    pub fn add(&mut self, record: T) -> TrackerResult<RecordId> {
        if self.records.len() >= self.capacity {
            let kind = T::KIND;
            warn!(%kind, limit = self.capacity, "collection full, record rejected");
            return Err(TrackerError::CapacityExceeded {
                kind: T::KIND,
                limit: self.capacity,
            });
        }

        let id = RecordId(self.next_id);
        self.next_id += 1;
        debug!(%id, name = record.name(), "record added");
        self.records.insert(id, record);
        Ok(id)
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    /// Records with their handles, in list order
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &T)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Resolve a 1-based position, as typed by a user, to a handle
    pub fn select_by_position(&self, position: usize) -> TrackerResult<RecordId> {
        position
            .checked_sub(1)
            .and_then(|index| self.records.get_index(index))
            .map(|(id, _)| *id)
            .ok_or(TrackerError::PositionOutOfRange {
                position,
                len: self.records.len(),
            })
    }

    /// Remove a record, closing the gap it leaves
    ///
    /// Records after the removed one move up by one position and keep their
    /// relative order. Removing the same handle twice returns `NotFound`.
    pub fn remove(&mut self, id: RecordId) -> TrackerResult<T> {
        let record = self
            .records
            .shift_remove(&id)
            .ok_or(TrackerError::NotFound(id))?;
        debug!(%id, name = record.name(), "record removed");
        Ok(record)
    }

    /// Mark the record behind a handle as completed
    pub fn mark_complete(&mut self, id: RecordId) -> TrackerResult<()> {
        let record = self.get_mut(id).ok_or(TrackerError::NotFound(id))?;
        record.mark_complete();
        debug!(%id, "record marked complete");
        Ok(())
    }

    /// Mark the record at a 1-based position as completed
    pub fn mark_complete_at(&mut self, position: usize) -> TrackerResult<()> {
        let id = self.select_by_position(position)?;
        self.mark_complete(id)
    }

    /// Write the full listing: header, then every record block followed by
    /// the divider line
    pub fn write_listing<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", T::LIST_HEADER)?;
        for (index, record) in self.records.values().enumerate() {
            record.render(index + 1, out)?;
            writeln!(out, "{}", DIVIDER)?;
        }
        Ok(())
    }

    /// Write the listing to a file, creating or truncating it
    ///
    /// The file content is byte-for-byte what `write_listing` sends to the
    /// console.
    pub fn export(&self, path: &Path) -> TrackerResult<()> {
        let to_export_error = |source: io::Error| TrackerError::Export {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_export_error)?;
        let mut writer = BufWriter::new(file);
        self.write_listing(&mut writer).map_err(to_export_error)?;
        writer.flush().map_err(to_export_error)?;

        debug!(path = %path.display(), records = self.len(), "listing exported");
        Ok(())
    }
}

impl Collection<Project> {
    /// Append a comment to a project still held by this collection
    pub fn add_comment<S: Into<String>>(&mut self, id: RecordId, content: S) -> TrackerResult<()> {
        let project = self.get_mut(id).ok_or(TrackerError::NotFound(id))?;
        project.add_comment(content).inspect_err(|_| {
            warn!(%id, "comment rejected, project at comment limit");
        })?;
        debug!(%id, "comment added");
        Ok(())
    }
}
