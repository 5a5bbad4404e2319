// crates/tracker-core/src/record.rs - Record types stored by collections
//
// Two record families exist: projects (which own their comments) and tasks
// (which come in a simple and a recurring flavour). Neither validates its
// fields; empty strings and free-form deadlines are stored exactly as given.

use std::fmt;
use std::io::{self, Write};

use crate::error::{TrackerError, TrackerResult};
use crate::render;

/// Default maximum number of comments a project accepts
pub const DEFAULT_MAX_COMMENTS: usize = 100;

/// What kind of thing a capacity limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Project,
    Task,
    Comment,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => write!(f, "projects"),
            Self::Task => write!(f, "tasks"),
            Self::Comment => write!(f, "comments"),
        }
    }
}

/// Capability every record stored in a [`Collection`](crate::Collection) provides
///
/// The collection only needs to know how to complete a record and how to
/// render it as a numbered block; everything else is type-specific.
pub trait Record {
    /// Kind reported when the owning collection is full
    const KIND: RecordKind;

    /// Line written before a listing of this record type
    const LIST_HEADER: &'static str;

    fn name(&self) -> &str;

    fn is_completed(&self) -> bool;

    /// Set the completion flag. Calling it on a completed record is a no-op.
    fn mark_complete(&mut self);

    /// Write this record's display block at the given 1-based position
    fn render<W: Write + ?Sized>(&self, position: usize, out: &mut W) -> io::Result<()>;
}

/// A note attached to a project. Its text never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    content: String,
}

impl Comment {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A project with a bounded, append-only list of comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    description: String,
    deadline: String,
    completed: bool,
    comments: Vec<Comment>,
    comment_limit: usize,
}

impl Project {
    /// Create a pending project with no comments
    ///
    /// The deadline is free text ("2024-01-01 09:00", "next week", "") and is
    /// never parsed.
    pub fn new<N, D, L>(name: N, description: D, deadline: L) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            deadline: deadline.into(),
            completed: false,
            comments: Vec::new(),
            comment_limit: DEFAULT_MAX_COMMENTS,
        }
    }

    /// Replace the maximum number of comments this project accepts
    pub fn with_comment_limit(mut self, limit: usize) -> Self {
        self.comment_limit = limit;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    pub fn comment_limit(&self) -> usize {
        self.comment_limit
    }

    /// Append a comment
    ///
    /// ERROR HANDLING:
    /// Once the project holds `comment_limit` comments, further calls return
    /// `CapacityExceeded` and the comment list is left untouched.
    pub fn add_comment<S: Into<String>>(&mut self, content: S) -> TrackerResult<()> {
        if self.comments.len() >= self.comment_limit {
            return Err(TrackerError::CapacityExceeded {
                kind: RecordKind::Comment,
                limit: self.comment_limit,
            });
        }

        self.comments.push(Comment::new(content));
        Ok(())
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Comment at a 0-based index
    pub fn comment_at(&self, index: usize) -> TrackerResult<&Comment> {
        self.comments
            .get(index)
            .ok_or(TrackerError::CommentOutOfRange {
                index,
                count: self.comments.len(),
            })
    }

    /// Comments in the order they were added
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }
}

impl Record for Project {
    const KIND: RecordKind = RecordKind::Project;
    const LIST_HEADER: &'static str = render::PROJECT_LIST_HEADER;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn mark_complete(&mut self) {
        self.completed = true;
    }

    fn render<W: Write + ?Sized>(&self, position: usize, out: &mut W) -> io::Result<()> {
        render::write_heading(out, position, &self.name, &self.description, &self.deadline)?;
        render::write_status(out, self.completed)?;
        render::write_comments(out, self.comments.iter().map(Comment::content))
    }
}

/// Task flavour; selects how a task is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// One-off task
    Simple,
    /// Task that repeats; the frequency is free text ("weekly", "cada lunes")
    Recurring { frequency: String },
}

/// A task tracked by the task manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    description: String,
    deadline: String,
    completed: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a pending one-off task
    pub fn simple<N, D, L>(name: N, description: D, deadline: L) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        L: Into<String>,
    {
        Self::with_kind(name, description, deadline, TaskKind::Simple)
    }

    /// Create a pending recurring task
    pub fn recurring<N, D, L, F>(name: N, description: D, deadline: L, frequency: F) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        L: Into<String>,
        F: Into<String>,
    {
        let kind = TaskKind::Recurring {
            frequency: frequency.into(),
        };
        Self::with_kind(name, description, deadline, kind)
    }

    fn with_kind<N, D, L>(name: N, description: D, deadline: L, kind: TaskKind) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            deadline: deadline.into(),
            completed: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Frequency of a recurring task, `None` for simple tasks
    pub fn frequency(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Simple => None,
            TaskKind::Recurring { frequency } => Some(frequency),
        }
    }
}

impl Record for Task {
    const KIND: RecordKind = RecordKind::Task;
    const LIST_HEADER: &'static str = render::TASK_LIST_HEADER;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn mark_complete(&mut self) {
        self.completed = true;
    }

    fn render<W: Write + ?Sized>(&self, position: usize, out: &mut W) -> io::Result<()> {
        render::write_heading(out, position, &self.name, &self.description, &self.deadline)?;
        if let TaskKind::Recurring { frequency } = &self.kind {
            render::write_frequency(out, frequency)?;
        }
        render::write_status(out, self.completed)
    }
}
