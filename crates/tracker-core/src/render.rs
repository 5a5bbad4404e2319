// crates/tracker-core/src/render.rs - Listing layout shared by every record type
//
// The same bytes go to the console and to export files, so all labels and
// separators live here and nowhere else.
//
// BLOCK LAYOUT (position 1, recurring task):
// ```text
// 1. Nombre: Backup
//    Descripción: Copy the database
//    Fecha límite: 2024-01-01 09:00
//    Frecuencia: weekly
//    Estado: Pendiente
// -------------------
// ```

use std::io::{self, Write};

/// Line written after every record block
pub const DIVIDER: &str = "-------------------";

/// Header written before the project listing
pub const PROJECT_LIST_HEADER: &str = "Lista de proyectos:";

/// Header written before the task listing
pub const TASK_LIST_HEADER: &str = "Lista de tareas:";

const LABEL_NAME: &str = "Nombre";
const LABEL_DESCRIPTION: &str = "Descripción";
const LABEL_DEADLINE: &str = "Fecha límite";
const LABEL_FREQUENCY: &str = "Frecuencia";
const LABEL_STATUS: &str = "Estado";
const LABEL_COMMENTS: &str = "Comentarios";

const STATUS_COMPLETED: &str = "Completada";
const STATUS_PENDING: &str = "Pendiente";

const FIELD_INDENT: &str = "   ";
const COMMENT_INDENT: &str = "      ";

/// Status text for a completion flag
pub fn status_label(completed: bool) -> &'static str {
    if completed {
        STATUS_COMPLETED
    } else {
        STATUS_PENDING
    }
}

/// Write the numbered first line plus the description and deadline lines
pub(crate) fn write_heading<W: Write + ?Sized>(
    out: &mut W,
    position: usize,
    name: &str,
    description: &str,
    deadline: &str,
) -> io::Result<()> {
    writeln!(out, "{}. {}: {}", position, LABEL_NAME, name)?;
    write_field(out, LABEL_DESCRIPTION, description)?;
    write_field(out, LABEL_DEADLINE, deadline)
}

pub(crate) fn write_frequency<W: Write + ?Sized>(out: &mut W, frequency: &str) -> io::Result<()> {
    write_field(out, LABEL_FREQUENCY, frequency)
}

pub(crate) fn write_status<W: Write + ?Sized>(out: &mut W, completed: bool) -> io::Result<()> {
    write_field(out, LABEL_STATUS, status_label(completed))
}

/// Write the comment section; nothing at all when there are no comments
pub(crate) fn write_comments<'a, W, I>(out: &mut W, comments: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut comments = comments.into_iter().peekable();
    if comments.peek().is_none() {
        return Ok(());
    }

    writeln!(out, "{}{}:", FIELD_INDENT, LABEL_COMMENTS)?;
    for comment in comments {
        writeln!(out, "{}- {}", COMMENT_INDENT, comment)?;
    }
    Ok(())
}

fn write_field<W: Write + ?Sized>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}{}: {}", FIELD_INDENT, label, value)
}
