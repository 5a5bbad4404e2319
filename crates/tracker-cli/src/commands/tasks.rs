// crates/tracker-cli/src/commands/tasks.rs - Task tracker session
//
// Single-level menu: create simple task, create recurring task, list,
// complete by listed number, exit.

use std::io::{BufRead, Write};
use tracing::debug;
use tracker_core::{Task, TaskManager, TrackerError};

use super::{finish, show_menu, to_position};
use crate::context::Context;
use crate::messages;
use crate::stdin::{Console, InputResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    CreateSimple,
    CreateRecurring,
    List,
    Complete,
    Exit,
}

impl MainChoice {
    fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Self::CreateSimple),
            2 => Some(Self::CreateRecurring),
            3 => Some(Self::List),
            4 => Some(Self::Complete),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the task tracker until the user exits or input ends
pub fn run<R: BufRead, W: Write>(ctx: &Context, console: &mut Console<R, W>) -> anyhow::Result<()> {
    let mut manager = TaskManager::new(ctx.limits().max_tasks);
    let outcome = session(&mut manager, console);
    finish(console, outcome)
}

fn session<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    console: &mut Console<R, W>,
) -> InputResult<()> {
    loop {
        show_menu(console, messages::MENU_TITLE, &messages::TASK_MAIN_MENU)?;
        let selection = console.prompt_number(messages::ENTER_OPTION)?;
        let choice = MainChoice::from_selection(selection);
        debug!(selection, ?choice, "main menu");

        match choice {
            Some(MainChoice::CreateSimple) => create_task(manager, console, false)?,
            Some(MainChoice::CreateRecurring) => create_task(manager, console, true)?,
            Some(MainChoice::List) => manager.write_listing(console.out())?,
            Some(MainChoice::Complete) => complete_task(manager, console)?,
            Some(MainChoice::Exit) => return Ok(()),
            None => console.notice(messages::INVALID_OPTION)?,
        }
    }
}

fn create_task<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    console: &mut Console<R, W>,
    recurring: bool,
) -> InputResult<()> {
    let name = console.prompt_line(messages::ENTER_TASK_NAME)?;
    let description = console.prompt_line(messages::ENTER_TASK_DESCRIPTION)?;
    let deadline = console.prompt_line(messages::ENTER_TASK_DEADLINE)?;

    let task = if recurring {
        let frequency = console.prompt_line(messages::ENTER_TASK_FREQUENCY)?;
        Task::recurring(name, description, deadline, frequency)
    } else {
        Task::simple(name, description, deadline)
    };

    match manager.add(task) {
        Ok(_) => console.say(messages::TASK_ADDED),
        Err(err) => report(console, &err),
    }
}

fn complete_task<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    console: &mut Console<R, W>,
) -> InputResult<()> {
    let selection = console.prompt_number(messages::ENTER_TASK_INDEX)?;
    match manager.mark_complete_at(to_position(selection)) {
        Ok(()) => console.say(messages::TASK_COMPLETED),
        Err(err) => report(console, &err),
    }
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &TrackerError) -> InputResult<()> {
    debug!(error = %err, "task operation rejected");
    match err {
        TrackerError::CapacityExceeded { .. } => console.notice(messages::TOO_MANY_TASKS),
        TrackerError::PositionOutOfRange { .. } | TrackerError::NotFound(_) => {
            console.notice(messages::INVALID_TASK_INDEX)
        }
        other => console.notice(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tracker_core::Record;

    fn play_with(capacity: usize, script: &str) -> (TaskManager, String) {
        console::set_colors_enabled(false);
        let mut manager = TaskManager::new(capacity);
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

        let outcome = session(&mut manager, &mut console);
        assert!(outcome.is_ok(), "session ended with {:?}", outcome);
        (manager, String::from_utf8(console.into_output()).unwrap())
    }

    fn play(script: &str) -> (TaskManager, String) {
        play_with(100, script)
    }

    #[test]
    fn test_create_both_kinds_and_list() {
        let script = "1\nCall\nthe bank\nmonday\n\
                      2\nBackup\nCopy the database\nsunday 09:00\nweekly\n\
                      3\n5\n";
        let (manager, output) = play(script);

        let frequencies: Vec<_> = manager.iter().map(|(_, t)| t.frequency()).collect();
        assert_eq!(frequencies, vec![None, Some("weekly")]);
        assert_eq!(output.matches(messages::TASK_ADDED).count(), 2);
        assert!(output.contains(
            "Lista de tareas:\n\
             1. Nombre: Call\n\
             \x20  Descripción: the bank\n\
             \x20  Fecha límite: monday\n\
             \x20  Estado: Pendiente\n\
             -------------------\n\
             2. Nombre: Backup\n\
             \x20  Descripción: Copy the database\n\
             \x20  Fecha límite: sunday 09:00\n\
             \x20  Frecuencia: weekly\n\
             \x20  Estado: Pendiente\n\
             -------------------\n"
        ));
    }

    #[test]
    fn test_complete_by_number_twice() {
        let (manager, output) = play("1\nA\n\n\n1\nB\n\n\n4\n2\n4\n2\n5\n");

        let done: Vec<bool> = manager.iter().map(|(_, t)| t.is_completed()).collect();
        assert_eq!(done, vec![false, true]);
        assert_eq!(output.matches(messages::TASK_COMPLETED).count(), 2);
    }

    #[test]
    fn test_invalid_task_index() {
        let (manager, output) = play("1\nA\n\n\n4\n0\n4\n2\n4\n-5\n5\n");

        assert!(manager.iter().all(|(_, t)| !t.is_completed()));
        assert_eq!(output.matches(messages::INVALID_TASK_INDEX).count(), 3);
    }

    #[test]
    fn test_task_capacity() {
        let (manager, output) = play_with(1, "1\nA\n\n\n2\nB\n\n\ndaily\n5\n");

        assert_eq!(manager.len(), 1);
        assert!(output.contains(messages::TOO_MANY_TASKS));
    }

    #[test]
    fn test_non_numeric_option_is_reprompted() {
        let (_, output) = play("tres\n3\n5\n");

        assert!(output.contains(messages::INVALID_NUMBER));
        assert!(output.contains("Lista de tareas:\n"));
        assert!(!output.contains(messages::INVALID_OPTION));
    }

    #[test]
    fn test_non_utf8_description_keeps_session_alive() {
        console::set_colors_enabled(false);
        let ctx = Context::from_config(Default::default());
        let input = b"1\nA\ndescripci\xF3n\nmonday\n3\n5\n".to_vec();
        let mut console = Console::new(Cursor::new(input), Vec::new());

        run(&ctx, &mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(messages::TASK_ADDED));
        assert!(output.contains("   Descripción: descripci\u{FFFD}n\n"));
        assert!(output.ends_with(&format!("{}{}\n", messages::ENTER_OPTION, messages::EXITING)));
    }

    #[test]
    fn test_exit_prints_message() {
        console::set_colors_enabled(false);
        let ctx = Context::from_config(Default::default());
        let mut console = Console::new(Cursor::new(b"5\n".to_vec()), Vec::new());

        run(&ctx, &mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.ends_with(&format!("{}{}\n", messages::ENTER_OPTION, messages::EXITING)));
    }
}
