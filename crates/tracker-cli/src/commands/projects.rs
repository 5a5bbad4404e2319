// crates/tracker-cli/src/commands/projects.rs - Project tracker session
//
// MENU STRUCTURE:
// ```text
// main:   1 create | 2 manage -> submenu | 3 list | 4 export | 5 exit
// manage: 1 delete | 2 complete | 3 comment | 4 back to main
// ```
// Every manage action first asks the user to pick a project by its listed
// number. Failures print a notice and return to the menu that was showing.

use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;
use tracker_core::{Project, ProjectManager, RecordId, RecordKind, TrackerError};

use super::{finish, show_menu, to_position};
use crate::context::Context;
use crate::messages;
use crate::stdin::{Console, InputResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Create,
    Manage,
    List,
    Export,
    Exit,
}

impl MainChoice {
    fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Self::Create),
            2 => Some(Self::Manage),
            3 => Some(Self::List),
            4 => Some(Self::Export),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Something done to the project picked in the selection flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectAction {
    Delete,
    Complete,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManageChoice {
    Act(ProjectAction),
    Back,
}

impl ManageChoice {
    fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Self::Act(ProjectAction::Delete)),
            2 => Some(Self::Act(ProjectAction::Complete)),
            3 => Some(Self::Act(ProjectAction::Comment)),
            4 => Some(Self::Back),
            _ => None,
        }
    }
}

/// Run the project tracker until the user exits or input ends
pub fn run<R: BufRead, W: Write>(ctx: &Context, console: &mut Console<R, W>) -> anyhow::Result<()> {
    let mut manager = ProjectManager::new(ctx.limits().max_projects);
    let outcome = session(ctx, &mut manager, console);
    finish(console, outcome)
}

fn session<R: BufRead, W: Write>(
    ctx: &Context,
    manager: &mut ProjectManager,
    console: &mut Console<R, W>,
) -> InputResult<()> {
    loop {
        show_menu(console, messages::MENU_TITLE, &messages::PROJECT_MAIN_MENU)?;
        let selection = console.prompt_number(messages::ENTER_OPTION)?;
        let choice = MainChoice::from_selection(selection);
        debug!(selection, ?choice, "main menu");

        match choice {
            Some(MainChoice::Create) => create_project(ctx, manager, console)?,
            Some(MainChoice::Manage) => manage_projects(manager, console)?,
            Some(MainChoice::List) => manager.write_listing(console.out())?,
            Some(MainChoice::Export) => export_projects(manager, console)?,
            Some(MainChoice::Exit) => return Ok(()),
            None => console.notice(messages::INVALID_OPTION)?,
        }
    }
}

fn create_project<R: BufRead, W: Write>(
    ctx: &Context,
    manager: &mut ProjectManager,
    console: &mut Console<R, W>,
) -> InputResult<()> {
    let name = console.prompt_line(messages::ENTER_PROJECT_NAME)?;
    let description = console.prompt_line(messages::ENTER_PROJECT_DESCRIPTION)?;
    let deadline = console.prompt_line(messages::ENTER_PROJECT_DEADLINE)?;

    let project =
        Project::new(name, description, deadline).with_comment_limit(ctx.limits().max_comments);
    match manager.add(project) {
        Ok(_) => console.say(messages::PROJECT_ADDED),
        Err(err) => report(console, &err),
    }
}

fn manage_projects<R: BufRead, W: Write>(
    manager: &mut ProjectManager,
    console: &mut Console<R, W>,
) -> InputResult<()> {
    loop {
        show_menu(console, messages::MANAGE_MENU_TITLE, &messages::MANAGE_MENU)?;
        let selection = console.prompt_number(messages::ENTER_OPTION)?;
        let choice = ManageChoice::from_selection(selection);
        debug!(selection, ?choice, "manage menu");

        match choice {
            Some(ManageChoice::Back) => return console.say(messages::BACK_TO_MAIN),
            Some(ManageChoice::Act(action)) => {
                if let Some(id) = select_project(manager, console)? {
                    apply(action, id, manager, console)?;
                }
            }
            None => console.notice(messages::INVALID_OPTION)?,
        }
    }
}

/// Show the listing and resolve the number the user types
fn select_project<R: BufRead, W: Write>(
    manager: &ProjectManager,
    console: &mut Console<R, W>,
) -> InputResult<Option<RecordId>> {
    console.say(messages::SELECT_PROJECT)?;
    manager.write_listing(console.out())?;
    let selection = console.prompt_number(messages::ENTER_PROJECT_NUMBER)?;

    match manager.select_by_position(to_position(selection)) {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            report(console, &err)?;
            Ok(None)
        }
    }
}

fn apply<R: BufRead, W: Write>(
    action: ProjectAction,
    id: RecordId,
    manager: &mut ProjectManager,
    console: &mut Console<R, W>,
) -> InputResult<()> {
    let result = match action {
        ProjectAction::Delete => manager.remove(id).map(|_| messages::PROJECT_REMOVED),
        ProjectAction::Complete => manager.mark_complete(id).map(|_| messages::PROJECT_COMPLETED),
        ProjectAction::Comment => {
            let content = console.prompt_line(messages::ENTER_COMMENT)?;
            manager
                .add_comment(id, content)
                .map(|_| messages::COMMENT_ADDED)
        }
    };

    match result {
        Ok(confirmation) => console.say(confirmation),
        Err(err) => report(console, &err),
    }
}

fn export_projects<R: BufRead, W: Write>(
    manager: &ProjectManager,
    console: &mut Console<R, W>,
) -> InputResult<()> {
    let file_name = console.prompt_line(messages::ENTER_EXPORT_FILE)?;
    match manager.export(Path::new(&file_name)) {
        Ok(()) => console.say(&messages::export_succeeded(&file_name)),
        Err(err) => report(console, &err),
    }
}

/// Print the notice for a rejected project operation
fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &TrackerError) -> InputResult<()> {
    debug!(error = %err, "project operation rejected");
    let text = match err {
        TrackerError::CapacityExceeded {
            kind: RecordKind::Comment,
            ..
        } => messages::TOO_MANY_COMMENTS.to_string(),
        TrackerError::CapacityExceeded { .. } => messages::TOO_MANY_PROJECTS.to_string(),
        TrackerError::PositionOutOfRange { .. } => messages::INVALID_PROJECT_NUMBER.to_string(),
        TrackerError::NotFound(_) => messages::PROJECT_NOT_FOUND.to_string(),
        TrackerError::Export { path, .. } => messages::export_failed(&path.display().to_string()),
        other => other.to_string(),
    };
    console.notice(&text)
}
