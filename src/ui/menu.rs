//! Interactive prompts for the menu loop: the main selection, the add and
//! remove flows, and small display helpers.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use inquire::{Confirm, InquireError, Select, Text};

use crate::engine::model::AppRecord;

/// Fixed menu actions alongside the stored records.
#[derive(Debug, Clone)]
pub enum MenuChoice {
    Launch(AppRecord),
    Add,
    Remove,
    Exit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Launch(record) => write!(f, "{}", record.name),
            MenuChoice::Add => write!(f, "[+] Add app"),
            MenuChoice::Remove => write!(f, "[-] Remove app"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}

enum RemoveChoice {
    Record(AppRecord),
    Cancel,
}

impl fmt::Display for RemoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveChoice::Record(record) => write!(f, "{}", record.name),
            RemoveChoice::Cancel => write!(f, "Cancel"),
        }
    }
}

pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = std::io::stdout().flush();
}

pub fn report_error(message: &str) {
    eprintln!("{}", format!("Error: {message}").red());
}

/// Blocks until the user presses Enter, so errors stay visible before the
/// next screen clear.
pub fn pause() {
    print!("Press Enter to continue…");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}

/// Presents the main menu. "Remove app" is only offered when records exist;
/// a cancelled prompt maps to [`MenuChoice::Exit`].
pub fn select_action(records: &[AppRecord]) -> Result<MenuChoice> {
    let mut choices: Vec<MenuChoice> =
        records.iter().cloned().map(MenuChoice::Launch).collect();
    choices.push(MenuChoice::Add);
    if !records.is_empty() {
        choices.push(MenuChoice::Remove);
    }
    choices.push(MenuChoice::Exit);

    match Select::new("Select an app to run:", choices).prompt() {
        Ok(choice) => Ok(choice),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(MenuChoice::Exit)
        }
        Err(e) => Err(e.into()),
    }
}

/// Collects a new record via sequential prompts. Any blank or cancelled
/// answer aborts the add with no record produced.
pub fn prompt_new_app() -> Result<Option<AppRecord>> {
    let Some(name) = prompt_field("App name:")? else {
        return Ok(None);
    };
    let Some(directory) = prompt_field("Directory (path, ~VAR or $VAR):")? else {
        return Ok(None);
    };
    let Some(command) = prompt_field("Command to run:")? else {
        return Ok(None);
    };
    Ok(Some(AppRecord {
        name,
        directory,
        command,
    }))
}

fn prompt_field(message: &str) -> Result<Option<String>> {
    match Text::new(message).prompt() {
        Ok(answer) => {
            let answer = answer.trim().to_string();
            Ok(if answer.is_empty() { None } else { Some(answer) })
        }
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Picks a record to delete and asks for an explicit confirmation
/// (default No). Returns `None` on cancel or a declined confirmation.
pub fn prompt_removal(records: &[AppRecord]) -> Result<Option<AppRecord>> {
    let mut choices: Vec<RemoveChoice> =
        records.iter().cloned().map(RemoveChoice::Record).collect();
    choices.push(RemoveChoice::Cancel);

    let picked = match Select::new("Remove which app?", choices).prompt() {
        Ok(RemoveChoice::Record(record)) => record,
        Ok(RemoveChoice::Cancel) => return Ok(None),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let confirmed = match Confirm::new(&format!("Delete '{}'?", picked.name))
        .with_default(false)
        .prompt()
    {
        Ok(answer) => answer,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => false,
        Err(e) => return Err(e.into()),
    };

    Ok(confirmed.then_some(picked))
}
