//! Terminal rendering shim for the project board.
//!
//! # Responsibility
//! - Drive one board from line commands on stdin.
//! - Print the in-memory surface after every command.
//!
//! Commands: `add <title> | <description> | <people>`,
//! `move <project-id> <active|finished>`, `show`, `quit`.

use log::info;
use projboard_core::{
    default_log_level, init_logging, BoardConfig, DropOutcome, MemorySurface, MoveOutcome,
    ProjectBoard, ProjectId, ProjectStatus, SharedSurface, APP_HOST_ID,
};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

const LOG_DIR_ENV: &str = "PROJBOARD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PROJBOARD_LOG_LEVEL";

enum Command {
    Add {
        title: String,
        description: String,
        people: String,
    },
    Move {
        id: ProjectId,
        target: ProjectStatus,
    },
    Show,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "add" => {
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            let [title, description, people] = parts.as_slice() else {
                return Err("usage: add <title> | <description> | <people>".to_string());
            };
            Ok(Command::Add {
                title: title.to_string(),
                description: description.to_string(),
                people: people.to_string(),
            })
        }
        "move" => {
            let mut args = rest.split_whitespace();
            let (Some(id), Some(list), None) = (args.next(), args.next(), args.next()) else {
                return Err("usage: move <project-id> <active|finished>".to_string());
            };
            let target = ProjectStatus::parse(list)
                .ok_or_else(|| format!("unknown list `{list}`; expected active|finished"))?;
            Ok(Command::Move {
                id: ProjectId::from(id),
                target,
            })
        }
        "show" | "" => Ok(Command::Show),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`")),
    }
}

/// Simulates the full gesture: pick up the card, hover the list, drop, release.
fn drag_card(board: &ProjectBoard, id: &ProjectId, target: ProjectStatus) -> String {
    let Some(transfer) = board.begin_drag(id) else {
        return format!("no card with id {id}");
    };
    board.drag_over(target, &transfer);
    let outcome = board.drop(target, &transfer);
    board.end_drag(id);
    match outcome {
        Ok(DropOutcome::Move(MoveOutcome::Moved)) => format!("moved {id} to {target}"),
        Ok(DropOutcome::Move(MoveOutcome::Unchanged)) => format!("{id} is already {target}"),
        Ok(DropOutcome::Move(MoveOutcome::NotFound)) => format!("no project with id {id}"),
        Ok(DropOutcome::NoPayload) => "drag carried no payload".to_string(),
        Err(err) => format!("move failed: {err}"),
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn main() {
    init_logging_from_env();

    let memory = Rc::new(RefCell::new(MemorySurface::new()));
    let surface: SharedSurface = memory.clone();
    let board = match ProjectBoard::new(BoardConfig::default(), surface) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("failed to start board: {err}");
            std::process::exit(1);
        }
    };

    info!("event=cli_start module=cli status=ok");
    println!("projboard {}", projboard_core::core_version());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let message = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Show) => None,
            Ok(Command::Add {
                title,
                description,
                people,
            }) => Some(match board.submit(&title, &description, &people) {
                Ok(id) => format!("added {id}"),
                Err(err) => format!("{err}"),
            }),
            Ok(Command::Move { id, target }) => Some(drag_card(&board, &id, target)),
            Err(err) => Some(err),
        };

        for alert in memory.borrow_mut().take_alerts() {
            println!("! {alert}");
        }
        if let Some(message) = message {
            println!("{message}");
        }
        print!("{}", memory.borrow().render_text(APP_HOST_ID));
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use projboard_core::ProjectStatus;

    #[test]
    fn parses_add_with_pipe_separated_fields() {
        let Ok(Command::Add {
            title,
            description,
            people,
        }) = parse_command("add Build API | Create REST endpoints | 3")
        else {
            panic!("expected add command");
        };
        assert_eq!(title, "Build API");
        assert_eq!(description, "Create REST endpoints");
        assert_eq!(people, "3");
    }

    #[test]
    fn parses_move_target() {
        let Ok(Command::Move { id, target }) = parse_command("move abc finished") else {
            panic!("expected move command");
        };
        assert_eq!(id.as_str(), "abc");
        assert_eq!(target, ProjectStatus::Finished);
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(parse_command("add only-title").is_err());
        assert!(parse_command("move abc archived").is_err());
        assert!(parse_command("fly").is_err());
    }
}
