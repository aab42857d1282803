//! Line-command session shell over the task service.
//!
//! # Responsibility
//! - Parse one-line commands into typed shell commands.
//! - Dispatch to the task service and render plain-text replies.
//!
//! # Invariants
//! - The search term is shell state, never store state.
//! - The wall clock is read by the caller at render time and passed in;
//!   nothing here touches the environment.

use std::fmt::Write as _;
use taskdeck_core::{TaskDraft, TaskFilter, TaskId, TaskPatch, TaskService};

pub const HELP_TEXT: &str = "\
commands:
  add <title> | <description> | <due-date>   create a task (due-date: YYYY-MM-DD)
  edit <id> <title> | <description> | <due-date>
                                             update a task; leave a segment blank to keep it
  done <id>                                  toggle completion
  rm <id>                                    delete a task
  filter all|completed|pending|overdue       set the active filter
  search [term]                              set the title search (no term clears it)
  list                                       show visible tasks
  help                                       this text
  quit                                       end the session";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        description: String,
        due_date: String,
    },
    Edit {
        id: String,
        patch: TaskPatch,
    },
    Toggle {
        id: String,
    },
    Remove {
        id: String,
    },
    Filter(TaskFilter),
    Search(String),
    List,
    Help,
    Quit,
}

/// Parse failures for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line; the caller should prompt again silently.
    Empty,
    Unknown(String),
    Usage(&'static str),
    BadFilter(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
            Self::BadFilter(value) => {
                write!(f, "unknown filter `{value}`; expected all|completed|pending|overdue")
            }
        }
    }
}

/// Parses one input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "add" => parse_add(rest),
        "edit" => parse_edit(rest),
        "done" | "toggle" => require_id(rest, "done <id>").map(|id| Command::Toggle { id }),
        "rm" | "delete" => require_id(rest, "rm <id>").map(|id| Command::Remove { id }),
        "filter" => match rest.parse::<TaskFilter>() {
            Ok(filter) => Ok(Command::Filter(filter)),
            Err(_) => Err(ParseError::BadFilter(rest.to_string())),
        },
        "search" => Ok(Command::Search(rest.to_string())),
        "list" | "ls" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<Command, ParseError> {
    const USAGE: &str = "add <title> | <description> | <due-date>";
    let segments: Vec<&str> = rest.split('|').map(str::trim).collect();
    if segments.len() != 3 {
        return Err(ParseError::Usage(USAGE));
    }
    Ok(Command::Add {
        title: segments[0].to_string(),
        description: segments[1].to_string(),
        due_date: segments[2].to_string(),
    })
}

fn parse_edit(rest: &str) -> Result<Command, ParseError> {
    const USAGE: &str = "edit <id> <title> | <description> | <due-date>";
    let (id, fields) = rest
        .split_once(char::is_whitespace)
        .ok_or(ParseError::Usage(USAGE))?;

    let segments: Vec<&str> = fields.split('|').map(str::trim).collect();
    if segments.len() > 3 {
        return Err(ParseError::Usage(USAGE));
    }

    // Blank segment = keep the current value; maps straight onto the
    // shallow-merge patch.
    let field = |index: usize| -> Option<String> {
        segments
            .get(index)
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_string())
    };
    let patch = TaskPatch {
        title: field(0),
        description: field(1),
        due_date: field(2),
        completed: None,
    };
    if patch.is_empty() {
        return Err(ParseError::Usage(USAGE));
    }

    Ok(Command::Edit {
        id: id.to_string(),
        patch,
    })
}

fn require_id(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(ParseError::Usage(usage));
    }
    Ok(rest.to_string())
}

/// Session state: the service plus the view-held search term.
#[derive(Debug, Default)]
pub struct Shell {
    service: TaskService,
    search: String,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes one command and returns the text to print.
    ///
    /// `today` is the render-time calendar date as zero-padded `YYYY-MM-DD`.
    /// `Quit` is the caller's concern and answers with a farewell only.
    pub fn execute(&mut self, command: Command, today: &str) -> String {
        match command {
            Command::Add {
                title,
                description,
                due_date,
            } => {
                let draft = TaskDraft {
                    title,
                    description,
                    due_date,
                };
                match self.service.add_task(&draft) {
                    Ok(id) => format!("added {}", short_id(id)),
                    Err(err) => err.to_string(),
                }
            }
            Command::Edit { id, patch } => match self.resolve_id(&id) {
                Ok(id) => match self.service.edit_task(id, &patch) {
                    Ok(()) => format!("updated {}", short_id(id)),
                    Err(err) => err.to_string(),
                },
                Err(message) => message,
            },
            Command::Toggle { id } => match self.resolve_id(&id) {
                Ok(id) => match self.service.toggle_complete(id) {
                    Ok(true) => format!("completed {}", short_id(id)),
                    Ok(false) => format!("reopened {}", short_id(id)),
                    Err(err) => err.to_string(),
                },
                Err(message) => message,
            },
            Command::Remove { id } => match self.resolve_id(&id) {
                Ok(id) => {
                    self.service.delete_task(id);
                    format!("deleted {}", short_id(id))
                }
                Err(message) => message,
            },
            Command::Filter(filter) => {
                self.service.set_filter(filter);
                format!("filter set to {filter}")
            }
            Command::Search(term) => {
                self.search = term;
                if self.search.is_empty() {
                    "search cleared".to_string()
                } else {
                    format!("searching titles for `{}`", self.search)
                }
            }
            Command::List => self.render_list(today),
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => "bye".to_string(),
        }
    }

    fn render_list(&self, today: &str) -> String {
        let visible = self.service.visible_tasks(&self.search, today);
        let mut out = format!(
            "filter={} search={} showing {} of {} task(s)",
            self.service.filter(),
            if self.search.is_empty() { "-" } else { &self.search },
            visible.len(),
            self.service.task_count(),
        );
        for task in visible {
            let mark = if task.completed { 'x' } else { ' ' };
            let _ = write!(
                out,
                "\n[{mark}] {}  due {}  {}  ({})",
                short_id(task.id),
                task.due_date,
                task.title,
                task.description,
            );
        }
        out
    }

    /// Resolves a user-typed id or unique id prefix to a held task id.
    fn resolve_id(&self, input: &str) -> Result<TaskId, String> {
        let needle = input.to_ascii_lowercase();
        let matches: Vec<TaskId> = self
            .service
            .tasks()
            .iter()
            .filter(|task| {
                task.id.simple().to_string().starts_with(&needle)
                    || task.id.to_string().starts_with(&needle)
            })
            .map(|task| task.id)
            .collect();

        match matches.as_slice() {
            [] => Err(format!("no task matches id `{input}`")),
            [id] => Ok(*id),
            _ => Err(format!("id `{input}` is ambiguous; give more characters")),
        }
    }
}

fn short_id(id: TaskId) -> String {
    id.simple().to_string()[..8].to_string()
}
