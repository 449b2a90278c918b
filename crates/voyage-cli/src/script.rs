//! Interaction scripts for `voyage session`.
//!
//! One event per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! goto /relationship
//! select x-axis-dropdown RoomService
//! clear y-axis-dropdown
//! ```

use thiserror::Error;
use voyage_dash::Event;
use voyage_model::WidgetId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}' (expected goto, select, or clear)")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' is missing its {what}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        what: &'static str,
    },

    #[error("line {line}: unknown widget '{widget}'")]
    UnknownWidget { line: usize, widget: String },
}

/// Parse a whole script. Stops at the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<Event>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(event) = parse_line(idx + 1, line)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Parse one line; `None` for blanks and comments.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Event>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = split_word(line);
    let event = match command {
        "goto" => {
            if rest.is_empty() {
                return Err(missing(line_no, "goto", "path"));
            }
            Event::Navigate(rest.to_string())
        }
        "select" => {
            let (widget, value) = split_word(rest);
            let widget = parse_widget(line_no, "select", widget)?;
            if value.is_empty() {
                return Err(missing(line_no, "select", "value"));
            }
            Event::Select {
                widget,
                value: Some(value.to_string()),
            }
        }
        "clear" => {
            let widget = parse_widget(line_no, "clear", rest)?;
            Event::Select {
                widget,
                value: None,
            }
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(event))
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (text, ""),
    }
}

fn parse_widget(line: usize, command: &'static str, id: &str) -> Result<WidgetId, ScriptError> {
    if id.is_empty() {
        return Err(missing(line, command, "widget"));
    }
    WidgetId::parse(id).ok_or_else(|| ScriptError::UnknownWidget {
        line,
        widget: id.to_string(),
    })
}

fn missing(line: usize, command: &'static str, what: &'static str) -> ScriptError {
    ScriptError::MissingArgument {
        line,
        command,
        what,
    }
}
