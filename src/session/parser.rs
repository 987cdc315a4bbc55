use crate::units::{Unit, UnitError};
use std::fmt;

/// One user action in a session script
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // "focus"
    Focus,
    // "type 12,3" (text is taken verbatim, may be empty)
    Type(String),
    // "blur"
    Blur,
    // "commit 12,3": focus + type + blur
    Commit(String),
    // "inc" / "increment"
    Increment,
    // "dec" / "decrement"
    Decrement,
    // "unit px"
    SetUnit(Unit),
    // "set 42"
    SetValue(f64),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Focus => write!(f, "focus"),
            Command::Type(text) => write!(f, "type {}", text),
            Command::Blur => write!(f, "blur"),
            Command::Commit(text) => write!(f, "commit {}", text),
            Command::Increment => write!(f, "increment"),
            Command::Decrement => write!(f, "decrement"),
            Command::SetUnit(unit) => write!(f, "unit {}", unit),
            Command::SetValue(value) => write!(f, "set {}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    UnknownCommand(usize, String),
    MissingArgument(usize, &'static str),
    InvalidNumber(usize, String),
    InvalidUnit(usize, UnitError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownCommand(line, cmd) => {
                write!(f, "line {}: unknown command '{}'", line, cmd)
            }
            ScriptError::MissingArgument(line, cmd) => {
                write!(f, "line {}: '{}' needs an argument", line, cmd)
            }
            ScriptError::InvalidNumber(line, s) => {
                write!(f, "line {}: invalid number '{}'", line, s)
            }
            ScriptError::InvalidUnit(line, e) => write!(f, "line {}: {}", line, e),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parse a single script line. Blank lines and `#` comments yield `None`.
/// `line_no` is only used for error messages.
pub fn parse_command(line: &str, line_no: usize) -> Result<Option<Command>, ScriptError> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // Keep the argument untouched: typed text may contain spaces on purpose
    let trimmed = trimmed.trim_end_matches(['\r', '\n']);
    let (keyword, argument) = match trimmed.split_once(' ') {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (trimmed.trim_end(), None),
    };

    let command = match keyword {
        "focus" => Command::Focus,
        "blur" => Command::Blur,
        "inc" | "increment" => Command::Increment,
        "dec" | "decrement" => Command::Decrement,
        "type" => Command::Type(argument.unwrap_or("").to_string()),
        "commit" => Command::Commit(argument.unwrap_or("").to_string()),
        "unit" => {
            let arg = argument.ok_or(ScriptError::MissingArgument(line_no, "unit"))?;
            let unit = arg
                .parse::<Unit>()
                .map_err(|e| ScriptError::InvalidUnit(line_no, e))?;
            Command::SetUnit(unit)
        }
        "set" => {
            let arg = argument.ok_or(ScriptError::MissingArgument(line_no, "set"))?;
            let value = arg
                .trim()
                .parse::<f64>()
                .map_err(|_| ScriptError::InvalidNumber(line_no, arg.to_string()))?;
            Command::SetValue(value)
        }
        other => return Err(ScriptError::UnknownCommand(line_no, other.to_string())),
    };

    Ok(Some(command))
}

/// Parse a whole script, one command per line
pub fn parse_script(script: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        if let Some(command) = parse_command(line, idx + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
