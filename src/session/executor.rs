use crate::controller::{ChangeEvent, ControllerError, ControllerView, UnitValueController};
use crate::session::parser::Command;
use serde::Serialize;

/// One executed command and the notification it produced, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ChangeEvent>,
}

/// Drives a controller from parsed script commands
pub struct SessionExecutor {
    controller: UnitValueController,
    history: Vec<StepRecord>,
}

impl SessionExecutor {
    pub fn new(controller: UnitValueController) -> Self {
        Self {
            controller,
            history: Vec::new(),
        }
    }

    pub fn controller(&self) -> &UnitValueController {
        &self.controller
    }

    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    pub fn view(&self) -> ControllerView {
        self.controller.view()
    }

    /// Run one command, record it, and return the event it emitted
    pub fn execute(&mut self, command: &Command) -> Result<Option<ChangeEvent>, ControllerError> {
        let event = match command {
            Command::Focus => {
                self.controller.focus();
                None
            }
            Command::Type(text) => {
                self.controller.input(text);
                None
            }
            Command::Blur => self.controller.blur(),
            Command::Commit(text) => {
                self.controller.focus();
                self.controller.input(text);
                self.controller.blur()
            }
            Command::Increment => self.controller.increment(),
            Command::Decrement => self.controller.decrement(),
            Command::SetUnit(unit) => self.controller.set_unit(*unit),
            Command::SetValue(value) => self.controller.set_value(*value)?,
        };

        self.history.push(StepRecord {
            command: command.to_string(),
            event,
        });
        Ok(event)
    }

    pub fn execute_all(&mut self, commands: &[Command]) -> Result<(), ControllerError> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }

    /// Every event emitted so far, in order
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.history.iter().filter_map(|r| r.event).collect()
    }
}
