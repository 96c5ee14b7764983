use std::collections::VecDeque;

use crate::{
    render::Frame,
    ui::{MazeUi, UiError},
};
use common::Command;

#[derive(Default)]
pub struct MockUi {
    pub messages: Vec<String>,
    pub frames: Vec<Frame>,
    pub commands: VecDeque<Result<Option<Command>, UiError>>,
}

impl MockUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Result<Option<Command>, UiError>>,
    {
        Self {
            commands: commands.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl MazeUi for MockUi {
    fn draw(&mut self, frame: &Frame) -> Result<(), UiError> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    // Running out of scripted input counts as a disconnect so loops end.
    fn poll_command(&mut self) -> Result<Option<Command>, UiError> {
        self.commands
            .pop_front()
            .unwrap_or(Err(UiError::Disconnected))
    }
}
