use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use thiserror::Error;

use crate::render::{Frame, Tile, glyph};
use common::{Command, Difficulty, Direction};

#[derive(Debug, Error)]
pub enum UiError {
    #[error("input source disconnected")]
    Disconnected,
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub trait MazeUi {
    fn draw(&mut self, frame: &Frame) -> Result<(), UiError>;
    fn show_message(&mut self, message: &str);
    fn poll_command(&mut self) -> Result<Option<Command>, UiError>;
}

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Top)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Down => Some(Command::Move(Direction::Bottom)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Char('s') => Some(Command::RevealSolution),
        KeyCode::Char('n') => Some(Command::NewMaze),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => Difficulty::from_key(c).map(Command::SetDifficulty),
        _ => None,
    }
}

fn color_of(tile: Tile) -> Color {
    match tile {
        Tile::Wall => Color::White,
        Tile::Floor => Color::Reset,
        Tile::Path => Color::Green,
        Tile::Start => Color::Blue,
        Tile::End => Color::Red,
        Tile::Player => Color::Yellow,
    }
}

pub struct TerminalUi<W: Write> {
    stdout: W,
    message: Option<String>,
    is_raw_mode_owner: bool, // True except in tests.
}

impl TerminalUi<Stdout> {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self {
            stdout,
            message: None,
            is_raw_mode_owner: true,
        })
    }
}

impl<W: Write> TerminalUi<W> {
    fn handle_event(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) => command_for_key(key),
            _ => None,
        }
    }

    fn next_command(
        &mut self,
        ready: io::Result<bool>,
        read: impl FnOnce() -> io::Result<Event>,
    ) -> Result<Option<Command>, UiError> {
        if !ready? {
            return Ok(None);
        }

        match read() {
            Ok(event) => Ok(self.handle_event(event)),
            Err(_) => Err(UiError::Disconnected),
        }
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.stdout,
            SetForegroundColor(Color::White),
            Print(&frame.hud),
            ResetColor
        )?;

        for (row, tiles) in frame.tiles.iter().enumerate() {
            queue!(self.stdout, MoveTo(0, row as u16 + 1))?;
            for &tile in tiles {
                queue!(
                    self.stdout,
                    SetForegroundColor(color_of(tile)),
                    Print(glyph(tile))
                )?;
            }
            queue!(self.stdout, ResetColor)?;
        }

        if let Some(message) = &self.message {
            queue!(
                self.stdout,
                MoveTo(0, frame.height() as u16 + 1),
                SetForegroundColor(Color::Yellow),
                Print(message),
                ResetColor
            )?;
        }

        self.stdout.flush()
    }
}

impl<W: Write> MazeUi for TerminalUi<W> {
    fn draw(&mut self, frame: &Frame) -> Result<(), UiError> {
        self.write_frame(frame)?;
        // A message stays up for one redraw.
        self.message = None;
        Ok(())
    }

    fn show_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    fn poll_command(&mut self) -> Result<Option<Command>, UiError> {
        let ready = event::poll(Duration::from_millis(50));
        self.next_command(ready, event::read)
    }
}

impl<W: Write> Drop for TerminalUi<W> {
    fn drop(&mut self) {
        if self.is_raw_mode_owner {
            // Only the instance that enabled raw mode may restore the terminal,
            // so tests never touch the test runner's terminal.
            execute!(self.stdout, Show, LeaveAlternateScreen).ok();
            terminal::disable_raw_mode().ok();
        }
    }
}
