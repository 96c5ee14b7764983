use crate::{difficulty::Difficulty, direction::Direction};

/// What the player asked for, independent of the key that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    RevealSolution,
    SetDifficulty(Difficulty),
    NewMaze,
    Quit,
}
