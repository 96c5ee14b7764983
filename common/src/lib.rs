pub mod difficulty;
pub mod direction;
pub mod error;
pub mod game;
pub mod input;
pub mod maze;
pub mod solver;

pub use difficulty::Difficulty;
pub use direction::Direction;
pub use error::MazeError;
pub use game::{Game, MoveOutcome};
pub use input::Command;
pub use maze::{Cell, Coord, Maze};
pub use solver::solve;
