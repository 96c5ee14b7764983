pub mod algorithms;

use log::debug;
use rand::prelude::{IndexedRandom, Rng};
use strum::IntoEnumIterator;

use super::{Coord, Maze};
use crate::{direction::Direction, error::MazeError};
use algorithms::backtrack::Backtrack;

/// Owns a maze while it is being carved, together with the random source that
/// drives every choice.
pub struct MazeMaker<R: Rng> {
    pub maze: Maze,
    pub rng: R,
}

impl<R: Rng> MazeMaker<R> {
    pub fn new(cols: usize, rows: usize, rng: R) -> Result<Self, MazeError> {
        let maze = Maze::walled(cols, rows)?;
        let mut maker = MazeMaker { maze, rng };
        maker.backtrack();

        debug!(
            "carved {}x{} maze with {} passages",
            cols,
            rows,
            maker.maze.open_passages()
        );

        Ok(maker)
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    fn get_unvisited_neighbors(&self, cell: Coord) -> Vec<(Coord, Direction)> {
        let mut valid_neighbors = Vec::new();

        for direction in Direction::iter() {
            let Some(neighbor) = self.maze.neighbor(cell, direction) else {
                continue;
            };

            if !self.is_visited(neighbor) {
                valid_neighbors.push((neighbor, direction));
            }
        }

        valid_neighbors
    }

    fn pick_unvisited_neighbor(&mut self, cell: Coord) -> Option<(Coord, Direction)> {
        let neighbors = self.get_unvisited_neighbors(cell);

        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Coord) {
        if let Some(cell) = self.maze.cell_mut(cell) {
            cell.visited = true;
        }
    }

    fn is_visited(&self, cell: Coord) -> bool {
        self.maze.cell(cell).is_some_and(|cell| cell.visited)
    }

    fn remove_wall_between(&mut self, cell: Coord, direction: Direction) {
        let removed = self.maze.remove_wall(cell, direction);
        debug_assert!(removed, "carved towards a neighbor outside the maze");
    }
}
