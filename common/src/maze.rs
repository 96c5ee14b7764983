pub mod maker;

use std::fmt;

use rand::Rng;
use strum::IntoEnumIterator;

use crate::{direction::Direction, error::MazeError};
use maker::MazeMaker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub walls: [bool; 4], // Indexed by `Direction::index`: top, right, bottom, left.
    pub visited: bool,    // Only meaningful while the maze is being carved.
}

impl Cell {
    fn walled(coord: Coord) -> Self {
        Self {
            coord,
            walls: [true; 4],
            visited: false,
        }
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }
}

/// A rectangular grid of cells stored in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Carves a perfect maze with the recursive backtracker, drawing every
    /// random choice from `rng`.
    pub fn generate<R: Rng>(cols: usize, rows: usize, rng: R) -> Result<Self, MazeError> {
        let maker = MazeMaker::new(cols, rows, rng)?;
        Ok(maker.into_maze())
    }

    /// A grid with every wall standing and nothing visited.
    pub fn walled(cols: usize, rows: usize) -> Result<Self, MazeError> {
        let cell_count = cols
            .checked_mul(rows)
            .filter(|&count| count > 0)
            .ok_or(MazeError::InvalidDimensions { cols, rows })?;

        let mut cells = Vec::with_capacity(cell_count);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(Cell::walled(Coord::new(x, y)));
            }
        }

        Ok(Self { cols, rows, cells })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Coord {
        Coord::new(0, 0)
    }

    pub fn end(&self) -> Coord {
        Coord::new(self.cols - 1, self.rows - 1)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    pub fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.cols + coord.x)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(self.index(coord)?)
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let i = self.index(coord)?;
        self.cells.get_mut(i)
    }

    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = coord.x.checked_add_signed(dx)?;
        let y = coord.y.checked_add_signed(dy)?;
        let neighbor = Coord::new(x, y);

        if self.contains(neighbor) {
            Some(neighbor)
        } else {
            None
        }
    }

    /// Whether a step from `coord` towards `direction` stays in the maze and
    /// crosses no wall. Only `coord`'s own side of the boundary is consulted.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        match (self.cell(coord), self.neighbor(coord, direction)) {
            (Some(cell), Some(_)) => !cell.has_wall(direction),
            _ => false,
        }
    }

    /// Removes the wall between `coord` and its neighbor in `direction` on both
    /// sides. Returns `false` without touching anything if there is no such
    /// neighbor.
    pub fn remove_wall(&mut self, coord: Coord, direction: Direction) -> bool {
        let Some(neighbor) = self.neighbor(coord, direction) else {
            return false;
        };

        if let Some(cell) = self.cell_mut(coord) {
            cell.walls[direction.index()] = false;
        }
        if let Some(cell) = self.cell_mut(neighbor) {
            cell.walls[direction.opposite().index()] = false;
        }

        true
    }

    /// Number of removed wall pairs, each counted once from its left or top
    /// cell.
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| self.is_open(cell.coord, d))
                    .count()
            })
            .sum()
    }

    /// The maze as a `(2 * rows + 1) x (2 * cols + 1)` block map, `true` where
    /// solid. Cell `(x, y)` sits at row `2y + 1`, column `2x + 1`.
    pub fn tiles(&self) -> Vec<Vec<bool>> {
        let width = 2 * self.cols + 1;
        let height = 2 * self.rows + 1;
        let mut tiles = vec![vec![true; width]; height];

        for cell in &self.cells {
            let row = 2 * cell.coord.y + 1;
            let col = 2 * cell.coord.x + 1;
            tiles[row][col] = false;

            for direction in Direction::iter() {
                if cell.has_wall(direction) {
                    continue;
                }
                let (dx, dy) = direction.delta();
                let wall_row = row.wrapping_add_signed(dy);
                let wall_col = col.wrapping_add_signed(dx);
                tiles[wall_row][wall_col] = false;
            }
        }

        tiles
    }

    pub fn log(&self) -> String {
        self.tiles()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&solid| if solid { "██" } else { "  " })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
