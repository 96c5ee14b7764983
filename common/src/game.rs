use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    difficulty::Difficulty,
    direction::Direction,
    error::MazeError,
    maze::{Coord, Maze},
    solver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved { to: Coord },
    Escaped { to: Coord },
}

/// One player's maze session: the current maze, where the player stands and
/// the revealed solution, if any.
pub struct Game<R: Rng = StdRng> {
    difficulty: Difficulty,
    maze: Maze,
    player: Coord,
    solution: Vec<Coord>,
    moves: u32,
    won: bool,
    rng: R,
}

impl Game<StdRng> {
    /// Seeds from the OS unless a seed is given.
    pub fn from_seed(difficulty: Difficulty, seed: Option<u64>) -> Result<Self, MazeError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(difficulty, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn new(difficulty: Difficulty, mut rng: R) -> Result<Self, MazeError> {
        let (cols, rows) = difficulty.dimensions();
        let maze = Maze::generate(cols, rows, &mut rng)?;
        Ok(Self::from_maze(maze, difficulty, rng))
    }

    /// Starts a session on an existing maze. `difficulty` only matters once
    /// the maze is regenerated.
    pub fn from_maze(maze: Maze, difficulty: Difficulty, rng: R) -> Self {
        let player = maze.start();
        Self {
            difficulty,
            maze,
            player,
            solution: Vec::new(),
            moves: 0,
            won: false,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Coord {
        self.player
    }

    pub fn solution(&self) -> &[Coord] {
        &self.solution
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), MazeError> {
        info!("difficulty set to {}", difficulty);
        self.difficulty = difficulty;
        self.regenerate()
    }

    /// Replaces the maze with a fresh one at the current difficulty and puts
    /// the player back on the start cell.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        let (cols, rows) = self.difficulty.dimensions();
        self.maze = Maze::generate(cols, rows, &mut self.rng)?;
        self.player = self.maze.start();
        self.solution.clear();
        self.moves = 0;
        self.won = false;
        Ok(())
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.maze.is_open(self.player, direction) {
            debug!("move {:?} from {} blocked", direction, self.player);
            return MoveOutcome::Blocked;
        }
        let Some(to) = self.maze.neighbor(self.player, direction) else {
            return MoveOutcome::Blocked;
        };

        self.player = to;
        self.moves += 1;

        if to == self.maze.end() {
            if !self.won {
                info!("maze escaped in {} moves", self.moves);
            }
            self.won = true;
            MoveOutcome::Escaped { to }
        } else {
            MoveOutcome::Moved { to }
        }
    }

    /// Solves from the start cell, not from the player.
    pub fn reveal_solution(&mut self) -> Result<&[Coord], MazeError> {
        self.solution = solver::solve(&self.maze, self.maze.start(), self.maze.end())?;
        debug!("solution is {} cells long", self.solution.len());
        Ok(&self.solution)
    }
}
