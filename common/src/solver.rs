use std::collections::VecDeque;

use log::{trace, warn};
use strum::IntoEnumIterator;

use crate::{
    direction::Direction,
    error::MazeError,
    maze::{Coord, Maze},
};

/// Finds a shortest path from `start` to `end`, both included, by breadth-first
/// search. An empty path means `end` can't be reached from `start`.
pub fn solve(maze: &Maze, start: Coord, end: Coord) -> Result<Vec<Coord>, MazeError> {
    let start_index = checked_index(maze, start)?;
    checked_index(maze, end)?;

    let cell_count = maze.cols() * maze.rows();
    let mut visited = vec![false; cell_count];
    let mut prev: Vec<Option<Coord>> = vec![None; cell_count];
    let mut queue = VecDeque::new();

    visited[start_index] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        trace!("visiting cell {}", current);

        if current == end {
            return Ok(reconstruct_path(maze, &prev, end));
        }

        for direction in Direction::iter() {
            if !maze.is_open(current, direction) {
                continue;
            }
            let Some(next) = maze.neighbor(current, direction) else {
                continue;
            };
            let Some(i) = maze.index(next) else {
                continue;
            };
            if visited[i] {
                continue;
            }
            visited[i] = true;
            prev[i] = Some(current);
            queue.push_back(next);
        }
    }

    warn!("no path from {} to {}", start, end);
    Ok(Vec::new())
}

fn checked_index(maze: &Maze, coord: Coord) -> Result<usize, MazeError> {
    maze.index(coord).ok_or(MazeError::OutOfBounds {
        x: coord.x,
        y: coord.y,
        cols: maze.cols(),
        rows: maze.rows(),
    })
}

fn reconstruct_path(maze: &Maze, prev: &[Option<Coord>], end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut current = end;

    while let Some(p) = maze.index(current).and_then(|i| prev[i]) {
        path.push(p);
        current = p;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn assert_is_walkable(maze: &Maze, path: &[Coord]) {
        for pair in path.windows(2) {
            let step = Direction::iter()
                .find(|&d| maze.neighbor(pair[0], d) == Some(pair[1]))
                .unwrap_or_else(|| panic!("{} and {} aren't adjacent", pair[0], pair[1]));
            assert!(
                maze.is_open(pair[0], step),
                "path walks through the wall between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_two_by_one_solves_in_one_step() {
        let maze = Maze::generate(2, 1, StdRng::seed_from_u64(3)).unwrap();
        let path = solve(&maze, Coord::new(0, 0), Coord::new(1, 0)).unwrap();
        assert_eq!(path, vec![Coord::new(0, 0), Coord::new(1, 0)]);
    }

    #[test]
    fn test_start_equal_to_end_is_a_single_cell_path() {
        let maze = Maze::generate(5, 5, StdRng::seed_from_u64(3)).unwrap();
        let start = Coord::new(2, 3);
        assert_eq!(solve(&maze, start, start).unwrap(), vec![start]);
    }

    #[test]
    fn test_every_pair_of_cells_is_connected() {
        for seed in 0..8 {
            let maze = Maze::generate(4, 3, StdRng::seed_from_u64(seed)).unwrap();
            for a in maze.cells() {
                for b in maze.cells() {
                    let path = solve(&maze, a.coord, b.coord).unwrap();
                    assert!(!path.is_empty(), "no path from {} to {}", a.coord, b.coord);
                    assert_eq!(path.first(), Some(&a.coord));
                    assert_eq!(path.last(), Some(&b.coord));
                    assert_is_walkable(&maze, &path);
                }
            }
        }
    }

    #[test]
    fn test_walled_grid_has_no_path() {
        let maze = Maze::walled(3, 3).unwrap();
        let path = solve(&maze, maze.start(), maze.end()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_takes_the_shorter_of_two_routes() {
        // A 3x2 ring: the top row is fully open, the bottom row too, joined at
        // both ends. From (0,0) to (2,0) the top route is two steps, the
        // bottom route four.
        let mut maze = Maze::walled(3, 2).unwrap();
        maze.remove_wall(Coord::new(0, 0), Direction::Right);
        maze.remove_wall(Coord::new(1, 0), Direction::Right);
        maze.remove_wall(Coord::new(0, 1), Direction::Right);
        maze.remove_wall(Coord::new(1, 1), Direction::Right);
        maze.remove_wall(Coord::new(0, 0), Direction::Bottom);
        maze.remove_wall(Coord::new(2, 0), Direction::Bottom);

        let path = solve(&maze, Coord::new(0, 0), Coord::new(2, 0)).unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_out_of_bounds_endpoints_are_rejected() {
        let maze = Maze::walled(2, 2).unwrap();
        assert_eq!(
            solve(&maze, Coord::new(2, 0), Coord::new(0, 0)),
            Err(MazeError::OutOfBounds {
                x: 2,
                y: 0,
                cols: 2,
                rows: 2
            })
        );
        assert!(solve(&maze, Coord::new(0, 0), Coord::new(0, 9)).is_err());
    }
}
