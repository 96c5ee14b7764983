use rand::Rng;

use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    fn backtrack(&mut self) {
        let initial_cell = self.maze.start();
        self.visit_cell(initial_cell);

        let mut stack = vec![initial_cell];

        while let Some(&curr) = stack.last() {
            match self.pick_unvisited_neighbor(curr) {
                Some((next, direction)) => {
                    self.visit_cell(next);
                    self.remove_wall_between(curr, direction);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}
