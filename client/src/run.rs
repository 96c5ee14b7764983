use log::{debug, info};
use rand::Rng;

use crate::{
    render,
    ui::{MazeUi, UiError},
};
use common::{Command, Game, MazeError, MoveOutcome};

pub const WIN_MESSAGE: &str = "Congratulations! You've solved the maze!";
pub const NO_PATH_MESSAGE: &str = "No path found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies one command to the game, reporting anything noteworthy through `ui`.
pub fn apply<R: Rng>(
    game: &mut Game<R>,
    command: Command,
    ui: &mut dyn MazeUi,
) -> Result<Flow, MazeError> {
    match command {
        Command::Move(direction) => {
            if let MoveOutcome::Escaped { .. } = game.try_move(direction) {
                ui.show_message(WIN_MESSAGE);
            }
        }
        Command::RevealSolution => {
            if game.reveal_solution()?.is_empty() {
                ui.show_message(NO_PATH_MESSAGE);
            }
        }
        Command::SetDifficulty(difficulty) => game.set_difficulty(difficulty)?,
        Command::NewMaze => game.regenerate()?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

pub fn main_loop<R: Rng>(game: &mut Game<R>, ui: &mut dyn MazeUi) -> anyhow::Result<()> {
    ui.draw(&render::frame(game))?;

    loop {
        let command = match ui.poll_command() {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(UiError::Disconnected) => {
                info!("input disconnected");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        debug!("command {:?}", command);
        if apply(game, command, ui)? == Flow::Quit {
            break;
        }
        ui.draw(&render::frame(game))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_helpers::MockUi;
    use common::{Coord, Difficulty, Direction, Maze};

    fn corridor_game() -> Game {
        let mut maze = Maze::walled(2, 1).unwrap();
        maze.remove_wall(Coord::new(0, 0), Direction::Right);
        Game::from_maze(maze, Difficulty::Easy, StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_escaping_shows_win_message() {
        let mut game = corridor_game();
        let mut ui = MockUi::new();

        let flow = apply(&mut game, Command::Move(Direction::Right), &mut ui).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(ui.messages, vec![WIN_MESSAGE.to_string()]);
    }

    #[test]
    fn test_blocked_move_is_silent() {
        let mut game = corridor_game();
        let mut ui = MockUi::new();

        apply(&mut game, Command::Move(Direction::Top), &mut ui).unwrap();

        assert!(ui.messages.is_empty());
        assert_eq!(game.player(), Coord::new(0, 0));
    }

    #[test]
    fn test_unsolvable_maze_reports_no_path() {
        let maze = Maze::walled(2, 2).unwrap();
        let mut game = Game::from_maze(maze, Difficulty::Easy, StdRng::seed_from_u64(0));
        let mut ui = MockUi::new();

        apply(&mut game, Command::RevealSolution, &mut ui).unwrap();

        assert_eq!(ui.messages, vec![NO_PATH_MESSAGE.to_string()]);
    }

    #[test]
    fn test_main_loop_draws_after_each_command_and_quits() {
        let mut game = Game::from_seed(Difficulty::Easy, Some(3)).unwrap();
        let mut ui = MockUi::with_commands([
            Ok(Some(Command::RevealSolution)),
            Ok(None),
            Ok(Some(Command::SetDifficulty(Difficulty::Medium))),
            Ok(Some(Command::Quit)),
            Ok(Some(Command::NewMaze)),
        ]);

        main_loop(&mut game, &mut ui).unwrap();

        assert_eq!(ui.frames.len(), 3);
        assert_eq!(ui.frames[0].width(), 21);
        assert!(ui.frames[1].tiles.iter().flatten().any(|&t| t == render::Tile::Path));
        assert_eq!(ui.frames[2].width(), 41);
        assert_eq!(ui.commands.len(), 1, "commands after quit are left unread");
    }

    #[test]
    fn test_main_loop_stops_when_input_disconnects() {
        let mut game = corridor_game();
        let mut ui = MockUi::with_commands([
            Ok(Some(Command::Move(Direction::Right))),
            Err(UiError::Disconnected),
        ]);

        main_loop(&mut game, &mut ui).unwrap();

        assert!(game.is_won());
        assert_eq!(ui.frames.len(), 2);
    }
}
