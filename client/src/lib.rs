pub mod options;
pub mod render;
pub mod run;
pub mod ui;

#[cfg(test)]
mod test_helpers;

use std::io::{self, Write};

use log::info;

use crate::options::Options;
use crate::ui::TerminalUi;
use common::Game;

pub fn run_client(options: &Options) -> anyhow::Result<()> {
    let mut game = Game::from_seed(options.difficulty, options.seed)?;
    info!(
        "starting {} maze (seed: {:?})",
        options.difficulty, options.seed
    );

    if options.print {
        return print_solved(&mut game, &mut io::stdout().lock());
    }

    let mut ui = TerminalUi::new()?;
    run::main_loop(&mut game, &mut ui)
}

/// Writes the maze with its solution drawn in, for use outside a terminal UI.
pub fn print_solved<R: rand::Rng>(game: &mut Game<R>, out: &mut dyn Write) -> anyhow::Result<()> {
    let steps = game.reveal_solution()?.len().saturating_sub(1);
    let frame = render::frame(game);

    writeln!(out, "{}", render::to_text(&frame))?;
    writeln!(
        out,
        "Difficulty: {}  Solution: {} steps",
        game.difficulty(),
        steps
    )?;
    Ok(())
}
