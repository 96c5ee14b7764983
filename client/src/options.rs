//! Command-line options.
//! `--difficulty {level}` or `-d`, `--seed {n}` or `-s`, `--print` or `-p`.

use std::str::FromStr;

use clap::{Arg, ArgAction, Command, value_parser};

use common::Difficulty;

fn make_options_parser() -> Command {
    Command::new("maze")
        .about("Find your way through a randomly carved maze")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("difficulty")
                .short('d')
                .long("difficulty")
                .help("Maze size: easy (10x10), medium (20x20) or hard (30x30)")
                .default_value("easy")
                .value_parser(["easy", "medium", "hard"]),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("N")
                .help("Seed for the maze generator, for reproducible mazes")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .help("Print the maze and its solution, then exit")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub print: bool,
}

impl Options {
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;

        let difficulty = matches
            .get_one::<String>("difficulty")
            .and_then(|name| Difficulty::from_str(name).ok())
            .unwrap_or_default();
        let seed = matches.get_one::<u64>("seed").copied();
        let print = matches.get_flag("print");

        Ok(Options {
            difficulty,
            seed,
            print,
        })
    }
}
