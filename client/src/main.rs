use std::process::ExitCode;

use client::{options::Options, run_client};

fn main() -> ExitCode {
    if std::env::var("MAZE_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let options = match Options::parse_from_args(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };
    log::debug!("options: {:?}", options);

    match run_client(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
