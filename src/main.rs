mod cli;
mod error;
mod model;
mod report;
mod runner;

use clap::Parser;
use error::{RunError, EXIT_FAILURE};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = cli::Cli::parse();

    match cli::run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("build-runner: {e:#}");
            // Launch failures keep their shell-style codes (127, 126); anything else is 1.
            let code = e
                .downcast_ref::<RunError>()
                .map(RunError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            std::process::exit(code);
        }
    }
}
