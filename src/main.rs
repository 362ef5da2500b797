use clap::Parser;

use planar_overlay::cli::{self, Cli};
use planar_overlay::error::Error;

fn main() -> std::process::ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match cli::run(cli) {
        Ok(()) => std::process::ExitCode::from(0),
        Err(Error::Io(e)) => {
            eprintln!("configuration error: {e}");
            std::process::ExitCode::from(1)
        }
        Err(Error::Parse(msg)) => {
            eprintln!("configuration error: {msg}");
            std::process::ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::ExitCode::from(2)
        }
    }
}
