//! Binary entrypoint for the `task-export` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is normal; anything it sets feeds ExportConfig.
    let _ = dotenvy::dotenv();
    task_export::logging::init();

    match task_export::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
