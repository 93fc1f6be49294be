use clap::Parser;
use paramgen::cli::{self, Args};
use paramgen::core::error::GenerateError;
use paramgen::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match logging::init(&args) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "generate failed");
            match err.downcast_ref::<GenerateError>() {
                // Messages already include the underlying cause.
                Some(generate_err) => {
                    eprintln!("error: {generate_err}");
                    ExitCode::from(generate_err.exit_code())
                }
                None => {
                    eprintln!("error: {err:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
