//! # Pilecap CLI Application
//!
//! Interactive terminal calculator: asks for the foundation load and the
//! pile and soil parameters, then prints the single pile capacity and the
//! number of piles required.
//!
//! Log output goes to stderr and is controlled with `RUST_LOG`
//! (default `warn`).

mod report;
mod session;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use session::SessionError;

/// Shown for any response that is not a number.
const INVALID_NUMBER_MESSAGE: &str = "Please enter valid numerical values.";

/// Run one session and report its outcome, returning the process exit status.
fn execute<R: BufRead, W: Write, E: Write>(input: &mut R, output: &mut W, errors: &mut E) -> u8 {
    match session::run(input, output) {
        Ok(result) => {
            info!(
                "{} piles at {:.2} kN each",
                result.piles_required, result.pile.total_capacity_kn
            );
            0
        }
        Err(SessionError::InputFormat { field, raw }) => {
            info!("rejected {:?} for {}", raw, field);
            match writeln!(output, "{}", INVALID_NUMBER_MESSAGE) {
                Ok(()) => 0,
                Err(_) => 1,
            }
        }
        Err(SessionError::Calc(e)) => {
            error!("calculation rejected: {}", e.error_code());
            let _ = writeln!(errors, "Error: {}", e);
            1
        }
        Err(e) => {
            let _ = writeln!(errors, "Error: {}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = execute(&mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(status)
}
