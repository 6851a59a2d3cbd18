//! trigger-ac - set the Alignment Check flag, print a greeting, exit.
//!
//! Arguments are ignored. A failed write to stdout does not change the exit
//! status, and the flag stays set until the process exits.

use std::io;
use std::process::ExitCode;

use trigger_ac::{fixture, logger, FixtureError};

fn main() -> ExitCode {
    logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // SAFETY: running with AC set is the purpose of this program.
    match unsafe { fixture::run(&mut out) } {
        Ok(()) => ExitCode::SUCCESS,
        Err(FixtureError::Io(e)) => {
            log::debug!("greeting not written: {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            fixture::disarm();
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
