//! trigger-ac-fault - set the Alignment Check flag, then load from an odd
//! address.
//!
//! This program intentionally performs a misaligned access to test that the
//! kernel delivers SIGBUS for #AC raised in user mode. Reaching the end of
//! `main` means alignment checking is not enforced on this machine.

use std::process::ExitCode;

use trigger_ac::{fixture, logger, FixtureError};

fn main() -> ExitCode {
    logger::init();

    // SAFETY: the misaligned load is the point of this program.
    match unsafe { fixture::probe() } {
        Ok(value) => {
            log::error!("{} (load returned {:#010x})", FixtureError::NotEnforced, value);
            ExitCode::FAILURE
        }
        Err(e) => {
            fixture::disarm();
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
