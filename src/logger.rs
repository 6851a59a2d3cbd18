//! Diagnostic logging.
//!
//! Records go to stderr so the fixture's stdout stays byte-exact. The filter
//! comes from `RUST_LOG` and defaults to `warn`, which keeps a normal run
//! silent.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use env_logger::{Builder, Env, Target};

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .try_init();
}

#[cfg(test)]
fn is_initialized() -> bool {
    LOGGER_INITIALIZED.load(Ordering::Relaxed)
}
