//! trigger-ac - x86 Alignment Check fixture
//!
//! Sets the Alignment Check flag (EFLAGS.AC, bit 18) of the running thread so
//! that an external harness (debugger, signal handler, emulator, kernel under
//! test) can observe #AC / SIGBUS delivery.
//!
//! Two binaries are built from this crate:
//!
//! - `trigger-ac` arms the flag and prints `Hello world!` followed by a blank
//!   line. It performs no misaligned access of its own, so it normally exits 0.
//! - `trigger-ac-fault` arms the flag and performs one misaligned 32-bit load.
//!   It is expected to die from SIGBUS.

pub mod error;
pub mod fixture;
pub mod logger;
pub mod safety;

pub use error::{FixtureError, FixtureResult};
pub use fixture::GREETING;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use safety::ALIGNMENT_CHECK;
