//! The alignment check fixture.
//!
//! `run` arms AC and then writes the greeting; nothing reaches the output
//! before the flag is set. `probe` arms AC and performs one misaligned load,
//! which should kill the process with SIGBUS.
//!
//! Once armed, any misaligned access in library code (allocator, formatting,
//! `memcpy`) may fault too, so nothing is logged between arming and the end
//! of the sequence.

use std::io::Write;

use crate::error::FixtureResult;

/// Text emitted by the fixture. The output routine appends its own newline,
/// so the bytes written are `Hello world!\n\n`.
pub const GREETING: &str = "Hello world!\n";

/// Set the Alignment Check flag for the calling thread.
///
/// # Safety
/// Afterwards any misaligned data access by this thread may raise SIGBUS.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub unsafe fn arm() -> FixtureResult<()> {
    log::debug!("arming alignment check, flags = {:#x}", crate::safety::x86::read_flags());
    crate::safety::set_alignment_check();
    Ok(())
}

/// Set the Alignment Check flag for the calling thread.
///
/// # Safety
/// Always fails on this target; marked unsafe to match the x86 signature.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub unsafe fn arm() -> FixtureResult<()> {
    Err(crate::error::FixtureError::UnsupportedArch(std::env::consts::ARCH))
}

/// Clear the Alignment Check flag for the calling thread. No-op off x86.
#[inline]
pub fn disarm() {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    crate::safety::clear_alignment_check();
}

/// Write the greeting to `out` and flush it.
pub fn greet<W: Write>(out: &mut W) -> FixtureResult<()> {
    writeln!(out, "{}", GREETING)?;
    out.flush()?;
    Ok(())
}

/// Arm, then greet.
///
/// # Safety
/// See [`arm`]. `out` is written with AC set.
pub unsafe fn run<W: Write>(out: &mut W) -> FixtureResult<()> {
    arm()?;
    greet(out)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[repr(C, align(8))]
struct ProbeBuffer([u8; 8]);

/// Arm, then load a `u32` from an odd address.
///
/// Returns only if the load completed, in which case the flag has been
/// cleared again and the loaded value is handed back.
///
/// # Safety
/// See [`arm`]. The expected outcome is process termination by SIGBUS.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub unsafe fn probe() -> FixtureResult<u32> {
    let buffer = ProbeBuffer([0, 1, 2, 3, 4, 5, 6, 7]);
    arm()?;
    let value = crate::safety::x86::misaligned_load(buffer.0.as_ptr());
    disarm();
    Ok(value)
}

/// Arm, then load a `u32` from an odd address.
///
/// # Safety
/// Always fails on this target.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub unsafe fn probe() -> FixtureResult<u32> {
    arm().map(|()| 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_greet_exact_bytes() {
        let mut out = Vec::new();
        greet(&mut out).unwrap();
        assert_eq!(out, b"Hello world!\n\n");
    }

    #[test]
    fn test_greet_ends_with_blank_line() {
        let mut out = Vec::new();
        greet(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Hello world!", ""]);
    }

    #[test]
    fn test_greet_is_repeatable() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        greet(&mut first).unwrap();
        greet(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_greet_propagates_write_error() {
        let err = greet(&mut BrokenPipe).unwrap_err();
        match err {
            FixtureError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn test_probe_buffer_is_aligned() {
        let buffer = ProbeBuffer([0; 8]);
        assert_eq!(buffer.0.as_ptr() as usize % 8, 0);
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    #[test]
    fn test_arm_unsupported() {
        let err = unsafe { arm() }.unwrap_err();
        assert!(matches!(err, FixtureError::UnsupportedArch(_)));
    }
}
