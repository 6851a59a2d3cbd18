//! x86 Alignment Check flag operations.
//!
//! EFLAGS.AC (bit 18) turns on alignment checking for data accesses made at
//! CPL 3, provided the kernel has set CR0.AM. Linux sets CR0.AM, so once a
//! user thread sets AC its next misaligned access raises #AC and the process
//! receives SIGBUS.

use core::arch::asm;

#[cfg(target_arch = "x86_64")]
use x86_64::registers::rflags::{self, RFlags};

/// Alignment Check flag mask in EFLAGS/RFLAGS.
pub const ALIGNMENT_CHECK: u64 = 0x40000;

// ============================================================================
// Flag Control
// ============================================================================

/// Set the AC flag of the current thread.
///
/// Pushes the flags register, ORs `0x40000` into the saved copy on the stack
/// and pops it back.
///
/// # Safety
/// Every misaligned data access made by this thread afterwards may fault,
/// including accesses inside library code the caller does not control.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub unsafe fn set_alignment_check() {
    asm!(
        "pushfq",
        "or dword ptr [rsp], 0x40000",
        "popfq",
    );
}

/// Set the AC flag of the current thread.
///
/// # Safety
/// See the x86-64 variant.
#[cfg(target_arch = "x86")]
#[inline(always)]
pub unsafe fn set_alignment_check() {
    asm!(
        "pushfd",
        "or dword ptr [esp], 0x40000",
        "popfd",
    );
}

/// Clear the AC flag of the current thread.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn clear_alignment_check() {
    let mut flags = rflags::read();
    flags.remove(RFlags::ALIGNMENT_CHECK);
    // SAFETY: clearing AC only relaxes alignment enforcement; every other
    // flag is written back unchanged.
    unsafe { rflags::write(flags) };
}

/// Clear the AC flag of the current thread.
#[cfg(target_arch = "x86")]
#[inline]
pub fn clear_alignment_check() {
    // SAFETY: clearing AC only relaxes alignment enforcement.
    unsafe {
        asm!(
            "pushfd",
            "and dword ptr [esp], 0xFFFBFFFF",
            "popfd",
        );
    }
}

// ============================================================================
// Flag Inspection
// ============================================================================

/// Raw value of the flags register.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn read_flags() -> u64 {
    rflags::read_raw()
}

/// Raw value of the flags register.
#[cfg(target_arch = "x86")]
#[inline]
pub fn read_flags() -> u64 {
    let flags: u32;
    // SAFETY: Reading flags is always safe
    unsafe {
        asm!(
            "pushfd",
            "pop {0}",
            out(reg) flags,
            options(nomem, preserves_flags)
        );
    }
    flags as u64
}

/// Check if alignment checking is enabled for the current thread.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn alignment_check_enabled() -> bool {
    rflags::read().contains(RFlags::ALIGNMENT_CHECK)
}

/// Check if alignment checking is enabled for the current thread.
#[cfg(target_arch = "x86")]
#[inline]
pub fn alignment_check_enabled() -> bool {
    (read_flags() & ALIGNMENT_CHECK) != 0
}

// ============================================================================
// Misaligned Access
// ============================================================================

/// Load a 32-bit value from `base + 1`.
///
/// The access is issued from assembly so no misaligned Rust reference is
/// ever formed.
///
/// # Safety
/// `base` must point to at least 5 readable bytes. If `base` is 4-byte
/// aligned and AC is set, this raises #AC.
#[inline(never)]
pub unsafe fn misaligned_load(base: *const u8) -> u32 {
    let value: u32;
    asm!(
        "mov {0:e}, dword ptr [{1} + 1]",
        out(reg) value,
        in(reg) base,
        options(nostack, readonly, preserves_flags)
    );
    value
}
