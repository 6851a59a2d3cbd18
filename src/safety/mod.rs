//! Architecture-specific unsafe operations.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use x86::{alignment_check_enabled, clear_alignment_check, set_alignment_check, ALIGNMENT_CHECK};
