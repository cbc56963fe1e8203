// src/kernels/mod.rs
//! Byte-reversal kernels and the table that binds one kernel family to
//! each element width.
//!
//! ```text
//! Family   Register   Requirement          Platform
//! ───────  ─────────  ───────────────────  ────────
//! AVX512   64 bytes   AVX-512BW, `avx512`  x86_64
//! AVX2     32 bytes   AVX2                 x86_64
//! SSSE3    16 bytes   SSSE3                x86_64
//! NEON     16 bytes   NEON                 aarch64
//! SCALAR   -          none                 any
//! ```
//!
//! Vector kernels load and store unaligned, run four registers per
//! iteration while they can, then single registers, and hand the remaining
//! bytes to [`scalar`]. They never touch a byte past the end of their input.

pub mod scalar;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub(crate) mod x86;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub(crate) mod neon;

use crate::isa::Isa;
use crate::types::ElementWidth;

/// A kernel reverses every `width`-byte element of its input in place. The
/// input length must be a multiple of the kernel's width.
///
/// # Safety
///
/// Vector kernels require the CPU features of their family. Only
/// [`KernelTable`]s produced by a successful probe may hold them.
pub(crate) type KernelFn = unsafe fn(&mut [u8]);

/// The kernels of one instruction-set family, one per multi-byte width.
#[derive(Clone, Copy)]
pub struct KernelTable {
    pub(crate) isa: Isa,
    pub(crate) w2: KernelFn,
    pub(crate) w4: KernelFn,
    pub(crate) w8: KernelFn,
}

impl KernelTable {
    pub fn isa(&self) -> Isa {
        self.isa
    }

    /// Run the kernel for `width` over `bytes`; width 1 is a no-op.
    #[inline]
    pub(crate) fn run(&self, width: ElementWidth, bytes: &mut [u8]) {
        debug_assert_eq!(bytes.len() % width.bytes(), 0);
        let kernel = match width {
            ElementWidth::One => return,
            ElementWidth::Two => self.w2,
            ElementWidth::Four => self.w4,
            ElementWidth::Eight => self.w8,
        };
        // SAFETY: tables holding vector kernels are only handed out by a
        // provider whose probe confirmed the host supports the family.
        unsafe { kernel(bytes) }
    }
}

impl std::fmt::Debug for KernelTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelTable").field("isa", &self.isa).finish()
    }
}

pub(crate) const SCALAR: KernelTable = KernelTable {
    isa: Isa::Scalar,
    w2: scalar::swap16,
    w4: scalar::swap32,
    w8: scalar::swap64,
};

/// `pshufb` control mask reversing every `width`-byte lane of a 16-byte
/// register.
#[allow(dead_code)]
pub(crate) const fn lane_mask(width: usize) -> [u8; 16] {
    let mut mask = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        let lane = i / width * width;
        mask[i] = (lane + width - 1 - i % width) as u8;
        i += 1;
    }
    mask
}
