// src/kernels/neon.rs
use std::arch::aarch64::*;

use super::{scalar, KernelTable};
use crate::isa::Isa;

const REG: usize = 16;
const UNROLL: usize = 4;

pub(crate) const NEON: KernelTable = KernelTable {
    isa: Isa::Neon,
    w2: swap_neon::<2>,
    w4: swap_neon::<4>,
    w8: swap_neon::<8>,
};

#[inline(always)]
unsafe fn reverse_lanes<const W: usize>(v: uint8x16_t) -> uint8x16_t {
    // Resolved at monomorphization.
    match W {
        2 => vrev16q_u8(v),
        4 => vrev32q_u8(v),
        _ => vrev64q_u8(v),
    }
}

#[target_feature(enable = "neon")]
unsafe fn swap_neon<const W: usize>(bytes: &mut [u8]) {
    let mut rows = bytes.chunks_exact_mut(UNROLL * REG);
    for row in &mut rows {
        let ptr = row.as_mut_ptr();
        for i in 0..UNROLL {
            let p = ptr.add(i * REG);
            vst1q_u8(p, reverse_lanes::<W>(vld1q_u8(p)));
        }
    }

    let mut blocks = rows.into_remainder().chunks_exact_mut(REG);
    for block in &mut blocks {
        let p = block.as_mut_ptr();
        vst1q_u8(p, reverse_lanes::<W>(vld1q_u8(p)));
    }

    scalar::swap_width(W, blocks.into_remainder());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neon_matches_scalar() {
        if !std::arch::is_aarch64_feature_detected!("neon") {
            return;
        }

        let backing: Vec<u8> = (0..400u32).map(|i| (i * 13 + 1) as u8).collect();
        for (width, kernel) in [(2usize, NEON.w2), (4, NEON.w4), (8, NEON.w8)] {
            for offset in 0..17 {
                for count in 0..((320 / width) + 3) {
                    let end = offset + count * width;
                    let mut expected = backing.clone();
                    scalar::swap_width(width, &mut expected[offset..end]);

                    let mut actual = backing.clone();
                    unsafe { kernel(&mut actual[offset..end]) };
                    assert_eq!(actual, expected, "width {} offset {} count {}", width, offset, count);
                }
            }
        }
    }
}
