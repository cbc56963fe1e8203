// src/kernels/x86.rs
use std::arch::x86_64::*;

use super::{lane_mask, scalar, KernelTable};
use crate::isa::Isa;

/// Registers processed per iteration of the main loop.
const UNROLL: usize = 4;

pub(crate) const SSSE3: KernelTable = KernelTable {
    isa: Isa::Ssse3,
    w2: swap_ssse3::<2>,
    w4: swap_ssse3::<4>,
    w8: swap_ssse3::<8>,
};

pub(crate) const AVX2: KernelTable = KernelTable {
    isa: Isa::Avx2,
    w2: swap_avx2::<2>,
    w4: swap_avx2::<4>,
    w8: swap_avx2::<8>,
};

#[cfg(feature = "avx512")]
pub(crate) const AVX512: KernelTable = KernelTable {
    isa: Isa::Avx512,
    w2: swap_avx512::<2>,
    w4: swap_avx512::<4>,
    w8: swap_avx512::<8>,
};

#[target_feature(enable = "ssse3")]
unsafe fn swap_ssse3<const W: usize>(bytes: &mut [u8]) {
    const REG: usize = 16;
    let lanes = lane_mask(W);
    let mask = _mm_loadu_si128(lanes.as_ptr().cast());

    let mut rows = bytes.chunks_exact_mut(UNROLL * REG);
    for row in &mut rows {
        let ptr = row.as_mut_ptr().cast::<__m128i>();
        for i in 0..UNROLL {
            let v = _mm_loadu_si128(ptr.add(i));
            _mm_storeu_si128(ptr.add(i), _mm_shuffle_epi8(v, mask));
        }
    }

    let mut blocks = rows.into_remainder().chunks_exact_mut(REG);
    for block in &mut blocks {
        let ptr = block.as_mut_ptr().cast::<__m128i>();
        let v = _mm_loadu_si128(ptr);
        _mm_storeu_si128(ptr, _mm_shuffle_epi8(v, mask));
    }

    scalar::swap_width(W, blocks.into_remainder());
}

#[target_feature(enable = "avx2")]
unsafe fn swap_avx2<const W: usize>(bytes: &mut [u8]) {
    const REG: usize = 32;
    let lanes = lane_mask(W);
    let mask = _mm256_broadcastsi128_si256(_mm_loadu_si128(lanes.as_ptr().cast()));

    let mut rows = bytes.chunks_exact_mut(UNROLL * REG);
    for row in &mut rows {
        let ptr = row.as_mut_ptr().cast::<__m256i>();
        for i in 0..UNROLL {
            let v = _mm256_loadu_si256(ptr.add(i));
            _mm256_storeu_si256(ptr.add(i), _mm256_shuffle_epi8(v, mask));
        }
    }

    let mut blocks = rows.into_remainder().chunks_exact_mut(REG);
    for block in &mut blocks {
        let ptr = block.as_mut_ptr().cast::<__m256i>();
        let v = _mm256_loadu_si256(ptr);
        _mm256_storeu_si256(ptr, _mm256_shuffle_epi8(v, mask));
    }

    // Fewer than 32 bytes left; 16 of them may still fit a single xmm.
    let tail = blocks.into_remainder();
    swap_ssse3::<W>(tail);
}

#[cfg(feature = "avx512")]
#[target_feature(enable = "avx512f,avx512bw")]
unsafe fn swap_avx512<const W: usize>(bytes: &mut [u8]) {
    const REG: usize = 64;
    let lanes = lane_mask(W);
    let mask = _mm512_broadcast_i32x4(_mm_loadu_si128(lanes.as_ptr().cast()));

    let mut rows = bytes.chunks_exact_mut(UNROLL * REG);
    for row in &mut rows {
        let ptr = row.as_mut_ptr().cast::<__m512i>();
        for i in 0..UNROLL {
            let v = _mm512_loadu_si512(ptr.add(i));
            _mm512_storeu_si512(ptr.add(i), _mm512_shuffle_epi8(v, mask));
        }
    }

    let mut blocks = rows.into_remainder().chunks_exact_mut(REG);
    for block in &mut blocks {
        let ptr = block.as_mut_ptr().cast::<__m512i>();
        let v = _mm512_loadu_si512(ptr);
        _mm512_storeu_si512(ptr, _mm512_shuffle_epi8(v, mask));
    }

    swap_avx2::<W>(blocks.into_remainder());
}
