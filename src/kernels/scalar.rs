// src/kernels/scalar.rs
//! Portable reference kernels. Every vector kernel must produce exactly
//! what these produce, and they also process the tails the vector kernels
//! leave behind.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Reverse each 2-byte element of `bytes`
pub fn swap16(bytes: &mut [u8]) {
    for chunk in bytes.chunks_exact_mut(2) {
        let value = LittleEndian::read_u16(chunk);
        BigEndian::write_u16(chunk, value);
    }
}

/// Reverse each 4-byte element of `bytes`
pub fn swap32(bytes: &mut [u8]) {
    for chunk in bytes.chunks_exact_mut(4) {
        let value = LittleEndian::read_u32(chunk);
        BigEndian::write_u32(chunk, value);
    }
}

/// Reverse each 8-byte element of `bytes`
pub fn swap64(bytes: &mut [u8]) {
    for chunk in bytes.chunks_exact_mut(8) {
        let value = LittleEndian::read_u64(chunk);
        BigEndian::write_u64(chunk, value);
    }
}

/// Scalar kernel for a width known only as a number; width 1 and anything
/// unsupported leave `bytes` alone.
#[inline]
pub(crate) fn swap_width(width: usize, bytes: &mut [u8]) {
    match width {
        2 => swap16(bytes),
        4 => swap32(bytes),
        8 => swap64(bytes),
        _ => {}
    }
}
