//! # bswap-rs
//!
//! In-place byte-order reversal for buffers of 16, 32 and 64-bit elements.
//!
//! ## Features
//!
//! - 🚀 **SIMD**: SSSE3, AVX2 and (opt-in) AVX-512BW on x86_64, NEON on aarch64
//! - 🎯 **Runtime dispatch**: the host is probed once, the fastest family wins
//! - ✅ **Exact span**: unaligned starts and partial registers are handled
//!   without touching a byte outside the view
//! - 📦 **Zero allocation**: everything happens in the caller's buffer
//!
//! ## Quick Start
//!
//! ```rust
//! use bswap::*;
//!
//! fn main() -> Result<()> {
//!     let mut samples: Vec<u16> = vec![0x04D2, 0x0709];
//!     swap(&mut samples)?;
//!     assert_eq!(samples, [0xD204, 0x0907]);
//!
//!     // Part of a larger buffer, starting at an odd offset
//!     let mut frame = [0u8, 0x12, 0x34, 0x56, 0x78, 0xFF];
//!     let mut view = TypedView::new(&mut frame, 1, 4, 1)?;
//!     swap(&mut view)?;
//!     assert_eq!(frame, [0, 0x78, 0x56, 0x34, 0x12, 0xFF]);
//!
//!     println!("using {}", selected_isa());
//!     Ok(())
//! }
//! ```
//!
//! ## Choosing kernels
//!
//! ```rust
//! use bswap::{native, scalar, Bswap, Isa};
//!
//! let mut a = vec![1u64, 2, 3];
//! let mut b = a.clone();
//!
//! scalar().swap_slice(&mut a);
//! if let Some(fast) = native() {
//!     fast.swap_slice(&mut b);
//! } else {
//!     Bswap::scalar().swap_slice(&mut b);
//! }
//! assert_eq!(a, b);
//!
//! for isa in Isa::ALL {
//!     println!("{}: {}", isa, isa.is_available());
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod view;
pub mod isa;
pub mod kernels;
pub mod dispatch;

// Re-export commonly used types at the crate root for convenience
pub use error::{BswapError, Result};

pub use types::{Element, ElementWidth};

pub use view::{AsTypedView, TypedView};

pub use isa::{Isa, KernelProvider, Unavailable};

pub use kernels::KernelTable;

pub use dispatch::{
    Bswap,
    native,
    scalar,
    selected_isa,
    swap,
    swap_any,
    swap_bytes,
    swap_slice,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use bswap::prelude::*;
    //! ```

    pub use crate::error::{BswapError, Result};
    pub use crate::types::{Element, ElementWidth};
    pub use crate::view::{AsTypedView, TypedView};
    pub use crate::isa::Isa;
    pub use crate::dispatch::{swap, swap_slice, Bswap};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_scenario_bytes() {
        let original = [0x04u8, 0xD2, 0x07, 0x09, 0x0B, 0x3F, 0x51, 0x0C];

        let mut bytes = original;
        swap_bytes(&mut bytes[..4], 2).unwrap();
        assert_eq!(&bytes[..4], &[0xD2, 0x04, 0x09, 0x07]);

        let mut bytes = original;
        swap_bytes(&mut bytes[..4], 4).unwrap();
        assert_eq!(&bytes[..4], &[0x09, 0x07, 0xD2, 0x04]);

        let mut bytes = original;
        swap_bytes(&mut bytes, 8).unwrap();
        assert_eq!(bytes, [0x0C, 0x51, 0x3F, 0x0B, 0x09, 0x07, 0xD2, 0x04]);
    }

    #[test]
    fn test_prelude_exports() {
        use crate::prelude::*;

        let mut data = [0x0102u16];
        swap(&mut data).unwrap();
        assert_eq!(data, [0x0201]);
        assert_eq!(ElementWidth::try_from(2).unwrap(), u16::WIDTH);
    }
}
