// src/isa.rs
//! Host instruction-set detection.
//!
//! Each kernel family sits behind a [`KernelProvider`]. Detection walks the
//! providers from fastest to slowest and keeps the first whose probe
//! succeeds, falling back to scalar. A probe that fails is recorded as an
//! [`Unavailable`] reason and logged; it is never returned to the caller.
//!
//! The outcome is computed once per process and only read afterwards.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use crate::kernels::{self, KernelTable};

/// A family of byte-swap kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isa {
    Scalar,
    Ssse3,
    Avx2,
    Avx512,
    Neon,
}

impl Isa {
    pub const ALL: [Isa; 5] = [Isa::Scalar, Isa::Ssse3, Isa::Avx2, Isa::Avx512, Isa::Neon];

    /// Label reported for introspection
    pub fn name(&self) -> &'static str {
        match self {
            Isa::Scalar => "SCALAR",
            Isa::Ssse3 => "SSSE3",
            Isa::Avx2 => "AVX2",
            Isa::Avx512 => "AVX512",
            Isa::Neon => "NEON",
        }
    }

    /// Bytes processed per vector register, or `None` for scalar
    pub fn register_bytes(&self) -> Option<usize> {
        match self {
            Isa::Scalar => None,
            Isa::Ssse3 | Isa::Neon => Some(16),
            Isa::Avx2 => Some(32),
            Isa::Avx512 => Some(64),
        }
    }

    /// Whether this family is compiled in and supported by the host CPU
    pub fn is_available(&self) -> bool {
        provider(*self).probe().is_ok()
    }
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown instruction set: {0}")]
pub struct ParseIsaError(String);

impl FromStr for Isa {
    type Err = ParseIsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Isa::ALL
            .into_iter()
            .find(|isa| isa.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseIsaError(s.to_string()))
    }
}

/// Why a kernel family cannot be used in this process
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("{0} kernels are not compiled into this build")]
    NotCompiled(Isa),

    #[error("host CPU does not report {feature} required by {isa}")]
    MissingFeature { isa: Isa, feature: &'static str },
}

/// Source of one kernel family.
pub trait KernelProvider: Sync {
    fn isa(&self) -> Isa;

    /// Check the build and the host, returning the family's kernels if both
    /// support it.
    fn probe(&self) -> Result<KernelTable, Unavailable>;
}

pub struct ScalarProvider;
pub struct Ssse3Provider;
pub struct Avx2Provider;
pub struct Avx512Provider;
pub struct NeonProvider;

impl KernelProvider for ScalarProvider {
    fn isa(&self) -> Isa {
        Isa::Scalar
    }

    fn probe(&self) -> Result<KernelTable, Unavailable> {
        Ok(kernels::SCALAR)
    }
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
fn require_x86(isa: Isa, feature: &'static str, detected: bool, table: KernelTable) -> Result<KernelTable, Unavailable> {
    if detected {
        Ok(table)
    } else {
        Err(Unavailable::MissingFeature { isa, feature })
    }
}

impl KernelProvider for Ssse3Provider {
    fn isa(&self) -> Isa {
        Isa::Ssse3
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        require_x86(Isa::Ssse3, "ssse3", is_x86_feature_detected!("ssse3"), kernels::x86::SSSE3)
    }

    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        Err(Unavailable::NotCompiled(Isa::Ssse3))
    }
}

impl KernelProvider for Avx2Provider {
    fn isa(&self) -> Isa {
        Isa::Avx2
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        require_x86(Isa::Avx2, "avx2", is_x86_feature_detected!("avx2"), kernels::x86::AVX2)
    }

    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        Err(Unavailable::NotCompiled(Isa::Avx2))
    }
}

impl KernelProvider for Avx512Provider {
    fn isa(&self) -> Isa {
        Isa::Avx512
    }

    #[cfg(all(feature = "avx512", target_arch = "x86_64"))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        if !is_x86_feature_detected!("avx512f") {
            return Err(Unavailable::MissingFeature { isa: Isa::Avx512, feature: "avx512f" });
        }
        require_x86(Isa::Avx512, "avx512bw", is_x86_feature_detected!("avx512bw"), kernels::x86::AVX512)
    }

    #[cfg(not(all(feature = "avx512", target_arch = "x86_64")))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        Err(Unavailable::NotCompiled(Isa::Avx512))
    }
}

impl KernelProvider for NeonProvider {
    fn isa(&self) -> Isa {
        Isa::Neon
    }

    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        if std::arch::is_aarch64_feature_detected!("neon") {
            Ok(kernels::neon::NEON)
        } else {
            Err(Unavailable::MissingFeature { isa: Isa::Neon, feature: "neon" })
        }
    }

    #[cfg(not(all(feature = "simd", target_arch = "aarch64")))]
    fn probe(&self) -> Result<KernelTable, Unavailable> {
        Err(Unavailable::NotCompiled(Isa::Neon))
    }
}

/// Accelerated providers, fastest first.
const CANDIDATES: &[&dyn KernelProvider] = &[&Avx512Provider, &Avx2Provider, &Ssse3Provider, &NeonProvider];

/// The provider for a given family
pub fn provider(isa: Isa) -> &'static dyn KernelProvider {
    match isa {
        Isa::Scalar => &ScalarProvider,
        Isa::Ssse3 => &Ssse3Provider,
        Isa::Avx2 => &Avx2Provider,
        Isa::Avx512 => &Avx512Provider,
        Isa::Neon => &NeonProvider,
    }
}

/// Pick the first family in `candidates` whose probe succeeds, or scalar.
pub fn detect_from(candidates: &[&dyn KernelProvider]) -> KernelTable {
    for candidate in candidates {
        match candidate.probe() {
            Ok(table) => {
                debug!(isa = %table.isa(), "selected byte swap kernels");
                return table;
            }
            Err(reason) => debug!(isa = %candidate.isa(), %reason, "kernel family unavailable"),
        }
    }
    debug!(isa = %Isa::Scalar, "no accelerated kernels, using scalar");
    kernels::SCALAR
}

/// Probe the host without memoizing the result
pub fn detect() -> KernelTable {
    detect_from(CANDIDATES)
}

static SELECTED: OnceLock<KernelTable> = OnceLock::new();

/// The process-wide kernel table, probed on first use
pub(crate) fn selected() -> &'static KernelTable {
    SELECTED.get_or_init(detect)
}

/// The kernel family every call to [`crate::swap`] uses in this process
pub fn selected_isa() -> Isa {
    selected().isa()
}
