// src/types.rs
use bytemuck::Pod;
use crate::error::{BswapError, Result};

/// Width in bytes of one element of a typed view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ElementWidth {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl ElementWidth {
    /// Number of bytes in one element
    pub fn bytes(&self) -> usize {
        *self as usize
    }

    pub fn from_bytes(value: usize) -> Option<Self> {
        match value {
            1 => Some(ElementWidth::One),
            2 => Some(ElementWidth::Two),
            4 => Some(ElementWidth::Four),
            8 => Some(ElementWidth::Eight),
            _ => None,
        }
    }

    /// Get the name of the width as a string
    pub fn name(&self) -> &'static str {
        match self {
            ElementWidth::One => "8-bit",
            ElementWidth::Two => "16-bit",
            ElementWidth::Four => "32-bit",
            ElementWidth::Eight => "64-bit",
        }
    }
}

impl TryFrom<usize> for ElementWidth {
    type Error = BswapError;

    fn try_from(value: usize) -> Result<Self> {
        ElementWidth::from_bytes(value).ok_or(BswapError::InvalidWidth(value))
    }
}

impl std::fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Plain numeric types whose slices can be byte-swapped in place.
///
/// Sealed: the width of every implementor is one of the four supported
/// [`ElementWidth`]s and its bit patterns are all valid after a swap.
pub trait Element: Pod + sealed::Sealed {
    const WIDTH: ElementWidth;
}

macro_rules! impl_element {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Element for $ty {
                const WIDTH: ElementWidth = ElementWidth::$width;
            }
        )*
    };
}

impl_element! {
    u8 => One,
    i8 => One,
    u16 => Two,
    i16 => Two,
    u32 => Four,
    i32 => Four,
    f32 => Four,
    u64 => Eight,
    i64 => Eight,
    f64 => Eight,
}
