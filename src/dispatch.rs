// src/dispatch.rs
use std::any::Any;

use crate::error::{BswapError, Result};
use crate::isa::{self, Isa};
use crate::kernels::{self, KernelTable};
use crate::types::{Element, ElementWidth};
use crate::view::{AsTypedView, TypedView};

/// Handle to one resolved kernel family.
///
/// [`swap`] uses the family chosen for the process. [`native`],
/// [`scalar`] and [`Bswap::with_isa`] pin a family explicitly, mainly so
/// tests and benchmarks can compare them.
///
/// # Example
///
/// ```
/// let mut data = [0x1234u16, 0xABCD];
/// bswap::scalar().swap_slice(&mut data);
/// assert_eq!(data, [0x3412, 0xCDAB]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bswap {
    table: KernelTable,
}

impl Bswap {
    /// The family selected for this process
    pub fn detected() -> Self {
        Bswap { table: *isa::selected() }
    }

    /// The portable reference kernels
    pub fn scalar() -> Self {
        Bswap { table: kernels::SCALAR }
    }

    /// The selected family, unless that is scalar
    pub fn native() -> Option<Self> {
        let table = *isa::selected();
        if table.isa() == Isa::Scalar {
            None
        } else {
            Some(Bswap { table })
        }
    }

    /// A specific family, if this build and host support it
    pub fn with_isa(isa: Isa) -> Option<Self> {
        isa::provider(isa).probe().ok().map(|table| Bswap { table })
    }

    pub fn isa(&self) -> Isa {
        self.table.isa()
    }

    /// Reverse the byte order of every element of `value` in place
    ///
    /// # Errors
    ///
    /// Whatever building the view over `value` reports. Nothing is written
    /// when an error is returned.
    pub fn swap<V: AsTypedView + ?Sized>(&self, value: &mut V) -> Result<()> {
        let mut view = value.as_typed_view()?;
        self.swap_view(&mut view);
        Ok(())
    }

    pub fn swap_slice<T: Element>(&self, data: &mut [T]) {
        self.swap_view(&mut TypedView::from_slice(data));
    }

    /// Treat all of `bytes` as consecutive `width`-byte elements
    ///
    /// # Errors
    ///
    /// [`BswapError::InvalidWidth`] for an unsupported width and
    /// [`BswapError::TypeArgument`] if `bytes` is not a whole number of
    /// elements.
    pub fn swap_bytes(&self, bytes: &mut [u8], width: usize) -> Result<()> {
        let element = ElementWidth::try_from(width)?;
        if bytes.len() % element.bytes() != 0 {
            return Err(BswapError::TypeArgument(format!(
                "{} bytes is not a whole number of {} elements",
                bytes.len(),
                element
            )));
        }
        let len = bytes.len() / element.bytes();
        let mut view = TypedView::new(bytes, 0, width, len)?;
        self.swap_view(&mut view);
        Ok(())
    }

    /// Swap a dynamically typed value, accepting `Vec<T>` and `Box<[T]>`
    /// for any [`Element`] type
    ///
    /// # Errors
    ///
    /// [`BswapError::TypeArgument`] for anything else.
    pub fn swap_any(&self, value: &mut dyn Any) -> Result<()> {
        let swapped = self.swap_elements::<u8>(value)
            || self.swap_elements::<i8>(value)
            || self.swap_elements::<u16>(value)
            || self.swap_elements::<i16>(value)
            || self.swap_elements::<u32>(value)
            || self.swap_elements::<i32>(value)
            || self.swap_elements::<f32>(value)
            || self.swap_elements::<u64>(value)
            || self.swap_elements::<i64>(value)
            || self.swap_elements::<f64>(value);

        if swapped {
            Ok(())
        } else {
            Err(BswapError::TypeArgument("value is not a vector of numeric elements".into()))
        }
    }

    fn swap_elements<T: Element>(&self, value: &mut dyn Any) -> bool {
        match element_slice::<T>(value) {
            Some(data) => {
                self.swap_slice(data);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn swap_view(&self, view: &mut TypedView<'_>) {
        let width = view.width();
        if width == ElementWidth::One {
            return;
        }
        self.table.run(width, view.span_mut());
    }
}

fn element_slice<T: Element>(value: &mut dyn Any) -> Option<&mut [T]> {
    if value.is::<Vec<T>>() {
        return value.downcast_mut::<Vec<T>>().map(|v| v.as_mut_slice());
    }
    value.downcast_mut::<Box<[T]>>().map(|b| &mut **b)
}

/// Reverse the byte order of every element of `value` in place, using the
/// fastest kernels available in this process
///
/// Width-1 elements are left untouched.
///
/// # Example
///
/// ```
/// let mut data = vec![0x0102_0304u32, 0x0506_0708];
/// bswap::swap(&mut data).unwrap();
/// assert_eq!(data, [0x0403_0201, 0x0807_0605]);
/// ```
pub fn swap<V: AsTypedView + ?Sized>(value: &mut V) -> Result<()> {
    Bswap::detected().swap(value)
}

pub fn swap_slice<T: Element>(data: &mut [T]) {
    Bswap::detected().swap_slice(data)
}

pub fn swap_bytes(bytes: &mut [u8], width: usize) -> Result<()> {
    Bswap::detected().swap_bytes(bytes, width)
}

pub fn swap_any(value: &mut dyn Any) -> Result<()> {
    Bswap::detected().swap_any(value)
}

/// The accelerated kernels, or `None` when this process only has scalar
pub fn native() -> Option<Bswap> {
    Bswap::native()
}

pub fn scalar() -> Bswap {
    Bswap::scalar()
}

pub use crate::isa::selected_isa;
