// src/view.rs
use crate::error::{BswapError, Result};
use crate::types::{Element, ElementWidth};

/// A mutable, non-owning descriptor over `len` elements of `width` bytes,
/// starting `byte_offset` bytes into a larger backing buffer.
///
/// The view only ever exposes the declared span, so nothing that operates
/// on it can reach bytes on either side, even when the backing buffer is
/// shared with other views.
///
/// # Example
///
/// ```
/// use bswap::TypedView;
///
/// let mut backing = [0u8, 0x12, 0x34, 0x56, 0x78, 0];
/// let mut view = TypedView::new(&mut backing, 1, 2, 2).unwrap();
/// bswap::swap(&mut view).unwrap();
///
/// assert_eq!(backing, [0, 0x34, 0x12, 0x78, 0x56, 0]);
/// ```
#[derive(Debug)]
pub struct TypedView<'a> {
    bytes: &'a mut [u8],
    byte_offset: usize,
    width: ElementWidth,
    len: usize,
}

impl<'a> TypedView<'a> {
    /// Create a view over part of `backing`
    ///
    /// # Arguments
    ///
    /// * `backing` - The buffer the view points into
    /// * `byte_offset` - Start of the view, in bytes, from the start of `backing`
    /// * `width` - Element width in bytes; must be 1, 2, 4 or 8
    /// * `len` - Number of elements in the view
    ///
    /// # Errors
    ///
    /// [`BswapError::InvalidWidth`] for an unsupported width, and
    /// [`BswapError::TypeArgument`] when the span does not fit in `backing`.
    pub fn new(backing: &'a mut [u8], byte_offset: usize, width: usize, len: usize) -> Result<Self> {
        let width = ElementWidth::try_from(width)?;
        let backing_len = backing.len();

        let end = len
            .checked_mul(width.bytes())
            .and_then(|byte_len| byte_offset.checked_add(byte_len))
            .filter(|&end| end <= backing_len)
            .ok_or_else(|| {
                BswapError::TypeArgument(format!(
                    "{} {} elements at byte offset {} do not fit in a {} byte buffer",
                    len, width, byte_offset, backing_len
                ))
            })?;

        Ok(TypedView {
            bytes: &mut backing[byte_offset..end],
            byte_offset,
            width,
            len,
        })
    }

    /// View a whole slice of numeric elements
    pub fn from_slice<T: Element>(data: &'a mut [T]) -> Self {
        let len = data.len();
        TypedView {
            bytes: bytemuck::cast_slice_mut(data),
            byte_offset: 0,
            width: T::WIDTH,
            len,
        }
    }

    /// Create a view from a raw base pointer without bounds checking
    ///
    /// # Safety
    ///
    /// `base + byte_offset .. base + byte_offset + len * width` must lie inside
    /// a single live allocation that is valid for reads and writes, and no
    /// other reference may access those bytes for the lifetime `'a`.
    pub unsafe fn from_raw_parts(
        base: *mut u8,
        byte_offset: usize,
        width: ElementWidth,
        len: usize,
    ) -> Self {
        let bytes = std::slice::from_raw_parts_mut(base.add(byte_offset), len * width.bytes());
        TypedView {
            bytes,
            byte_offset,
            width,
            len,
        }
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn width(&self) -> ElementWidth {
        self.width
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes covered by the view
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// The bytes of the declared span
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Borrow this view again for a shorter lifetime
    pub fn reborrow(&mut self) -> TypedView<'_> {
        TypedView {
            bytes: &mut *self.bytes,
            byte_offset: self.byte_offset,
            width: self.width,
            len: self.len,
        }
    }

    pub(crate) fn span_mut(&mut self) -> &mut [u8] {
        self.bytes
    }
}

/// Anything a [`TypedView`] can be built over.
pub trait AsTypedView {
    fn as_typed_view(&mut self) -> Result<TypedView<'_>>;
}

impl<T: Element> AsTypedView for [T] {
    fn as_typed_view(&mut self) -> Result<TypedView<'_>> {
        Ok(TypedView::from_slice(self))
    }
}

impl<T: Element, const N: usize> AsTypedView for [T; N] {
    fn as_typed_view(&mut self) -> Result<TypedView<'_>> {
        Ok(TypedView::from_slice(self.as_mut_slice()))
    }
}

impl<T: Element> AsTypedView for Vec<T> {
    fn as_typed_view(&mut self) -> Result<TypedView<'_>> {
        Ok(TypedView::from_slice(self.as_mut_slice()))
    }
}

impl<'a> AsTypedView for TypedView<'a> {
    fn as_typed_view(&mut self) -> Result<TypedView<'_>> {
        Ok(self.reborrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_exposes_only_declared_span() {
        let mut backing: Vec<u8> = (0..32).collect();
        let view = TypedView::new(&mut backing, 3, 4, 5).unwrap();

        assert_eq!(view.byte_offset(), 3);
        assert_eq!(view.width(), ElementWidth::Four);
        assert_eq!(view.len(), 5);
        assert_eq!(view.byte_len(), 20);
        assert_eq!(view.as_bytes(), &(3..23).collect::<Vec<u8>>()[..]);
    }

    #[test]
    fn test_view_rejects_bad_width_before_span() {
        let mut backing = [0u8; 4];
        // Width is checked first even though the span would also overrun.
        let err = TypedView::new(&mut backing, 0, 3, 100).unwrap_err();
        assert_eq!(err, BswapError::InvalidWidth(3));
    }

    #[test]
    fn test_view_rejects_overrun() {
        let mut backing = [0u8; 16];
        assert!(TypedView::new(&mut backing, 0, 8, 2).is_ok());

        match TypedView::new(&mut backing, 1, 8, 2) {
            Err(BswapError::TypeArgument(msg)) => assert!(msg.contains("16 byte buffer")),
            other => panic!("Expected TypeArgument, got {:?}", other),
        }

        assert!(matches!(
            TypedView::new(&mut backing, usize::MAX, 2, 1),
            Err(BswapError::TypeArgument(_))
        ));
        assert!(matches!(
            TypedView::new(&mut backing, 0, 8, usize::MAX),
            Err(BswapError::TypeArgument(_))
        ));
    }

    #[test]
    fn test_empty_view_at_end_of_buffer() {
        let mut backing = [0u8; 8];
        let view = TypedView::new(&mut backing, 8, 2, 0).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.byte_len(), 0);
    }

    #[test]
    fn test_from_slice() {
        let mut data = [1u32, 2, 3];
        let view = TypedView::from_slice(&mut data);
        assert_eq!(view.width(), ElementWidth::Four);
        assert_eq!(view.len(), 3);
        assert_eq!(view.byte_len(), 12);
    }

    #[test]
    fn test_from_raw_parts() {
        let mut backing = [0u8; 12];
        let view = unsafe { TypedView::from_raw_parts(backing.as_mut_ptr(), 4, ElementWidth::Two, 4) };
        assert_eq!(view.byte_offset(), 4);
        assert_eq!(view.byte_len(), 8);
    }
}
