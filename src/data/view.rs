//! Read-only typed projections over a buffer.
//!
//! A [`TypedView`] borrows the buffer and decodes elements on demand, so it
//! can never disagree with the bytes it projects.

use crate::data::{DataBuffer, Primitive};
use std::marker::PhantomData;
use std::ops::Range;

/// The buffer seen as an array of `T` at stride `T::SIZE`.
///
/// Trailing bytes that do not fill a whole element are not part of the view.
#[derive(Debug, Clone, Copy)]
pub struct TypedView<'a, T: Primitive> {
    buffer: &'a DataBuffer,
    _marker: PhantomData<T>,
}

impl<'a, T: Primitive> TypedView<'a, T> {
    pub fn len(&self) -> usize {
        self.buffer.len() / T::SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        let offset = index.checked_mul(T::SIZE)?;
        self.buffer.read(offset as u64).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let view = *self;
        (0..view.len()).filter_map(move |i| view.get(i))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Elements in `range`, clamped to the view like a slice expression
    /// on a sequence would be.
    pub fn range(&self, range: Range<usize>) -> Vec<T> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        (start..end).filter_map(|i| self.get(i)).collect()
    }
}

impl DataBuffer {
    /// Project the buffer as an array of `T`.
    pub fn view<T: Primitive>(&self) -> TypedView<'_, T> {
        TypedView {
            buffer: self,
            _marker: PhantomData,
        }
    }
}
