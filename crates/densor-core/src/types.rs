//! Core type definitions for densor tensors.
//!
//! This module defines the small vocabulary shared by the rest of the crate:
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - The [`Scalar`] bound every element type satisfies
//! - Shape helpers ([`shape_len`], [`contiguous_strides`])
//!
//! # Examples
//!
//! ```
//! use densor_core::{shape_len, Tensor};
//!
//! let tensor = Tensor::<f64>::new(&[2, 3, 4]);
//! assert_eq!(tensor.num_elements(), shape_len(&[2, 3, 4]));
//! assert_eq!(shape_len(&[]), 1);
//! ```

use num_traits::Num;
use smallvec::SmallVec;

/// Type alias for tensor axis index.
///
/// Zero-indexed (0 is the first, slowest-varying axis).
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
///
/// # Examples
///
/// ```
/// use densor_core::{Rank, Tensor};
///
/// let matrix = Tensor::<f64>::new(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Tensors with up to 6 dimensions keep their extents inline.
pub type Shape = SmallVec<[usize; 6]>;

/// Element types a [`Tensor`](crate::Tensor) can hold.
///
/// Any `Copy` arithmetic scalar: the signed and unsigned integers and the
/// floating point types. `T::zero()` is the fill value of zero-initialised
/// tensors.
pub trait Scalar: Copy + Num + PartialOrd {}

impl<T> Scalar for T where T: Copy + Num + PartialOrd {}

/// Number of elements described by `shape`.
///
/// The product over an empty shape is 1, so a rank-0 shape describes a
/// single scalar.
///
/// # Examples
///
/// ```
/// use densor_core::shape_len;
///
/// assert_eq!(shape_len(&[2, 3]), 6);
/// assert_eq!(shape_len(&[4, 0]), 0);
/// assert_eq!(shape_len(&[]), 1);
/// ```
pub fn shape_len(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major (C-order) strides for `shape`, in elements.
///
/// For shape `[2, 3, 4]` the strides are `[12, 4, 1]`: the last axis is
/// contiguous.
///
/// # Examples
///
/// ```
/// use densor_core::contiguous_strides;
///
/// assert_eq!(contiguous_strides(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
/// assert!(contiguous_strides(&[]).is_empty());
/// ```
pub fn contiguous_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = SmallVec::from_elem(0, shape.len());
    let mut multiplier = 1;
    for axis in (0..shape.len()).rev() {
        strides[axis] = multiplier;
        multiplier *= shape[axis];
    }
    strides
}
