//! Dense tensor type definition and basic operations
//!
//! This module defines the core `Tensor<T>` type and provides creation,
//! accessor and ownership methods. Indexing, comparison and display live in
//! sibling modules.

use crate::error::{TensorError, TensorResult};
use crate::types::{contiguous_strides, shape_len, Shape};
use num_traits::Num;

/// Dense N-dimensional tensor backed by an owned contiguous buffer
///
/// The buffer holds exactly [`num_elements`](Self::num_elements) values in
/// row-major order: the last axis varies fastest.
///
/// # Type Parameters
///
/// * `T` - The element type (any arithmetic scalar, typically `f32` or `f64`)
///
/// # Examples
///
/// ```
/// use densor_core::Tensor;
///
/// let mut tensor = Tensor::<f64>::new(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.num_elements(), 24);
///
/// *tensor.get_mut(&[1, 2, 3]).unwrap() = 7.0;
/// assert_eq!(tensor[&[1, 2, 3]], 7.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawTensor<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Tensor<T> {
    pub(crate) shape: Shape,
    /// Computed once at construction
    pub(crate) num_elements: usize,
    pub(crate) data: Vec<T>,
}

/// Unchecked wire form of a [`Tensor`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTensor<T> {
    shape: Shape,
    num_elements: usize,
    data: Vec<T>,
}

/// Accepts the moved-from state or a shape whose element count matches both
/// `num_elements` and the data length.
#[cfg(feature = "serde")]
impl<T> TryFrom<RawTensor<T>> for Tensor<T> {
    type Error = TensorError;

    fn try_from(raw: RawTensor<T>) -> TensorResult<Self> {
        let moved_from = raw.shape.is_empty() && raw.num_elements == 0 && raw.data.is_empty();
        if !moved_from {
            let expected = raw
                .shape
                .iter()
                .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
                .ok_or_else(|| TensorError::parse("shape", format!("{:?}", raw.shape)))?;
            if raw.num_elements != expected || raw.data.len() != expected {
                let got = if raw.num_elements != expected {
                    raw.num_elements
                } else {
                    raw.data.len()
                };
                return Err(TensorError::element_count(&raw.shape, expected, got));
            }
        }
        Ok(Self {
            shape: raw.shape,
            num_elements: raw.num_elements,
            data: raw.data,
        })
    }
}

/// Deep copy of shape and buffer.
///
/// `clone_from` is copy-assignment: it reuses the destination's allocation
/// when it is large enough.
impl<T: Clone> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            num_elements: self.num_elements,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.shape.clone_from(&source.shape);
        self.num_elements = source.num_elements;
        self.data.clone_from(&source.data);
    }
}

impl<T> Tensor<T>
where
    T: Copy + Num,
{
    /// Create a zero-filled tensor with the given shape
    ///
    /// An empty shape yields a single-element tensor: the product over no
    /// extents is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let tensor = Tensor::<i32>::new(&[2, 3]);
    /// assert_eq!(tensor.num_elements(), 6);
    /// assert!(tensor.iter().all(|&x| x == 0));
    ///
    /// let scalar = Tensor::<i32>::new(&[]);
    /// assert_eq!(scalar.rank(), 0);
    /// assert_eq!(scalar.num_elements(), 1);
    /// ```
    pub fn new(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor filled with zeros
    ///
    /// Alias of [`new`](Self::new).
    pub fn zeros(shape: &[usize]) -> Self {
        Self::new(shape)
    }

    /// Create a tensor with every element set to `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let tensor = Tensor::from_elem(&[2, 2], 5.0);
    /// assert_eq!(tensor[&[0, 0]], 5.0);
    /// assert_eq!(tensor[&[1, 1]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        let num_elements = shape_len(shape);
        Self {
            shape: Shape::from_slice(shape),
            num_elements,
            data: vec![value; num_elements],
        }
    }

    /// Create a tensor filled with a specific value
    ///
    /// This is an alias for `from_elem`.
    pub fn full(shape: &[usize], value: T) -> Self {
        Self::from_elem(shape, value)
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// [`TensorError::ElementCountMismatch`] if `vec.len()` differs from the
    /// product of `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(tensor[&[1, 0]], 4);
    ///
    /// assert!(Tensor::from_vec(vec![1, 2, 3], &[2, 2]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> TensorResult<Self> {
        let num_elements = shape_len(shape);
        if vec.len() != num_elements {
            return Err(TensorError::element_count(shape, num_elements, vec.len()));
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            num_elements,
            data: vec,
        })
    }
}

impl<T> Tensor<T> {
    /// Get the rank (number of dimensions) of this tensor
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Extent of a single axis, or `None` if `axis >= rank`
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.shape.get(axis).copied()
    }

    /// Total number of elements, as computed at construction
    ///
    /// Zero for a moved-from tensor.
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Get the total number of elements
    ///
    /// Same as [`num_elements`](Self::num_elements).
    pub fn len(&self) -> usize {
        self.num_elements
    }

    /// Check if the tensor holds no elements
    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Row-major strides of this tensor's shape, in elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::new(&[2, 3, 4]);
    /// assert_eq!(tensor.strides().as_slice(), &[12, 4, 1]);
    /// ```
    pub fn strides(&self) -> Shape {
        contiguous_strides(&self.shape)
    }

    /// The flat buffer in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the flat buffer in row-major order
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over elements in flat (row-major) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutably iterate over elements in flat (row-major) order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the tensor and return its flat buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Move the contents out, leaving `self` in the moved-from state
    ///
    /// The moved-from state has rank 0, zero elements and an empty buffer.
    /// It can be dropped, printed, compared or overwritten. Move-assignment
    /// is `*dst = src.take()`: the previous buffer of `dst` is released
    /// before `dst` takes ownership of the new one.
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let mut a = Tensor::from_elem(&[2, 3], 1.5);
    /// let b = a.take();
    ///
    /// assert_eq!(b.shape(), &[2, 3]);
    /// assert_eq!(b.num_elements(), 6);
    /// assert_eq!(a.num_elements(), 0);
    /// assert_eq!(a.rank(), 0);
    /// assert!(a.is_moved_from());
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::replace(
            self,
            Self {
                shape: Shape::new(),
                num_elements: 0,
                data: Vec::new(),
            },
        )
    }

    /// True if this tensor was emptied by [`take`](Self::take)
    pub fn is_moved_from(&self) -> bool {
        self.shape.is_empty() && self.num_elements == 0
    }
}
