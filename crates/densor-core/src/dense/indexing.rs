//! Multi-index validation and element access
//!
//! Every checked accessor validates the index before computing an offset:
//! first the arity against the rank, then each component against its extent.
//! Offsets are row-major with the last axis as the unit-stride axis, which
//! is also the element order of the text file format.

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};

impl<T> Tensor<T> {
    /// Validate a multi-index against this tensor's shape
    ///
    /// # Errors
    ///
    /// - [`TensorError::IndexArity`] if `index.len() != rank`
    /// - [`TensorError::IndexOutOfBounds`] for the first axis whose
    ///   component is `>=` its extent
    /// - [`TensorError::EmptyTensor`] for `[]` on a moved-from tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::{Tensor, TensorError};
    ///
    /// let tensor = Tensor::<f64>::new(&[2, 3]);
    /// assert!(tensor.check_indices(&[1, 2]).is_ok());
    /// assert!(matches!(
    ///     tensor.check_indices(&[1, 2, 0]),
    ///     Err(TensorError::IndexArity { expected: 2, got: 3 })
    /// ));
    /// assert!(matches!(
    ///     tensor.check_indices(&[2, 0]),
    ///     Err(TensorError::IndexOutOfBounds { axis: 0, index: 2, extent: 2 })
    /// ));
    /// ```
    pub fn check_indices(&self, index: &[usize]) -> TensorResult<()> {
        if index.len() != self.rank() {
            return Err(TensorError::IndexArity {
                expected: self.rank(),
                got: index.len(),
            });
        }
        if self.is_moved_from() {
            return Err(TensorError::EmptyTensor);
        }
        for (axis, (&idx, &extent)) in index.iter().zip(self.shape.iter()).enumerate() {
            if idx >= extent {
                return Err(TensorError::IndexOutOfBounds {
                    axis,
                    index: idx,
                    extent,
                });
            }
        }
        Ok(())
    }

    /// Flat buffer offset of a validated multi-index
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::new(&[2, 3]);
    /// assert_eq!(tensor.flat_index(&[0, 0]).unwrap(), 0);
    /// assert_eq!(tensor.flat_index(&[0, 2]).unwrap(), 2);
    /// assert_eq!(tensor.flat_index(&[1, 0]).unwrap(), 3);
    /// assert!(tensor.flat_index(&[1, 3]).is_err());
    /// ```
    pub fn flat_index(&self, index: &[usize]) -> TensorResult<usize> {
        self.check_indices(index)?;
        Ok(self.offset_unchecked(index))
    }

    fn offset_unchecked(&self, index: &[usize]) -> usize {
        let mut offset = 0;
        let mut multiplier = 1;
        for axis in (0..self.shape.len()).rev() {
            offset += index[axis] * multiplier;
            multiplier *= self.shape[axis];
        }
        offset
    }

    /// Get a reference to the element at `index`
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error on wrong arity or an index past its
    /// extent. A moved-from tensor rejects every index: its rank is 0 and it
    /// holds no element.
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]).unwrap(), &2);
    /// assert!(tensor.get(&[5, 5]).is_err());
    /// ```
    pub fn get(&self, index: &[usize]) -> TensorResult<&T> {
        let offset = self.flat_index(index)?;
        Ok(&self.data[offset])
    }

    /// Get a mutable reference to the element at `index`
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::new(&[2, 2]);
    /// *tensor.get_mut(&[1, 0]).unwrap() = 10.0;
    /// assert_eq!(tensor[&[1, 0]], 10.0);
    /// assert!(tensor.get_mut(&[0]).is_err());
    /// ```
    pub fn get_mut(&mut self, index: &[usize]) -> TensorResult<&mut T> {
        let offset = self.flat_index(index)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: &[usize], value: T) -> TensorResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}
