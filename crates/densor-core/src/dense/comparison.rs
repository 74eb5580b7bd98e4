//! Tensor equality
//!
//! Two notions are provided:
//!
//! - `==` ([`PartialEq`]): same shape and same elements in flat order
//! - [`Tensor::flat_eq`]: same element count and same elements in flat
//!   order, ignoring shape
//!
//! A `[4]` tensor and a `[2, 2]` tensor with identical contents are
//! `flat_eq` but not `==`.

use super::types::Tensor;

impl<T: PartialEq> Tensor<T> {
    /// Compare element counts, then elements in flat order
    ///
    /// Shapes are not compared.
    ///
    /// # Examples
    ///
    /// ```
    /// use densor_core::Tensor;
    ///
    /// let square = Tensor::from_elem(&[2, 2], 5);
    /// let flat = Tensor::from_elem(&[4], 5);
    ///
    /// assert!(square.flat_eq(&flat));
    /// assert_ne!(square, flat);
    /// ```
    pub fn flat_eq(&self, other: &Self) -> bool {
        if self.num_elements != other.num_elements {
            return false;
        }
        self.data.iter().zip(other.data.iter()).all(|(a, b)| a == b)
    }
}

impl<T: PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.flat_eq(other)
    }
}

impl<T: Eq> Eq for Tensor<T> {}
