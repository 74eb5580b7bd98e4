//! # Tensor - Trait Implementations
//!
//! ## Implemented Traits
//!
//! - `Index` / `IndexMut` over `&[usize]` multi-indices
//! - `Default`
//! - `IntoIterator` for `&Tensor` and `&mut Tensor`

use super::types::Tensor;
use num_traits::Num;

impl<T> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the out-of-range message if `index` is invalid. Use
    /// [`Tensor::get`] for a fallible lookup.
    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> std::ops::IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

/// A rank-0 tensor holding a single zero.
impl<T: Copy + Num> Default for Tensor<T> {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl<'a, T> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Tensor<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::Tensor;

    #[test]
    fn test_default_single_zero() {
        let tensor = Tensor::<i32>::default();
        assert_eq!(tensor.rank(), 0);
        assert_eq!(tensor.num_elements(), 1);
        assert_eq!(tensor[&[]], 0);
    }

    #[test]
    fn test_index_read_write() {
        let mut tensor = Tensor::<f64>::new(&[2, 3, 4]);
        tensor[&[0, 1, 2]] = 42.0;
        assert_eq!(tensor[&[0, 1, 2]], 42.0);

        let idx: Vec<usize> = vec![1, 2, 3];
        tensor[idx.as_slice()] = -1.0;
        assert_eq!(tensor.as_slice()[23], -1.0);
    }

    #[test]
    #[should_panic(expected = "Mismatched number of indices")]
    fn test_index_wrong_arity_panics() {
        let tensor = Tensor::<f64>::new(&[2, 3]);
        let _value = tensor[&[0]];
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let mut tensor = Tensor::<f64>::new(&[2, 3]);
        tensor[&[2, 0]] = 1.0;
    }

    #[test]
    fn test_iterate_by_reference() {
        let mut tensor = Tensor::from_vec(vec![1, 2, 3], &[3]).unwrap();
        for value in &mut tensor {
            *value *= 10;
        }
        let collected: Vec<i32> = (&tensor).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20, 30]);
    }
}
