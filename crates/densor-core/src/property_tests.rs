//! Property-based tests for the tensor container
//!
//! This module uses proptest to check sizing, offset arithmetic, index
//! validation, value semantics and the text format across random shapes.

#[cfg(test)]
mod tests {
    use crate::{io, Tensor, TensorError};
    use proptest::prelude::*;

    // Shapes of rank 0-4 with small extents, zero included
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0usize..5, 0..=4)
    }

    // Non-degenerate shapes together with one valid index into them
    fn shape_and_index() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        prop::collection::vec(1usize..6, 1..=4).prop_flat_map(|shape| {
            let index: Vec<_> = shape.iter().map(|&extent| 0..extent).collect();
            (Just(shape), index)
        })
    }

    fn reference_offset(shape: &[usize], index: &[usize]) -> usize {
        let mut offset = 0;
        for (axis, &i) in index.iter().enumerate() {
            let stride: usize = shape[axis + 1..].iter().product();
            offset += i * stride;
        }
        offset
    }

    #[test]
    fn test_proptest_smoke() {
        let tensor = Tensor::<f64>::new(&[2, 3]);
        assert_eq!(tensor.shape(), &[2, 3]);
    }

    proptest! {
        #[test]
        fn prop_num_elements_is_product(shape in shape_strategy()) {
            let tensor = Tensor::<f32>::new(&shape);
            let product: usize = shape.iter().product();
            prop_assert_eq!(tensor.num_elements(), product);
            prop_assert_eq!(tensor.as_slice().len(), product);
            prop_assert_eq!(tensor.rank(), shape.len());
        }

        #[test]
        fn prop_offset_matches_reference((shape, index) in shape_and_index()) {
            let n: usize = shape.iter().product();
            let tensor = Tensor::from_vec((0..n as u64).collect(), &shape).unwrap();
            let expected = reference_offset(&shape, &index);
            prop_assert_eq!(tensor.flat_index(&index).unwrap(), expected);
            prop_assert_eq!(*tensor.get(&index).unwrap(), expected as u64);
        }

        #[test]
        fn prop_wrong_arity_fails(shape in shape_strategy(), extra in 1usize..3) {
            let tensor = Tensor::<i32>::new(&shape);
            let longer = vec![0; shape.len() + extra];
            let is_arity = matches!(tensor.get(&longer), Err(TensorError::IndexArity { .. }));
            prop_assert!(is_arity);
            if !shape.is_empty() {
                let shorter = vec![0; shape.len() - 1];
                let is_arity = matches!(tensor.get(&shorter), Err(TensorError::IndexArity { .. }));
                prop_assert!(is_arity);
            }
        }

        #[test]
        fn prop_out_of_bounds_fails(
            (shape, index) in shape_and_index(),
            axis_seed in any::<usize>(),
            overshoot in 0usize..3,
        ) {
            let tensor = Tensor::<i32>::new(&shape);
            let axis = axis_seed % shape.len();
            let mut bad = index.clone();
            bad[axis] = shape[axis] + overshoot;
            match tensor.get(&bad) {
                Err(TensorError::IndexOutOfBounds { axis: reported, .. }) => {
                    prop_assert_eq!(reported, axis);
                }
                other => prop_assert!(false, "expected bounds error, got {:?}", other),
            }
        }

        #[test]
        fn prop_clone_is_independent((shape, index) in shape_and_index(), value in 1i64..1000) {
            let a = Tensor::<i64>::new(&shape);
            let mut b = a.clone();
            b.set(&index, value).unwrap();
            prop_assert_eq!(*a.get(&index).unwrap(), 0);
            prop_assert_eq!(*b.get(&index).unwrap(), value);
        }

        #[test]
        fn prop_take_moves_everything(shape in shape_strategy(), fill in any::<i16>()) {
            let mut a = Tensor::from_elem(&shape, fill);
            let snapshot = a.clone();
            let b = a.take();
            prop_assert_eq!(&b, &snapshot);
            prop_assert_eq!(a.num_elements(), 0);
            prop_assert_eq!(a.rank(), 0);
        }

        #[test]
        fn prop_text_round_trip(shape in prop::collection::vec(1usize..4, 0..=3), seed in any::<i32>()) {
            let n: usize = shape.iter().product();
            let data: Vec<i32> = (0..n as i32).map(|i| seed.wrapping_add(i)).collect();
            let tensor = Tensor::from_vec(data, &shape).unwrap();

            let mut buffer = Vec::new();
            io::write_tensor_to(&tensor, &mut buffer).unwrap();
            let config = io::TextIoConfig::default().strict(true);
            let back: Tensor<i32> = io::read_tensor_from_with_config(buffer.as_slice(), &config).unwrap();
            prop_assert_eq!(back, tensor);
        }
    }
}
