//! # densor-core
//!
//! Dense, fixed-rank, multi-dimensional tensor container.
//!
//! This crate covers storage, indexing and I/O only; it performs no
//! arithmetic on tensors.
//!
//! - **Dense tensor** ([`Tensor`]) owning a contiguous row-major buffer
//! - **Checked multi-index access** with distinct arity and bounds errors
//! - **Value semantics**: deep [`Clone`], and [`Tensor::take`] for an
//!   explicit move that leaves the source empty
//! - **Text file format** ([`io`]) readable back into a tensor
//! - **Pretty printing** through [`std::fmt::Display`]
//!
//! ## Quick Start
//!
//! ```
//! use densor_core::Tensor;
//!
//! let mut tensor = Tensor::<f64>::new(&[2, 3]);
//! assert_eq!(tensor.rank(), 2);
//! assert_eq!(tensor.num_elements(), 6);
//!
//! tensor[&[1, 2]] = 4.5;
//! assert_eq!(tensor.get(&[1, 2]).unwrap(), &4.5);
//! assert!(tensor.get(&[2, 0]).is_err());
//! ```
//!
//! ## Memory Layout
//!
//! Elements are stored C-contiguous: the last axis varies fastest. The
//! element at `[i, j]` of a `[2, 3]` tensor lives at offset `i * 3 + j`.
//!
//! ## Creating Tensors
//!
//! ```
//! use densor_core::Tensor;
//!
//! // Single zero, rank 0
//! let scalar = Tensor::<i32>::default();
//! assert_eq!(scalar.num_elements(), 1);
//!
//! // Zeros
//! let zeros = Tensor::<f64>::new(&[2, 3]);
//!
//! // Fill with value
//! let fives = Tensor::from_elem(&[2, 3], 5.0);
//!
//! // From vec (row-major order)
//! let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! ```
//!
//! ## Copy and Move
//!
//! ```
//! use densor_core::Tensor;
//!
//! let mut a = Tensor::from_elem(&[2, 2], 1);
//! let mut b = a.clone();
//! b[&[0, 0]] = 9;
//! assert_eq!(a[&[0, 0]], 1);
//!
//! let c = a.take();
//! assert_eq!(c.num_elements(), 4);
//! assert_eq!(a.num_elements(), 0);
//! ```
//!
//! ## Printing
//!
//! ```
//! use densor_core::Tensor;
//!
//! let tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! assert_eq!(
//!     tensor.to_string(),
//!     "Tensor Shape: [2, 2]\nTensor Elements:\n[[1, 2], [3, 4]]"
//! );
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`TensorResult`]. Index errors are
//! [`ErrorKind::OutOfRange`]; file open failures are [`ErrorKind::Open`].
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//! - `tracing`: Enable [`tracing_support::init_tracing`]

#![deny(warnings)]

pub mod dense;
pub mod error;
pub mod io;
pub mod tracing_support;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use dense::{render_elements, Tensor};
pub use error::{ErrorKind, TensorError, TensorResult};
pub use types::{contiguous_strides, shape_len, Axis, Rank, Scalar, Shape};
