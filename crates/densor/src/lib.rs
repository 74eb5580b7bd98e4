//! # densor - Dense Fixed-Rank Tensors
//!
//! Storage, indexing and text I/O for dense multi-dimensional arrays.
//!
//! This is the **meta crate** that re-exports the densor components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use densor::prelude::*;
//!
//! let mut tensor = Tensor::<f64>::new(&[2, 3]);
//! tensor[&[1, 2]] = 6.0;
//! assert_eq!(tensor.num_elements(), 6);
//!
//! let mut buffer = Vec::new();
//! write_tensor_to(&tensor, &mut buffer)?;
//! let back: Tensor<f64> = read_tensor_from(buffer.as_slice())?;
//! assert_eq!(back, tensor);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core ([`core`])
//!
//! The [`Tensor`](core::Tensor) container, its error type and the text file
//! format in [`core::io`].
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for tensors
//! - `tracing`: Subscriber setup through `core::tracing_support::init_tracing`

#![deny(warnings)]

pub use densor_core as core;

pub mod prelude {
    //! Convenient re-exports of commonly used types and functions
    //!
    //! ```
    //! use densor::prelude::*;
    //! ```

    pub use crate::core::io::{
        read_tensor, read_tensor_from, write_tensor, write_tensor_to, TextIoConfig, WriteSummary,
    };
    pub use crate::core::{ErrorKind, Shape, Tensor, TensorError, TensorResult};
}
