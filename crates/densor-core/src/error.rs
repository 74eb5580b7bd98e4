//! Error types for tensor access and text I/O
//!
//! Every fallible operation in densor-core returns a [`TensorResult`].
//!
//! # Design
//!
//! - **`TensorError`**: one enum covering element access, construction and I/O
//! - **`ErrorKind`**: coarse classification; the element access failures
//!   share [`ErrorKind::OutOfRange`] while their messages tell them apart
//!
//! # Examples
//!
//! ```
//! use densor_core::{ErrorKind, Tensor};
//!
//! let tensor = Tensor::<f64>::new(&[2, 3]);
//!
//! let err = tensor.get(&[0]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(err.to_string(), "Mismatched number of indices: expected 2, got 1");
//!
//! let err = tensor.get(&[0, 3]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(err.to_string(), "Index out of bounds: index 3 on axis 1 with extent 3");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all tensor operations
#[derive(Error, Debug)]
pub enum TensorError {
    /// Multi-index length differs from the tensor rank
    #[error("Mismatched number of indices: expected {expected}, got {got}")]
    IndexArity { expected: usize, got: usize },

    /// One component of a multi-index reaches past its axis extent
    #[error("Index out of bounds: index {index} on axis {axis} with extent {extent}")]
    IndexOutOfBounds {
        axis: usize,
        index: usize,
        extent: usize,
    },

    /// Element access on a moved-from tensor, which holds no element
    #[error("Tensor holds no elements")]
    EmptyTensor,

    /// Flat data does not fill the requested shape
    #[error("Shape {shape:?} requires {expected} elements, but got {got}")]
    ElementCountMismatch {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },

    /// A file could not be opened for reading or writing
    #[error("Error opening file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token in the text format could not be parsed
    #[error("Failed to parse {context}: {token:?}")]
    Parse { context: String, token: String },

    /// Read or write failure after the stream was opened
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`TensorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong index arity or an index past its extent
    OutOfRange,
    /// Flat data length does not match a shape
    Shape,
    /// File open failure
    Open,
    /// Malformed text input
    Parse,
    /// Other I/O failure
    Io,
}

/// Result type alias for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

impl TensorError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TensorError::IndexArity { .. }
            | TensorError::IndexOutOfBounds { .. }
            | TensorError::EmptyTensor => ErrorKind::OutOfRange,
            TensorError::ElementCountMismatch { .. } => ErrorKind::Shape,
            TensorError::Open { .. } => ErrorKind::Open,
            TensorError::Parse { .. } => ErrorKind::Parse,
            TensorError::Io(_) => ErrorKind::Io,
        }
    }

    /// True for every element access failure.
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }

    /// Create an open error for `path`
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TensorError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse(context: impl Into<String>, token: impl Into<String>) -> Self {
        TensorError::Parse {
            context: context.into(),
            token: token.into(),
        }
    }

    /// Create an element count mismatch error
    pub fn element_count(shape: &[usize], expected: usize, got: usize) -> Self {
        TensorError::ElementCountMismatch {
            shape: shape.to_vec(),
            expected,
            got,
        }
    }
}
