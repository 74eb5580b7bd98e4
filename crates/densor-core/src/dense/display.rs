//! Human-readable rendering
//!
//! The layout is a header line with the shape followed by the elements as
//! nested bracketed groups, one level per axis:
//!
//! ```text
//! Tensor Shape: [2, 3]
//! Tensor Elements:
//! [[1, 2, 3], [4, 5, 6]]
//! ```
//!
//! This output is for people; use [`crate::io`] for a format that can be
//! read back.

use super::types::Tensor;
use crate::types::shape_len;
use std::fmt::{self, Display, Write};

/// Render a flat row-major buffer as nested bracketed groups
///
/// The innermost axis becomes a comma-separated list; every outer axis wraps
/// its sub-groups in another pair of brackets. A rank-0 shape renders the
/// single element bare. An axis with extent 0 renders as `[]`, as does a
/// buffer too short for the shape.
///
/// # Examples
///
/// ```
/// use densor_core::render_elements;
///
/// assert_eq!(render_elements(&[1, 2, 3, 4, 5, 6], &[2, 3]), "[[1, 2, 3], [4, 5, 6]]");
/// assert_eq!(render_elements(&[7], &[]), "7");
/// assert_eq!(render_elements::<i32>(&[], &[0]), "[]");
/// ```
pub fn render_elements<T: Display>(data: &[T], shape: &[usize]) -> String {
    let mut out = String::new();
    write_elements(&mut out, data, shape).ok();
    out
}

fn write_elements<T: Display, W: Write>(out: &mut W, data: &[T], shape: &[usize]) -> fmt::Result {
    if data.len() < shape_len(shape) {
        return out.write_str("[]");
    }
    write_group(out, data, shape)
}

fn write_group<T: Display, W: Write>(out: &mut W, data: &[T], shape: &[usize]) -> fmt::Result {
    let Some((&extent, inner)) = shape.split_first() else {
        return write!(out, "{}", data[0]);
    };
    let stride = shape_len(inner);
    out.write_char('[')?;
    for i in 0..extent {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_group(out, &data[i * stride..(i + 1) * stride], inner)?;
    }
    out.write_char(']')
}

impl<T: Display> Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tensor Shape: [")?;
        for (i, extent) in self.shape.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", extent)?;
        }
        f.write_str("]\nTensor Elements:\n")?;
        write_elements(f, &self.data, &self.shape)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("num_elements", &self.num_elements)
            .field("data", &self.data)
            .finish()
    }
}
