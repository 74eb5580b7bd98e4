//! Whitespace-delimited text format for dense tensors
//!
//! # Format
//!
//! ```text
//! <rank>
//! <shape[0]>
//! ...
//! <shape[rank-1]>
//! <element_0> <element_1> ... <element_{N-1}>
//! ```
//!
//! - First line: the rank
//! - Next `rank` lines: one extent per line, axis 0 first
//! - Last line: all elements in row-major order, each followed by one space
//!
//! There is no trailing newline. A `[2, 3]` tensor holding `1..=6` is
//! written as `"2\n2\n3\n1 2 3 4 5 6 "`.
//!
//! # Examples
//!
//! ```rust
//! use densor_core::{io, Tensor};
//! use std::io::Cursor;
//!
//! let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
//!
//! let mut output = Vec::new();
//! io::write_tensor_to(&tensor, &mut output).unwrap();
//! assert_eq!(output, b"2\n2\n3\n1 2 3 4 5 6 ");
//!
//! let back: Tensor<i32> = io::read_tensor_from(Cursor::new(output)).unwrap();
//! assert_eq!(back, tensor);
//! ```

use crate::error::{TensorError, TensorResult};
use crate::types::Scalar;
use crate::Tensor;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::mem;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Text I/O configuration
#[derive(Debug, Clone)]
pub struct TextIoConfig {
    /// Require the data section to hold exactly `num_elements` values
    pub strict: bool,
    /// Capacity of the buffered reader/writer wrapping a file
    pub buffer_capacity: usize,
}

impl Default for TextIoConfig {
    fn default() -> Self {
        Self {
            strict: false,
            buffer_capacity: 8 * 1024,
        }
    }
}

impl TextIoConfig {
    /// Enable/disable strict element count validation
    ///
    /// When disabled, a short data section leaves the trailing elements at
    /// zero and surplus values are ignored.
    pub fn strict(mut self, enable: bool) -> Self {
        self.strict = enable;
        self
    }

    /// Set buffer capacity
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }
}

/// Outcome of a successful file write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Destination file
    pub path: PathBuf,
    /// Rank of the written tensor
    pub rank: usize,
    /// Number of elements in the data section
    pub num_elements: usize,
    /// Total bytes written
    pub bytes_written: u64,
}

struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.count += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Write a tensor to any writer
///
/// Returns the number of bytes written.
///
/// # Complexity
///
/// O(n) in the number of elements
pub fn write_tensor_to<T: Display>(tensor: &Tensor<T>, writer: impl Write) -> TensorResult<u64> {
    let mut writer = CountingWriter {
        inner: writer,
        count: 0,
    };

    writeln!(writer, "{}", tensor.rank())?;
    for extent in tensor.shape() {
        writeln!(writer, "{}", extent)?;
    }
    for value in tensor.iter() {
        write!(writer, "{} ", value)?;
    }
    writer.flush()?;

    Ok(writer.count)
}

/// Write a tensor to a file, creating or truncating it
///
/// # Errors
///
/// [`TensorError::Open`] if the file cannot be opened for writing, or
/// [`TensorError::Io`] if writing fails afterwards.
///
/// # Examples
///
/// ```rust
/// use densor_core::{io, Tensor};
///
/// let path = std::env::temp_dir().join("densor_doc_write.txt");
/// let tensor = Tensor::from_elem(&[2, 2], 1.5);
///
/// let summary = io::write_tensor(&tensor, &path).unwrap();
/// assert_eq!(summary.num_elements, 4);
///
/// let back: Tensor<f64> = io::read_tensor(&path).unwrap();
/// assert_eq!(back, tensor);
/// # std::fs::remove_file(&path).unwrap();
/// ```
pub fn write_tensor<T: Display>(
    tensor: &Tensor<T>,
    path: impl AsRef<Path>,
) -> TensorResult<WriteSummary> {
    write_tensor_with_config(tensor, path, &TextIoConfig::default())
}

/// Write a tensor to a file using an explicit configuration
pub fn write_tensor_with_config<T: Display>(
    tensor: &Tensor<T>,
    path: impl AsRef<Path>,
    config: &TextIoConfig,
) -> TensorResult<WriteSummary> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), shape = ?tensor.shape(), "writing tensor");

    let file = File::create(path).map_err(|e| TensorError::open(path, e))?;
    let writer = BufWriter::with_capacity(config.buffer_capacity, file);
    let bytes_written = write_tensor_to(tensor, writer)?;

    tracing::info!(
        path = %path.display(),
        rank = tensor.rank(),
        num_elements = tensor.num_elements(),
        bytes = bytes_written,
        "tensor written to file"
    );

    Ok(WriteSummary {
        path: path.to_path_buf(),
        rank: tensor.rank(),
        num_elements: tensor.num_elements(),
        bytes_written,
    })
}

/// Read a tensor from any reader using the default (lenient) configuration
///
/// # Examples
///
/// ```rust
/// use densor_core::io::read_tensor_from;
/// use densor_core::Tensor;
/// use std::io::Cursor;
///
/// let tensor: Tensor<f64> = read_tensor_from(Cursor::new("2\n2\n3\n1 2 3 4 5 6 ")).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3]);
/// assert_eq!(tensor[&[0, 2]], 3.0);
/// assert_eq!(tensor[&[1, 0]], 4.0);
/// ```
pub fn read_tensor_from<T>(reader: impl Read) -> TensorResult<Tensor<T>>
where
    T: Scalar + FromStr,
{
    read_tensor_from_with_config(reader, &TextIoConfig::default())
}

/// Read a tensor from any reader using an explicit configuration
///
/// # Errors
///
/// - [`TensorError::Parse`] for a missing or malformed rank or extent, an
///   unparsable element, or a shape whose element count overflows `usize`
///   or whose buffer would exceed `isize::MAX` bytes
/// - [`TensorError::ElementCountMismatch`] in strict mode when the data
///   section does not hold exactly `num_elements` values
/// - [`TensorError::Io`] if reading fails or the input is not UTF-8
pub fn read_tensor_from_with_config<T>(
    mut reader: impl Read,
    config: &TextIoConfig,
) -> TensorResult<Tensor<T>>
where
    T: Scalar + FromStr,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_ascii_whitespace();

    let rank: usize = parse_header_token(tokens.next(), "rank")?;
    let mut shape = Vec::with_capacity(rank.min(64));
    for axis in 0..rank {
        let context = format!("extent of axis {}", axis);
        shape.push(parse_header_token::<usize>(tokens.next(), &context)?);
    }
    let expected = shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .filter(|&count| {
            count
                .checked_mul(mem::size_of::<T>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| TensorError::parse("shape", format!("{:?}", shape)))?;

    // Grows with the tokens actually present, not with the header
    let mut data: Vec<T> = Vec::new();
    while data.len() < expected {
        let Some(token) = tokens.next() else {
            break;
        };
        let value = token
            .parse()
            .map_err(|_| TensorError::parse(format!("element {}", data.len()), token))?;
        data.push(value);
    }
    let read = data.len();
    let surplus = tokens.count();

    if config.strict && (read != expected || surplus > 0) {
        return Err(TensorError::element_count(&shape, expected, read + surplus));
    }
    if read < expected {
        tracing::warn!(
            expected,
            read,
            "data section is short; trailing elements left at zero"
        );
    } else if surplus > 0 {
        tracing::debug!(surplus, "ignoring values past the data section");
    }

    data.resize(expected, T::zero());
    Tensor::from_vec(data, &shape)
}

fn parse_header_token<N: FromStr>(token: Option<&str>, context: &str) -> TensorResult<N> {
    let token = token.ok_or_else(|| TensorError::parse(context, ""))?;
    token
        .parse()
        .map_err(|_| TensorError::parse(context, token))
}

/// Read a tensor from a file
///
/// # Errors
///
/// [`TensorError::Open`] if the file cannot be opened for reading; see
/// [`read_tensor_from_with_config`] for parse failures.
pub fn read_tensor<T>(path: impl AsRef<Path>) -> TensorResult<Tensor<T>>
where
    T: Scalar + FromStr,
{
    read_tensor_with_config(path, &TextIoConfig::default())
}

/// Read a tensor from a file using an explicit configuration
pub fn read_tensor_with_config<T>(
    path: impl AsRef<Path>,
    config: &TextIoConfig,
) -> TensorResult<Tensor<T>>
where
    T: Scalar + FromStr,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), strict = config.strict, "reading tensor");

    let file = File::open(path).map_err(|e| TensorError::open(path, e))?;
    let reader = BufReader::with_capacity(config.buffer_capacity, file);
    read_tensor_from_with_config(reader, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Cursor;

    #[test]
    fn test_config_defaults() {
        let config = TextIoConfig::default();
        assert!(!config.strict);
        assert_eq!(config.buffer_capacity, 8 * 1024);
    }

    #[test]
    fn test_config_builder() {
        let config = TextIoConfig::default().strict(true).buffer_capacity(0);
        assert!(config.strict);
        assert_eq!(config.buffer_capacity, 1);
    }

    #[test]
    fn test_write_exact_layout() {
        let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let mut output = Vec::new();
        let bytes = write_tensor_to(&tensor, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "2\n2\n3\n1 2 3 4 5 6 ");
        assert_eq!(bytes, 18);
    }

    #[test]
    fn test_write_default_tensor() {
        let mut output = Vec::new();
        write_tensor_to(&Tensor::<f64>::default(), &mut output).unwrap();
        assert_eq!(output, b"0\n0 ");
    }

    #[test]
    fn test_write_floats() {
        let tensor = Tensor::from_vec(vec![0.5, -1.25], &[2]).unwrap();
        let mut output = Vec::new();
        write_tensor_to(&tensor, &mut output).unwrap();
        assert_eq!(output, b"1\n2\n0.5 -1.25 ");
    }

    #[test]
    fn test_read_two_by_three_file() {
        let tensor: Tensor<i32> = read_tensor_from(Cursor::new("2\n2\n3\n1 2 3 4 5 6 ")).unwrap();
        assert_eq!(tensor.shape(), &[2, 3]);
        assert_eq!(tensor[&[0, 0]], 1);
        assert_eq!(tensor[&[0, 2]], 3);
        assert_eq!(tensor[&[1, 0]], 4);
        assert_eq!(tensor[&[1, 2]], 6);
    }

    #[test]
    fn test_read_tolerates_any_whitespace() {
        let tensor: Tensor<f32> = read_tensor_from(Cursor::new("1 3\t1.5\n2.5\r\n3.5")).unwrap();
        assert_eq!(tensor.as_slice(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_read_rank_zero() {
        let tensor: Tensor<i64> = read_tensor_from(Cursor::new("0\n42 ")).unwrap();
        assert_eq!(tensor.rank(), 0);
        assert_eq!(tensor[&[]], 42);
    }

    #[test]
    fn test_lenient_short_data_zero_fills() {
        let tensor: Tensor<i32> = read_tensor_from(Cursor::new("1\n4\n7 8 ")).unwrap();
        assert_eq!(tensor.as_slice(), &[7, 8, 0, 0]);
    }

    #[test]
    fn test_lenient_surplus_ignored() {
        let tensor: Tensor<i32> = read_tensor_from(Cursor::new("1\n2\n1 2 3 4")).unwrap();
        assert_eq!(tensor.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_strict_short_data_fails() {
        let config = TextIoConfig::default().strict(true);
        let err =
            read_tensor_from_with_config::<i32>(Cursor::new("1\n4\n7 8 "), &config).unwrap_err();
        assert!(matches!(
            err,
            TensorError::ElementCountMismatch {
                expected: 4,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_strict_surplus_fails() {
        let config = TextIoConfig::default().strict(true);
        let err =
            read_tensor_from_with_config::<i32>(Cursor::new("1\n2\n1 2 3"), &config).unwrap_err();
        assert!(matches!(
            err,
            TensorError::ElementCountMismatch {
                expected: 2,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_strict_exact_passes() {
        let config = TextIoConfig::default().strict(true);
        let tensor =
            read_tensor_from_with_config::<u8>(Cursor::new("2\n1\n2\n3 4 "), &config).unwrap();
        assert_eq!(tensor.as_slice(), &[3, 4]);
    }

    #[test]
    fn test_missing_rank() {
        let err = read_tensor_from::<f64>(Cursor::new("   ")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("rank"));
    }

    #[test]
    fn test_missing_extent() {
        let err = read_tensor_from::<f64>(Cursor::new("3\n2\n2")).unwrap_err();
        assert!(matches!(err, TensorError::Parse { ref context, .. } if context == "extent of axis 2"));
    }

    #[test]
    fn test_negative_extent_rejected() {
        let err = read_tensor_from::<f64>(Cursor::new("1\n-2\n1 2")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_bad_element() {
        let err = read_tensor_from::<i32>(Cursor::new("1\n3\n1 x 3")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse element 1: \"x\"");
    }

    #[test]
    fn test_overflowing_shape() {
        let text = format!("2\n{}\n{}\n", usize::MAX, 2);
        let err = read_tensor_from::<u8>(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, TensorError::Parse { ref context, .. } if context == "shape"));
    }

    #[test]
    fn test_shape_exceeding_address_space() {
        let text = format!("1\n{}\n", usize::MAX);
        let err = read_tensor_from::<u8>(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, TensorError::Parse { ref context, .. } if context == "shape"));

        let text = format!("1\n{}\n1 2", usize::MAX / 4);
        let err = read_tensor_from::<u64>(Cursor::new(text)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_strict_large_header_with_short_data() {
        let config = TextIoConfig::default().strict(true);
        let text = "1\n1000000000000\n1 2 3";
        let err = read_tensor_from_with_config::<f64>(Cursor::new(text), &config).unwrap_err();
        assert!(matches!(
            err,
            TensorError::ElementCountMismatch { expected: 1_000_000_000_000, got: 3, .. }
        ));
    }

    #[test]
    fn test_stream_round_trip() {
        let tensor = Tensor::from_vec((0..24).map(|x| x as f64 * 0.25).collect(), &[2, 3, 4]).unwrap();
        let mut buffer = Vec::new();
        write_tensor_to(&tensor, &mut buffer).unwrap();
        let back: Tensor<f64> = read_tensor_from(buffer.as_slice()).unwrap();
        assert_eq!(back, tensor);
    }

    #[test]
    fn test_open_missing_file() {
        let path = std::env::temp_dir()
            .join("densor_io_missing_dir")
            .join("nope.txt");
        let err = read_tensor::<f64>(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Open);
    }

    #[test]
    fn test_write_unwritable_path() {
        let path = std::env::temp_dir()
            .join("densor_io_missing_dir")
            .join("out.txt");
        let err = write_tensor(&Tensor::<f64>::default(), &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Open);
    }
}
