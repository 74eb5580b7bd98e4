//! Basic tensor creation, access and persistence.
//!
//! This example walks through the core functionality of densor-core:
//! - Creating tensors with different initialization methods
//! - Checked indexing and the two access errors
//! - Copy and move semantics
//! - Writing a tensor to a text file and reading it back
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor --features tracing
//! ```

use anyhow::Result;
use densor_core::io::{self, TextIoConfig};
use densor_core::tracing_support::{init_tracing, TracingConfig};
use densor_core::Tensor;

fn main() -> Result<()> {
    init_tracing(TracingConfig::default().with_target(false))?;

    println!("=== densor-core: Basic Tensor Examples ===\n");

    example_creation()?;
    example_indexing();
    example_copy_move();
    example_file_round_trip()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> Result<()> {
    println!("--- Example 1: Tensor Creation ---");

    let scalar = Tensor::<f64>::default();
    println!("Default tensor:");
    println!("  Rank: {}, elements: {}", scalar.rank(), scalar.num_elements());

    let zeros = Tensor::<f64>::new(&[2, 3]);
    println!("\nZeros tensor [2, 3]:");
    println!("  Shape: {:?}", zeros.shape());
    println!("  Element at [1, 2]: {}", zeros[&[1, 2]]);

    let fives = Tensor::from_elem(&[2, 2, 2], 5.0);
    println!("\nTensor filled with 5.0 [2, 2, 2]:");
    println!("  Element at [0, 1, 1]: {}", fives[&[0, 1, 1]]);

    let from_vec = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    println!("\n{}", from_vec);

    println!();
    Ok(())
}

fn example_indexing() {
    println!("--- Example 2: Indexing ---");

    let mut tensor = Tensor::<i32>::new(&[3, 4]);
    tensor[&[0, 0]] = 1;
    tensor[&[2, 3]] = 42;
    println!("  Element at [2, 3]: {}", tensor[&[2, 3]]);
    println!("  Flat offset of [2, 3]: {:?}", tensor.flat_index(&[2, 3]));

    if let Err(err) = tensor.get(&[1]) {
        println!("  get(&[1]) -> {}", err);
    }
    if let Err(err) = tensor.get(&[3, 0]) {
        println!("  get(&[3, 0]) -> {}", err);
    }

    println!();
}

fn example_copy_move() {
    println!("--- Example 3: Copy and Move ---");

    let mut a = Tensor::from_elem(&[2, 2], 1u8);
    let mut b = a.clone();
    b[&[0, 0]] = 9;
    println!("  after copy and write: a[0,0] = {}, b[0,0] = {}", a[&[0, 0]], b[&[0, 0]]);

    let c = a.take();
    println!("  after take: a has {} elements, c has {}", a.num_elements(), c.num_elements());

    let square = Tensor::from_elem(&[2, 2], 5);
    let flat = Tensor::from_elem(&[4], 5);
    println!(
        "  [2, 2] vs [4] of fives: == {}, flat_eq {}",
        square == flat,
        square.flat_eq(&flat)
    );

    println!();
}

fn example_file_round_trip() -> Result<()> {
    println!("--- Example 4: Text File Round Trip ---");

    let path = std::env::temp_dir().join("densor_basic_tensor.txt");
    let tensor = Tensor::from_vec((1..=6).collect::<Vec<i64>>(), &[2, 3])?;

    let summary = io::write_tensor(&tensor, &path)?;
    println!(
        "  wrote {} elements ({} bytes) to {}",
        summary.num_elements,
        summary.bytes_written,
        summary.path.display()
    );

    let strict = TextIoConfig::default().strict(true);
    let back: Tensor<i64> = io::read_tensor_with_config(&path, &strict)?;
    println!("  read back equal: {}", back == tensor);

    std::fs::remove_file(&path)?;
    Ok(())
}
