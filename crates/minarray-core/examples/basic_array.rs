//! Basic array creation and manipulation examples.
//!
//! This example walks through the engine:
//! - Creating arrays with different initialization methods
//! - Transposing and raveling
//! - Axis sums and matrix products
//! - The difference between `copy` and `to_contiguous`
//!
//! Run with:
//! ```bash
//! RUST_LOG=minarray_core=debug cargo run --example basic_array
//! ```

use anyhow::Result;
use minarray_core::{Array, ElementType};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    println!("=== minarray: Basic Array Examples ===\n");

    example_creation()?;
    example_transpose()?;
    example_reductions()?;
    example_copies()?;

    println!("=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> Result<()> {
    println!("--- Example 1: Creation ---");

    let zeros = Array::zeros(&[2, 3], ElementType::Float64)?;
    println!("zeros [2, 3]: shape {:?}, strides {:?}", zeros.shape(), zeros.strides());
    print!("{zeros}");

    let column = Array::ones(&[3], ElementType::Int32)?;
    println!("ones [3] is promoted to {:?}", column.shape());
    print!("{column}");

    let random = Array::randint(&[2, 4], ElementType::Int64, 0, 9)?;
    println!("randint [2, 4] in [0, 9]:");
    print!("{random}");

    println!();
    Ok(())
}

fn example_transpose() -> Result<()> {
    println!("--- Example 2: Transpose ---");

    let mut a = Array::from_slice(&[8i32, 3, 9, 1, 4, 2, 0, 6], &[4, 2])?;
    print!("{a}");
    a.transpose(&[1, 0])?;
    println!("after transpose: shape {:?}, strides {:?}", a.shape(), a.strides());
    print!("{a}");
    println!("ravel: {:?}", a.to_vec::<i32>()?);

    println!();
    Ok(())
}

fn example_reductions() -> Result<()> {
    println!("--- Example 3: Sums and products ---");

    let c = Array::from_slice(&[2.0f64, -81.0, 26.0, 17.0, 102.0, -3.0], &[2, 3])?;
    print!("c =\n{c}");
    print!("c.sum(0) = {}", c.sum(0)?);
    print!("c.sum(1) = {}", c.sum(1)?);

    let mut ct = c.copy();
    ct.transpose(&[1, 0])?;
    let gram = c.dot(&ct)?;
    print!("c . c^T =\n{gram}");

    let a = Array::randint(&[64, 64], ElementType::Float32, 0, 1)?;
    let total = a.dot(&a)?.sum(1)?.sum(0)?;
    print!("sum of a 64x64 random 0/1 product: {total}");

    println!();
    Ok(())
}

fn example_copies() -> Result<()> {
    println!("--- Example 4: copy vs to_contiguous ---");

    let mut a = Array::from_slice(&[1i64, 2, 3, 4, 5, 6], &[2, 3])?;
    a.transpose(&[1, 0])?;
    print!("transposed view:\n{a}");
    print!("copy (storage order):\n{}", a.copy());
    print!("to_contiguous (logical order):\n{}", a.to_contiguous());

    println!();
    Ok(())
}
