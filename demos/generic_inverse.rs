//! Invert the same matrix as floats and as exact rationals.
//!
//! Run with: cargo run --example generic_inverse

use adjugate::Matrix;
use num_rational::Ratio;

fn main() -> Result<(), adjugate::MatrixError> {
    let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]);
    let inv = m.inverse()?;
    println!("float inverse:");
    for i in 0..inv.nrows() {
        for j in 0..inv.ncols() {
            print!("{:8.4} ", inv[(i, j)]);
        }
        println!();
    }

    let m = Matrix::from_fn(2, 2, |i, j| {
        Ratio::from_integer([[4i64, 7], [2, 6]][i][j])
    });
    let inv = m.inverse()?;
    println!("exact rational inverse:");
    for i in 0..inv.nrows() {
        for j in 0..inv.ncols() {
            print!("{} ", inv[(i, j)]);
        }
        println!();
    }

    println!(
        "round trip is exact: {}",
        m.matmul(&inv)? == Matrix::identity(2)
    );
    Ok(())
}
