use std::error::Error;

use utmatrix_core::{BoundedVector, TriangularMatrix};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let size = 4;
    let mut upper: TriangularMatrix<f64> = TriangularMatrix::new(size)?;
    for row in 0..size {
        for col in row..size {
            upper.set(row, col, (row * size + col) as f64)?;
        }
    }
    log::info!("Upper triangle of dimension {}:\n{}", upper.size(), upper);

    let sum = (&upper + &upper)?;
    log::info!("Doubled by addition:\n{}", sum);
    assert_eq!(sum, &upper * 2.0);

    // Row 2 is addressed from column 2 onwards.
    let row = &upper[2];
    let weights = BoundedVector::from_vec(vec![0.5; row.size()], row.start_index())?;
    log::info!("Weighted row 2: {}", (row * &weights)?);

    if let Err(err) = upper.get(2, 1) {
        log::info!("Sub-diagonal access rejected: {}", err);
    }

    Ok(())
}
