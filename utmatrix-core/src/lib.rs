//! # utmatrix core library
//!
//! Bounds-checked numeric containers: an offset-addressed `BoundedVector` and a
//! `TriangularMatrix` that stores only the cells on and above its diagonal, one
//! `BoundedVector` per row.

pub mod error;
pub mod limits;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod vector;

// Re-export public types
pub use error::{ErrorStage, Result, UtMatrixError};
pub use limits::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use matrix::TriangularMatrix;
pub use vector::BoundedVector;

pub use traits::{Matrix, Scalar, Vector};
