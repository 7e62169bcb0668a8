//! Process-wide allocation bounds checked by every constructor.

/// Largest element count a `BoundedVector` may be created with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest dimension a `TriangularMatrix` may be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
