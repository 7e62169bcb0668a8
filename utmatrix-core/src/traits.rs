use num_traits::Num;
use std::fmt::Debug;

/// Numeric element that supports the arithmetic the containers expose.
/// Blanket-implemented for every cloneable `Num` type (all primitive integers and floats).
pub trait Scalar: Num + Clone + Debug {}

impl<T: Num + Clone + Debug> Scalar for T {}

/// Two-dimensional container shape.
pub trait Matrix: Debug {
    type Value;

    /// (rows, columns) of the full logical matrix, stored or not.
    fn dims(&self) -> (usize, usize);

    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }
}

/// One-dimensional container addressed from `start_index`.
pub trait Vector: Debug {
    type Value;

    fn len(&self) -> usize;

    /// First valid address; plain sequences start at 0.
    fn start_index(&self) -> usize {
        0
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
