use crate::error::{Result, UtMatrixError};
use crate::limits::MAX_MATRIX_SIZE;
use crate::traits::{Matrix, Scalar};
use crate::vector::{checked_size, BoundedVector};
use num_traits::{PrimInt, Zero};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

/// Square matrix of which only the cells on and above the diagonal are stored.
///
/// Row `i` is a `BoundedVector` of `size - i` elements whose start index is `i`, so a
/// row is addressed with the same column indices as the full matrix and any column
/// below the diagonal is rejected by the row's own bounds check.
#[derive(Debug, PartialEq)]
pub struct TriangularMatrix<T> {
    rows: BoundedVector<BoundedVector<T>>,
}

impl<T: Zero + Clone> TriangularMatrix<T> {
    /// Creates a zero-filled matrix of dimension `size`.
    ///
    /// # Errors
    /// `InvalidSize` when `size` is negative or exceeds `MAX_MATRIX_SIZE`.
    pub fn new<S: PrimInt>(size: S) -> Result<Self> {
        let size = checked_size(size, MAX_MATRIX_SIZE)?;
        log::trace!("Allocating triangular matrix of dimension {}", size);
        let rows = (0..size)
            .map(|i| BoundedVector::with_start_index(size - i, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: BoundedVector::from_vec(rows, 0usize)?,
        })
    }
}

impl<T> TriangularMatrix<T> {
    /// Builds a matrix from its stored rows; row `i` must hold `rows.len() - i` values.
    ///
    /// # Errors
    /// `InvalidSize` for too many rows, `SizeMismatch` for a row of the wrong length.
    pub fn from_upper_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = checked_size(rows.len(), MAX_MATRIX_SIZE)?;
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != size - i {
                    return Err(UtMatrixError::SizeMismatch {
                        left: size - i,
                        right: row.len(),
                    });
                }
                BoundedVector::from_vec(row, i)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: BoundedVector::from_vec(rows, 0usize)?,
        })
    }

    /// Dimension of the matrix.
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    /// Returns row `index`, whose valid columns are `index..size`.
    pub fn row<I: PrimInt>(&self, index: I) -> Result<&BoundedVector<T>> {
        self.rows.get(index)
    }

    pub fn row_mut<I: PrimInt>(&mut self, index: I) -> Result<&mut BoundedVector<T>> {
        self.rows.get_mut(index)
    }

    /// Gets the stored cell at (`row`, `col`).
    ///
    /// # Errors
    /// `IndexOutOfRange` when `row` is outside `0..size` or `col` outside `row..size`.
    pub fn get<R: PrimInt, C: PrimInt>(&self, row: R, col: C) -> Result<&T> {
        self.row(row)?.get(col)
    }

    pub fn get_mut<R: PrimInt, C: PrimInt>(&mut self, row: R, col: C) -> Result<&mut T> {
        self.row_mut(row)?.get_mut(col)
    }

    pub fn set<R: PrimInt, C: PrimInt>(&mut self, row: R, col: C, value: T) -> Result<()> {
        self.row_mut(row)?.set(col, value)
    }

    pub fn iter_rows(&self) -> Iter<'_, BoundedVector<T>> {
        self.rows.iter()
    }

    /// Copies `other` into this matrix, rebuilding the row layout when the sizes differ.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.clone_from(other);
    }
}

impl<T: Scalar> TriangularMatrix<T> {
    /// Sum over the stored cells.
    ///
    /// # Errors
    /// `SizeMismatch` when the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        let rows = self.rows.try_zip_with(&other.rows, |a, b| a.try_add(b))?;
        Ok(Self { rows })
    }

    /// Difference over the stored cells.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        let rows = self.rows.try_zip_with(&other.rows, |a, b| a.try_sub(b))?;
        Ok(Self { rows })
    }

    /// Scales every stored cell.
    pub fn mul_scalar(&self, value: T) -> Self {
        Self {
            rows: self.rows.map(|row| row.mul_scalar(value.clone())),
        }
    }
}

impl<T: Clone> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    // Row buffers are reused when the dimension is unchanged.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: Eq> Eq for TriangularMatrix<T> {}

impl<T> Index<usize> for TriangularMatrix<T> {
    type Output = BoundedVector<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T> IndexMut<usize> for TriangularMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<T: fmt::Display> fmt::Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> Matrix for TriangularMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.size(), self.size())
    }
}
