use crate::error::{Result, UtMatrixError};
use crate::limits::MAX_VECTOR_SIZE;
use crate::traits::{Scalar, Vector};
use num_traits::{PrimInt, Zero};
use std::fmt;
use std::ops::{Index, IndexMut, Range};
use std::slice::{Iter, IterMut};

/// Widens a caller-supplied integer for error reporting.
pub(crate) fn requested<I: PrimInt>(value: &I) -> i128 {
    value.to_i128().unwrap_or(i128::MAX)
}

/// Validates a requested element count against `max`.
pub(crate) fn checked_size<S: PrimInt>(size: S, max: usize) -> Result<usize> {
    match size.to_usize() {
        Some(size) if size <= max => Ok(size),
        _ => {
            let requested = requested(&size);
            log::debug!("Rejecting size {} (allowed 0..={})", requested, max);
            Err(UtMatrixError::InvalidSize { requested, max })
        }
    }
}

fn checked_start_index<I: PrimInt>(start_index: I, size: usize) -> Result<usize> {
    // The end of the address range must stay representable as well.
    match start_index.to_usize() {
        Some(start) if start.checked_add(size).is_some() => Ok(start),
        _ => {
            let requested = requested(&start_index);
            log::debug!("Rejecting start index {}", requested);
            Err(UtMatrixError::InvalidStartIndex { requested })
        }
    }
}

/// A fixed-length, bounds-checked sequence whose valid addresses are
/// `start_index..start_index + size`.
///
/// The start index only shifts addressing; it never changes the amount of storage.
/// Every instance exclusively owns its buffer, copies are always deep.
#[derive(Debug)]
pub struct BoundedVector<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T: Zero + Clone> BoundedVector<T> {
    /// Creates a zero-filled vector of `size` elements addressed from 0.
    ///
    /// # Errors
    /// `InvalidSize` when `size` is negative or exceeds `MAX_VECTOR_SIZE`.
    pub fn new<S: PrimInt>(size: S) -> Result<Self> {
        Self::with_start_index(size, 0usize)
    }

    /// Creates a zero-filled vector of `size` elements addressed from `start_index`.
    ///
    /// # Errors
    /// `InvalidSize` when `size` is negative or exceeds `MAX_VECTOR_SIZE`,
    /// `InvalidStartIndex` when `start_index` is negative.
    ///
    /// Sizes and addresses are integers; fractional requests do not compile:
    ///
    /// ```compile_fail
    /// use utmatrix_core::BoundedVector;
    /// let _ = BoundedVector::<i32>::with_start_index(4, -0.9);
    /// ```
    pub fn with_start_index<S: PrimInt, I: PrimInt>(size: S, start_index: I) -> Result<Self> {
        let size = checked_size(size, MAX_VECTOR_SIZE)?;
        let start_index = checked_start_index(start_index, size)?;
        log::trace!(
            "Allocating bounded vector of {} elements starting at {}",
            size,
            start_index
        );
        Ok(Self {
            data: vec![T::zero(); size],
            start_index,
        })
    }
}

impl<T> BoundedVector<T> {
    /// Wraps existing values, addressed from `start_index`.
    pub fn from_vec<I: PrimInt>(data: Vec<T>, start_index: I) -> Result<Self> {
        let size = checked_size(data.len(), MAX_VECTOR_SIZE)?;
        let start_index = checked_start_index(start_index, size)?;
        Ok(Self { data, start_index })
    }

    /// Number of stored elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// First valid address.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// The range of valid addresses.
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.start_index + self.data.len()
    }

    /// Maps an address to a position in the buffer.
    fn offset<I: PrimInt>(&self, index: I) -> Result<usize> {
        let range = self.indices();
        match index.to_usize() {
            Some(i) if range.contains(&i) => Ok(i - self.start_index),
            _ => Err(UtMatrixError::IndexOutOfRange {
                index: requested(&index),
                start: range.start,
                end: range.end,
            }),
        }
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` unless `start_index <= index < start_index + size`.
    pub fn get<I: PrimInt>(&self, index: I) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Gets the element at `index` (mutable).
    pub fn get_mut<I: PrimInt>(&mut self, index: I) -> Result<&mut T> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrites the element at `index`.
    pub fn set<I: PrimInt>(&mut self, index: I, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns a slice view of the underlying buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copies `other` into this vector, adopting its size and start index.
    /// Storage is reused when the sizes already agree.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.clone_from(other);
    }

    fn ensure_same_size<U>(&self, other: &BoundedVector<U>) -> Result<()> {
        if self.size() != other.size() {
            log::debug!(
                "Size mismatch between operands: {} != {}",
                self.size(),
                other.size()
            );
            return Err(UtMatrixError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    /// Combines two vectors of equal size pairwise.
    /// The result keeps this vector's start index.
    ///
    /// # Errors
    /// `SizeMismatch` when the sizes differ, or the first error returned by `f`.
    pub fn try_zip_with<U, R, F>(&self, other: &BoundedVector<U>, mut f: F) -> Result<BoundedVector<R>>
    where
        F: FnMut(&T, &U) -> Result<R>,
    {
        self.ensure_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<R>>>()?;
        Ok(BoundedVector {
            data,
            start_index: self.start_index,
        })
    }

    /// Applies `f` to every element, keeping size and start index.
    pub fn map<R, F: FnMut(&T) -> R>(&self, f: F) -> BoundedVector<R> {
        BoundedVector {
            data: self.data.iter().map(f).collect(),
            start_index: self.start_index,
        }
    }

    pub(crate) fn map_in_place<F: FnMut(&mut T)>(mut self, f: F) -> Self {
        self.data.iter_mut().for_each(f);
        self
    }
}

impl<T: Scalar> BoundedVector<T> {
    pub fn add_scalar(&self, value: T) -> Self {
        self.map(|v| v.clone() + value.clone())
    }

    pub fn sub_scalar(&self, value: T) -> Self {
        self.map(|v| v.clone() - value.clone())
    }

    pub fn mul_scalar(&self, value: T) -> Self {
        self.map(|v| v.clone() * value.clone())
    }

    /// Elementwise sum. The result is addressed like `self`.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.try_zip_with(other, |a, b| Ok(a.clone() + b.clone()))
    }

    /// Elementwise difference. The result is addressed like `self`.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_zip_with(other, |a, b| Ok(a.clone() - b.clone()))
    }

    /// Dot product: the sum of elementwise products.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.ensure_same_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }
}

impl<T: Clone> Clone for BoundedVector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            start_index: self.start_index,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.data.len() == source.data.len() {
            self.data.clone_from_slice(&source.data);
        } else {
            log::debug!(
                "Reallocating bounded vector from {} to {} elements",
                self.data.len(),
                source.data.len()
            );
            self.data = source.data.clone();
        }
        self.start_index = source.start_index;
    }
}

// Start indices do not take part in equality.
impl<T: PartialEq> PartialEq for BoundedVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for BoundedVector<T> {}

impl<T> Index<usize> for BoundedVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for BoundedVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedVector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedVector<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for BoundedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> Vector for BoundedVector<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.size()
    }

    fn start_index(&self) -> usize {
        self.start_index
    }
}
