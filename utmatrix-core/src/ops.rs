//! `std::ops` operators for the containers.
//!
//! Scalar operators are infallible. Operators combining two containers return a `Result`
//! because the operands may differ in size.

use crate::error::Result;
use crate::matrix::TriangularMatrix;
use crate::traits::Scalar;
use crate::vector::BoundedVector;
use std::ops::{Add, Mul, Sub};

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $scalar_method:ident) => {
        impl<T: Scalar> $trait<T> for &BoundedVector<T> {
            type Output = BoundedVector<T>;

            fn $method(self, rhs: T) -> Self::Output {
                self.$scalar_method(rhs)
            }
        }

        // Owned operands are updated without a new allocation.
        impl<T: Scalar> $trait<T> for BoundedVector<T> {
            type Output = BoundedVector<T>;

            fn $method(self, rhs: T) -> Self::Output {
                self.map_in_place(|v| *v = v.clone().$method(rhs.clone()))
            }
        }
    };
}

impl_scalar_op!(Add, add, add_scalar);
impl_scalar_op!(Sub, sub, sub_scalar);
impl_scalar_op!(Mul, mul, mul_scalar);

impl<'b, T: Scalar> Add<&'b BoundedVector<T>> for &BoundedVector<T> {
    type Output = Result<BoundedVector<T>>;

    fn add(self, rhs: &'b BoundedVector<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'b, T: Scalar> Sub<&'b BoundedVector<T>> for &BoundedVector<T> {
    type Output = Result<BoundedVector<T>>;

    fn sub(self, rhs: &'b BoundedVector<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

/// Dot product.
impl<'b, T: Scalar> Mul<&'b BoundedVector<T>> for &BoundedVector<T> {
    type Output = Result<T>;

    fn mul(self, rhs: &'b BoundedVector<T>) -> Self::Output {
        self.dot(rhs)
    }
}

impl<'b, T: Scalar> Add<&'b TriangularMatrix<T>> for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>>;

    fn add(self, rhs: &'b TriangularMatrix<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'b, T: Scalar> Sub<&'b TriangularMatrix<T>> for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>>;

    fn sub(self, rhs: &'b TriangularMatrix<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: Scalar> Mul<T> for &TriangularMatrix<T> {
    type Output = TriangularMatrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(rhs)
    }
}
