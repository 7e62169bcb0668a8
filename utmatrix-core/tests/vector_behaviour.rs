use utmatrix_core::{BoundedVector, ErrorStage, UtMatrixError, MAX_VECTOR_SIZE};

// Vector with every element set to one.
fn ones(size: usize) -> Result<BoundedVector<i32>, UtMatrixError> {
    BoundedVector::from_vec(vec![1; size], 0)
}

#[test]
fn test_create_vector_with_positive_length() -> Result<(), UtMatrixError> {
    let v: BoundedVector<i32> = BoundedVector::new(5)?;
    assert_eq!(v.size(), 5);
    Ok(())
}

#[test]
fn test_cant_create_too_large_vector() {
    let err = BoundedVector::<i32>::new(MAX_VECTOR_SIZE + 1).unwrap_err();
    assert!(matches!(err, UtMatrixError::InvalidSize { .. }));
    assert_eq!(err.stage(), ErrorStage::Construction);
}

#[test]
fn test_create_vector_with_negative_length_fails() {
    assert!(matches!(
        BoundedVector::<i32>::new(-5),
        Err(UtMatrixError::InvalidSize { requested: -5, .. })
    ));
}

#[test]
fn test_create_vector_with_negative_start_index_fails() {
    assert!(matches!(
        BoundedVector::<i32>::with_start_index(5, -2),
        Err(UtMatrixError::InvalidStartIndex { requested: -2 })
    ));
}

#[test]
fn test_copied_vector_is_equal_and_owns_its_memory() -> Result<(), UtMatrixError> {
    let mut a: BoundedVector<i32> = BoundedVector::new(3)?;
    a.set(1, 0)?;
    a.set(2, 1)?;
    let mut copy = a.clone();
    assert_eq!(a, copy);
    assert_ne!(a.as_slice().as_ptr(), copy.as_slice().as_ptr());

    copy[2] = 9;
    assert_eq!(a[2], 1);
    assert_ne!(a, copy);
    Ok(())
}

#[test]
fn test_get_size_and_start_index() -> Result<(), UtMatrixError> {
    let v: BoundedVector<i32> = BoundedVector::with_start_index(4, 2)?;
    assert_eq!(v.size(), 4);
    assert_eq!(v.start_index(), 2);
    Ok(())
}

#[test]
fn test_set_and_get_element() -> Result<(), UtMatrixError> {
    let mut v: BoundedVector<i32> = BoundedVector::new(4)?;
    v[0] = 4;
    assert_eq!(*v.get(0)?, 4);
    *v.get_mut(3)? = 8;
    assert_eq!(v[3], 8);
    Ok(())
}

#[test]
fn test_access_out_of_range_fails() -> Result<(), UtMatrixError> {
    let mut v: BoundedVector<i32> = BoundedVector::new(4)?;
    let err = v.set(-5, 0).unwrap_err();
    assert_eq!(err, UtMatrixError::IndexOutOfRange { index: -5, start: 0, end: 4 });
    assert_eq!(err.stage(), ErrorStage::Access);
    assert!(matches!(v.set(-1, 0), Err(UtMatrixError::IndexOutOfRange { .. })));
    assert!(matches!(v.set(4, 0), Err(UtMatrixError::IndexOutOfRange { .. })));
    for i in 0..4 {
        v.set(i, i)?;
    }
    assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
    Ok(())
}

#[test]
fn test_assign_vector_from_copy_of_itself() -> Result<(), UtMatrixError> {
    let mut v = ones(4)?;
    let before = v.clone();
    let snapshot = v.clone();
    v.assign(&snapshot);
    assert_eq!(v, before);
    Ok(())
}

#[test]
fn test_assign_vectors_of_equal_size() -> Result<(), UtMatrixError> {
    let v = ones(4)?;
    let mut a: BoundedVector<i32> = BoundedVector::new(4)?;
    a.assign(&v);
    assert_eq!(a, v);
    Ok(())
}

#[test]
fn test_assign_changes_vector_size() -> Result<(), UtMatrixError> {
    let m: BoundedVector<i32> = BoundedVector::new(5)?;
    let mut a: BoundedVector<i32> = BoundedVector::new(7)?;
    a.clone_from(&m);
    assert_eq!(a.size(), 5);
    Ok(())
}

#[test]
fn test_assign_vectors_of_different_size() -> Result<(), UtMatrixError> {
    let m = BoundedVector::from_vec(vec![1, 2, 4, 4, 4], 0)?;
    let mut a: BoundedVector<i32> = BoundedVector::new(7)?;
    a.assign(&m);
    assert_eq!(a, m);
    Ok(())
}

#[test]
fn test_compare_vectors() -> Result<(), UtMatrixError> {
    let a = ones(4)?;
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(a, a);
    assert_ne!(a, BoundedVector::new(5)?);
    Ok(())
}

#[test]
fn test_scalar_operations() -> Result<(), UtMatrixError> {
    let a = ones(4)?;
    assert_eq!(&a + 2, BoundedVector::from_vec(vec![3; 4], 0)?);
    assert_eq!(&a - 2, BoundedVector::from_vec(vec![-1; 4], 0)?);
    assert_eq!(&a * 2, BoundedVector::from_vec(vec![2; 4], 0)?);
    Ok(())
}

#[test]
fn test_add_and_subtract_vectors() -> Result<(), UtMatrixError> {
    let a = ones(4)?;
    let v: BoundedVector<i32> = BoundedVector::new(4)?;
    assert_eq!((&a + &v)?, a);
    assert_eq!((&a - &v)?, a);

    let w: BoundedVector<i32> = BoundedVector::new(5)?;
    let err = (&a + &w).unwrap_err();
    assert_eq!(err, UtMatrixError::SizeMismatch { left: 4, right: 5 });
    assert_eq!(err.stage(), ErrorStage::Operation);
    assert!(matches!(&a - &w, Err(UtMatrixError::SizeMismatch { .. })));
    Ok(())
}

#[test]
fn test_multiply_vectors() -> Result<(), UtMatrixError> {
    let a = BoundedVector::from_vec(vec![2, 1, 1, 1], 0)?;
    let v = a.clone();
    assert_eq!((&a * &v)?, 7);

    let w: BoundedVector<i32> = BoundedVector::new(5)?;
    assert!(matches!(&a * &w, Err(UtMatrixError::SizeMismatch { .. })));
    Ok(())
}
