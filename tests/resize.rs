use dynarray::prelude::*;

use dynarray_gen::array_builder::{ArrayBuilder, ElementGenerator};

#[test]
fn resize_grow_and_truncate()
{
    let mut a = ArrayBuilder::new(&[2, 2]).build();
    a.resize(6, -1i32).unwrap();
    assert_eq!(a.values_string().unwrap(), "0 1 2 3 -1 -1");
    assert_eq!(a.dimensions(), vec![6]);

    a.resize(2, 0i32).unwrap();
    assert_eq!(a.values_string().unwrap(), "0 1");
    assert_eq!(a.size(), 2);
}

#[test]
fn resize_same_size_flattens()
{
    let mut a = ArrayBuilder::new(&[3, 4]).build();
    a.resize(12, 0i32).unwrap();
    assert_eq!(a.dimensions(), vec![12]);
    assert_eq!(a.get_value::<i32>(11).unwrap(), 11);
}

#[test]
fn resize_converts_fill()
{
    let mut a = TypedArray::from_vec(vec![1u16]);
    a.resize(3, 2.75f64).unwrap();
    assert_eq!(a.values_string().unwrap(), "1 2 2");

    let err = a.resize(5, "lots".to_string()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
    assert_eq!(a.size(), 3);

    a.resize(4, "40".to_string()).unwrap();
    assert_eq!(a.get_value::<u16>(3).unwrap(), 40);
}

#[test]
fn resize_pristine_takes_fill_type()
{
    let mut a = TypedArray::new();
    a.resize(2, 0.5f32).unwrap();
    assert_eq!(a.array_type(), Some(ArrayType::Float32));
    assert_eq!(a.values_string().unwrap(), "0.5 0.5");
}

#[test]
fn resize_with_shape()
{
    let mut a = ArrayBuilder::new(&[5])
        .array_type(ArrayType::Float64)
        .build();
    a.resize_with_shape(&[2, 4], 9.0).unwrap();
    assert_eq!(a.dimensions_string(), "2 4");
    assert_eq!(a.values_string().unwrap(), "0 1 2 3 4 9 9 9");

    a.resize_with_shape(&[2, 1], 0.0).unwrap();
    assert_eq!(a.dimensions(), vec![2, 1]);
    assert_eq!(a.values_string().unwrap(), "0 1");

    for shape in &[&[0usize, 3][..], &[][..], &[usize::MAX, 2][..]] {
        let err = a.resize_with_shape(shape, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
    }
    assert_eq!(a.dimensions(), vec![2, 1]);
}

#[test]
fn oversized_requests_are_errors()
{
    let mut a = TypedArray::from_vec(vec![1i64]);
    let err = a.resize(isize::MAX as usize, 0i64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    let err = a.resize_with_shape(&[isize::MAX as usize / 4, 2], 0i64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    assert_eq!(a.values_string().unwrap(), "1");
    assert_eq!(a.dimensions(), vec![1]);

    let capacity = a.capacity();
    let err = a.reserve(usize::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    let err = a.reserve(isize::MAX as usize / 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    assert_eq!(a.capacity(), capacity);

    let err = a.initialize(ArrayType::Float64, isize::MAX as usize / 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    let err = a
        .initialize_with_shape(ArrayType::String, &[isize::MAX as usize / 8, 1])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    assert_eq!(a.array_type(), Some(ArrayType::Int64));
    assert_eq!(a.values_string().unwrap(), "1");

    let mut pristine = TypedArray::new();
    assert_eq!(pristine.reserve(usize::MAX).unwrap_err().kind(), ErrorKind::InvalidShape);
    assert_eq!(pristine.resize(isize::MAX as usize, 0u16).unwrap_err().kind(), ErrorKind::InvalidShape);
    assert_eq!(pristine.array_type(), None);

    // remembered for a type it cannot be honored for: dropped at first write
    pristine.reserve(isize::MAX as usize / 2).unwrap();
    pristine.push_back(1u64).unwrap();
    assert_eq!(pristine.values_string().unwrap(), "1");
}

#[test]
fn initialize_discards_content()
{
    let mut a = ArrayBuilder::new(&[10]).name("x").build();
    a.initialize(ArrayType::UInt8, 3).unwrap();
    assert_eq!(a.values_string().unwrap(), "0 0 0");
    assert_eq!(a.array_type(), Some(ArrayType::UInt8));
    assert_eq!(a.name(), "x");
    assert!(a.is_initialized());

    a.initialize_with_shape(ArrayType::Int32, &[5, 5, 5]).unwrap();
    assert_eq!(a.size(), 125);
    assert_eq!(a.dimensions(), vec![5, 5, 5]);

    let err = a.initialize_with_shape(ArrayType::Int8, &[3, 0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    assert_eq!(a.array_type(), Some(ArrayType::Int32));
    assert_eq!(a.size(), 125);
}

#[test]
fn reserve_1d()
{
    let mut a = ArrayBuilder::new(&[4]).build();
    a.reserve(1000).unwrap();
    assert_eq!(a.dimensions(), vec![4]);
    assert!(a.capacity() >= 1000);
    assert_eq!(a.values_string().unwrap(), "0 1 2 3");
}

#[test]
fn reserve_never_shrinks()
{
    let mut a = TypedArray::new();
    a.initialize(ArrayType::Float32, 10).unwrap();
    a.reserve(500).unwrap();
    let capacity = a.capacity();
    a.reserve(1).unwrap();
    assert_eq!(a.capacity(), capacity);
    a.resize(1, 0f32).unwrap();
    assert_eq!(a.capacity(), capacity);
}

#[test]
fn reserve_before_storage()
{
    let mut a = TypedArray::new();
    a.reserve(256).unwrap();
    assert_eq!(a.capacity(), 0);
    a.push_back(1u8).unwrap();
    assert!(a.capacity() >= 256);

    let mut b = TypedArray::new();
    b.reserve(64).unwrap();
    b.initialize(ArrayType::Int64, 2).unwrap();
    assert!(b.capacity() >= 64);
    assert_eq!(b.size(), 2);
}

#[test]
fn clear_keeps_type_and_capacity()
{
    let mut a = ArrayBuilder::new(&[4, 4])
        .array_type(ArrayType::UInt32)
        .build();
    let capacity = a.capacity();
    a.clear();
    assert_eq!(a.size(), 0);
    assert_eq!(a.dimensions(), vec![0]);
    assert_eq!(a.capacity(), capacity);
    assert_eq!(a.array_type(), Some(ArrayType::UInt32));
    assert!(a.is_initialized());
    assert_eq!(a.values_string().unwrap(), "");

    a.push_back(3i8).unwrap();
    assert_eq!(a.as_slice::<u32>().unwrap(), &[3]);
}

#[test]
fn zero_filled_builder()
{
    let mut a = ArrayBuilder::new(&[2, 3])
        .generator(ElementGenerator::Zero)
        .build();
    a.resize(7, 1i32).unwrap();
    assert_eq!(a.values_string().unwrap(), "0 0 0 0 0 0 1");
}
