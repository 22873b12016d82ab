use defmac::defmac;
use itertools::assert_equal;

use dynarray::prelude::*;
use dynarray::TextController;

use std::sync::Arc;

fn ten() -> TypedArray
{
    (0..10).collect()
}

fn ints(a: &TypedArray) -> Vec<i32>
{
    a.as_slice::<i32>().unwrap().to_vec()
}

#[test]
fn strided_read_contiguous_write()
{
    let source = ten();
    let mut a = TypedArray::new();
    a.insert(0, &source, 0, 5, 2, 1).unwrap();
    assert_eq!(ints(&a), vec![0, 2, 4, 6, 8]);
    assert_eq!(a.array_type(), Some(ArrayType::Int32));
    assert_eq!(a.dimensions(), vec![5]);
}

#[test]
fn contiguous_read_strided_write()
{
    let source = ten();
    let mut a = ten();
    a.insert(0, &source, 0, 5, 1, 2).unwrap();
    assert_eq!(ints(&a), vec![0, 1, 1, 3, 2, 5, 3, 7, 4, 9]);
}

#[test]
fn self_insert_overlapping()
{
    let mut a = ten();
    a.insert_within(0, 0, 5, 1, 2).unwrap();
    assert_eq!(ints(&a), vec![0, 1, 1, 3, 2, 5, 3, 7, 4, 9]);

    let original = ten();
    a.insert(0, &original, 0, 5, 2, 1).unwrap();
    assert_eq!(ints(&a), vec![0, 2, 4, 6, 8, 5, 3, 7, 4, 9]);
}

#[test]
fn self_insert_shift_right()
{
    // destination starts inside the source range
    let mut a = ten();
    a.insert_within(2, 0, 8, 1, 1).unwrap();
    assert_eq!(ints(&a), vec![0, 1, 0, 1, 2, 3, 4, 5, 6, 7]);

    let mut b = ten();
    b.insert_within(0, 2, 8, 1, 1).unwrap();
    assert_eq!(ints(&b), vec![2, 3, 4, 5, 6, 7, 8, 9, 8, 9]);
}

#[test]
fn self_insert_grows()
{
    let mut a: TypedArray = (0..4u8).collect();
    a.insert_within(3, 0, 4, 1, 1).unwrap();
    assert_equal(a.as_slice::<u8>().unwrap(), &[0, 1, 2, 0, 1, 2, 3]);
    assert_eq!(a.size(), 7);
}

#[test]
fn growth_fills_gaps_and_flattens()
{
    let mut a = TypedArray::from_shape_vec(&[2, 2], vec![1i32, 2, 3, 4]).unwrap();
    let nine = TypedArray::from_vec(vec![9i32]);
    a.insert(6, &nine, 0, 1, 1, 1).unwrap();
    assert_eq!(ints(&a), vec![1, 2, 3, 4, 0, 0, 9]);
    assert_eq!(a.dimensions(), vec![7]);
    assert_eq!(a.size(), 7);
}

#[test]
fn overwrite_keeps_shape()
{
    let mut a = TypedArray::from_shape_vec(&[2, 3], vec![0i32; 6]).unwrap();
    let source = ten();
    a.insert(1, &source, 7, 2, 1, 3).unwrap();
    assert_eq!(ints(&a), vec![0, 7, 0, 0, 8, 0]);
    assert_eq!(a.dimensions_string(), "2 3");
}

#[test]
fn strided_write_past_end()
{
    let source = ten();
    let mut a = TypedArray::new();
    a.insert(0, &source, 1, 3, 1, 3).unwrap();
    assert_eq!(ints(&a), vec![1, 0, 0, 2, 0, 0, 3]);
}

#[test]
fn converts_to_destination_type()
{
    let source = TypedArray::from_vec(vec![1.9f64, -2.7, 300.5]);
    let mut a = TypedArray::from_vec(vec![0u8; 3]);
    a.insert(0, &source, 0, 3, 1, 1).unwrap();
    // truncation toward zero, saturation for out of range floats
    assert_equal(a.as_slice::<u8>().unwrap(), &[1, 0, 255]);

    let mut text = TypedArray::from_vec(vec![String::new(); 2]);
    text.insert(0, &source, 0, 2, 1, 1).unwrap();
    assert_eq!(text.values_string().unwrap(), "1.9 -2.7");

    let mut b = TypedArray::from_vec(vec![0i64; 2]);
    b.insert(0, &text, 0, 2, 1, 1).unwrap();
    assert_eq!(b.get_value::<i64>(1).unwrap(), -2);
}

#[test]
fn text_that_is_not_a_number()
{
    let source = TypedArray::from_vec(vec!["12".to_string(), "twelve".to_string()]);
    let mut a = TypedArray::from_vec(vec![5i16; 2]);
    let err = a.insert(0, &source, 0, 2, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
    // nothing written
    assert_equal(a.as_slice::<i16>().unwrap(), &[5, 5]);

    let mut pristine = TypedArray::new();
    assert!(pristine.insert_values(0, &["1".to_string()]).is_ok());
    assert_eq!(pristine.array_type(), Some(ArrayType::String));
}

#[test]
fn zero_stride()
{
    let source = ten();
    let mut a = ten();
    defmac!(zero_stride src, dst => {
        let err = a.insert(0, &source, 0, 3, src, dst).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidStride);
    });
    zero_stride!(0, 1);
    zero_stride!(1, 0);
    zero_stride!(0, 0);
    assert_eq!(a.insert_within(0, 0, 2, 0, 1).unwrap_err().kind(), ErrorKind::InvalidStride);
    assert_eq!(a.get_values::<i32>(0, 2, 0).unwrap_err().kind(), ErrorKind::InvalidStride);
    assert_eq!(a, ten());
}

#[test]
fn source_out_of_range()
{
    let source = ten();
    let mut a = TypedArray::from_vec(vec![1i32]);
    // last read index 10
    let err = a.insert(0, &source, 0, 6, 2, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    // last read index 9 fits exactly
    a.insert(0, &source, 1, 5, 2, 1).unwrap();
    assert_eq!(ints(&a), vec![1, 3, 5, 7, 9]);

    let err = a.insert(0, &TypedArray::new(), 0, 1, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    let err = a.insert_within(0, 3, 3, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    let err = a.insert(0, &source, 0, 2, 1, usize::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(ints(&a), vec![1, 3, 5, 7, 9]);
}

#[test]
fn oversized_growth_is_an_error()
{
    let huge = isize::MAX as usize / 2;

    let mut a = TypedArray::from_vec(vec![1i64]);
    let err = a.insert_values(huge, &[1i64]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    let err = a.insert_within(huge, 0, 1, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(a.values_string().unwrap(), "1");

    // four byte elements: the last index fits in isize, its storage does not
    let mut b = TypedArray::from_shape_vec(&[1, 2], vec![7i32, 8]).unwrap();
    let err = b.insert(0, &ten(), 0, 2, 1, isize::MAX as usize / 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(ints(&b), vec![7, 8]);
    assert_eq!(b.dimensions(), vec![1, 2]);

    let mut pristine = TypedArray::new();
    let err = pristine.insert_values(huge, &[0u64]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(pristine.array_type(), None);
    assert!(!pristine.is_initialized());

    a.push_back(2i64).unwrap();
    assert_eq!(a.values_string().unwrap(), "1 2");
}

#[test]
fn zero_count_is_a_no_op()
{
    let mut a = TypedArray::new();
    a.insert(100, &ten(), 50, 0, 1, 1).unwrap();
    assert_eq!(a.array_type(), None);
    assert_eq!(a.size(), 0);
}

#[test]
fn pending_arrays_refuse_content_writes()
{
    let controller = Arc::new(TextController::new(ArrayType::Int32, vec![3], "1 2 3"));
    let mut pending = TypedArray::with_heavy_data_controller(controller.clone());
    let source = ten();
    assert_eq!(
        pending.insert(0, &source, 0, 1, 1, 1).unwrap_err().kind(),
        ErrorKind::NotInitialized
    );
    assert_eq!(pending.push_back(1i32).unwrap_err().kind(), ErrorKind::NotInitialized);
    assert_eq!(pending.erase(0).unwrap_err().kind(), ErrorKind::NotInitialized);

    let mut a = ten();
    let unread = TypedArray::with_heavy_data_controller(controller);
    assert_eq!(
        a.insert(0, &unread, 0, 1, 1, 1).unwrap_err().kind(),
        ErrorKind::NotInitialized
    );
}

#[test]
fn insert_values_and_push_back()
{
    let mut a = TypedArray::new();
    a.insert_values(2, &[1.5f32, 2.5]).unwrap();
    assert_eq!(a.values_string().unwrap(), "0 0 1.5 2.5");
    a.push_back(7u64).unwrap();
    assert_eq!(a.array_type(), Some(ArrayType::Float32));
    assert_eq!(a.values_string().unwrap(), "0 0 1.5 2.5 7");
    a.insert_values::<i8>(0, &[]).unwrap();
    assert_eq!(a.size(), 5);
}

#[test]
fn push_back_amortized()
{
    let mut a = TypedArray::new();
    let mut reallocations = 0;
    let mut capacity = a.capacity();
    for i in 0..1000 {
        a.push_back(i as i64).unwrap();
        if a.capacity() != capacity {
            reallocations += 1;
            capacity = a.capacity();
        }
    }
    assert_eq!(a.size(), 1000);
    assert!(a.capacity() >= 1000);
    assert!(reallocations < 20, "{} reallocations", reallocations);
    assert_eq!(a.get_value::<i64>(999).unwrap(), 999);
}

#[test]
fn erase_shifts_down()
{
    let mut a = TypedArray::from_shape_vec(&[2, 3], (0..6).collect()).unwrap();
    a.erase(1).unwrap();
    assert_eq!(ints(&a), vec![0, 2, 3, 4, 5]);
    assert_eq!(a.dimensions(), vec![5]);
    a.erase(4).unwrap();
    assert_eq!(ints(&a), vec![0, 2, 3, 4]);
    assert_eq!(a.erase(4).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(TypedArray::new().erase(0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
}
