use dynarray::prelude::*;

use std::str::FromStr;

#[test]
fn names_and_precisions()
{
    let table = [
        (ArrayType::Int8, "Char", 1),
        (ArrayType::Int16, "Short", 2),
        (ArrayType::Int32, "Int", 4),
        (ArrayType::Int64, "Int", 8),
        (ArrayType::UInt8, "UChar", 1),
        (ArrayType::UInt16, "UShort", 2),
        (ArrayType::UInt32, "UInt", 4),
        (ArrayType::UInt64, "UInt", 8),
        (ArrayType::Float32, "Float", 4),
        (ArrayType::Float64, "Float", 8),
        (ArrayType::String, "String", 0),
    ];
    for &(ty, name, precision) in &table {
        assert_eq!(ty.name(), name);
        assert_eq!(ty.precision(), precision);
        assert_eq!(ArrayType::from_properties(name, precision).unwrap(), ty);
        assert_eq!(ty.is_numeric(), ty != ArrayType::String);
    }
    assert_eq!(table.len(), ArrayType::ALL.len());
}

#[test]
fn parse_labels()
{
    for &ty in ArrayType::ALL.iter() {
        assert_eq!(ArrayType::from_str(&ty.to_string()).unwrap(), ty);
        assert_eq!(ty.to_string().to_lowercase().parse::<ArrayType>().unwrap(), ty);
    }
    assert_eq!("float64".parse::<ArrayType>().unwrap(), ArrayType::Float64);
    for bad in &["", "Int128", "Complex64", "Float"] {
        let err = bad.parse::<ArrayType>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }
}

#[test]
fn unknown_type_never_reaches_an_array()
{
    let mut a = TypedArray::from_vec(vec![1i8, 2]);
    let result = "Quad".parse::<ArrayType>().and_then(|ty| a.initialize(ty, 4));
    assert!(result.is_err());
    assert_eq!(a.array_type(), Some(ArrayType::Int8));
    assert_eq!(a.size(), 2);
}

#[test]
fn string_precision_is_ignored()
{
    assert_eq!(ArrayType::from_properties("String", 17).unwrap(), ArrayType::String);
    assert_eq!(
        ArrayType::from_properties("Int", 2).unwrap_err().kind(),
        ErrorKind::InvalidType
    );
}
