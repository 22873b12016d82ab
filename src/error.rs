// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// Boxed error produced by a heavy data controller.
pub type HeavyReadSource = Box<dyn Error + Send + Sync + 'static>;

/// An error from a `TypedArray` operation.
///
/// Every operation validates before it mutates, so an `Err` always means
/// the array was left exactly as it was before the call.
#[derive(Debug)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    source: Option<HeavyReadSource>,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }

    /// Wrap a failure reported by a heavy data controller.
    pub fn heavy_read(source: HeavyReadSource) -> Self {
        ArrayError {
            repr: ErrorKind::HeavyRead,
            source: Some(source),
        }
    }
}

/// Error code for an error related to a `TypedArray` operation.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// unrecognized or mismatched element type
    InvalidType = 1,
    /// zero or overflowing dimension
    InvalidShape,
    /// index or strided range outside of the array
    IndexOutOfRange,
    /// stride of zero
    InvalidStride,
    /// content accessed before a pending heavy data read
    NotInitialized,
    /// heavy data controller failed to supply data
    HeavyRead,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError {
    ArrayError { repr: k, source: None }
}

impl PartialEq for ErrorKind {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        *self as u8 == *rhs as u8
    }
}

impl Eq for ErrorKind {}

impl PartialEq for ArrayError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.source {
            Some(ref source) => Some(&**source as &(dyn Error + 'static)),
            None => None,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::InvalidType => "invalid or mismatched element type",
            ErrorKind::InvalidShape => "invalid shape (zero or overflowing dimension)",
            ErrorKind::IndexOutOfRange => "index out of range",
            ErrorKind::InvalidStride => "stride must be non-zero",
            ErrorKind::NotInitialized => "array content is not resident; read it first",
            ErrorKind::HeavyRead => "heavy data controller failed to read",
        };
        match self.source {
            Some(ref source) => write!(f, "{}: {}", description, source),
            None => f.write_str(description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_compare_by_discriminant() {
        assert_eq!(from_kind(ErrorKind::InvalidStride), ArrayError::from_kind(ErrorKind::InvalidStride));
        assert_ne!(from_kind(ErrorKind::InvalidStride), from_kind(ErrorKind::InvalidShape));
    }

    #[test]
    fn heavy_read_keeps_source() {
        let err = ArrayError::heavy_read("disk on fire".into());
        assert_eq!(err.kind(), ErrorKind::HeavyRead);
        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
        assert_eq!(err.to_string(), "heavy data controller failed to read: disk on fire");
    }
}
