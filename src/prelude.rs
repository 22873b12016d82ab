// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! dynarray prelude.
//!
//! The types and traits needed by nearly every user, importable as a group.
//!
//! ```
//! use dynarray::prelude::*;
//!
//! let mut a = TypedArray::new();
//! a.initialize(ArrayType::Float64, 3).unwrap();
//! assert_eq!(a.size(), 3);
//! ```

#[doc(no_inline)]
pub use crate::{TypedArray, ArrayType};

#[doc(no_inline)]
pub use crate::{ArrayError, ErrorKind};

#[doc(no_inline)]
pub use crate::{Element, HeavyDataController};
