// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "dynarray"]
#![doc(html_root_url = "https://docs.rs/dynarray/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::len_without_is_empty,
    clippy::new_without_default,
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `dynarray` crate provides [`TypedArray`], a resizable numeric
//! container whose element type is chosen at runtime.
//!
//! - **Runtime element type**: one of the integer and floating point widths
//!   of [`ArrayType`], or text. All elements share the type; a different
//!   type needs an explicit `initialize`.
//! - **Strided copy**: [`TypedArray::insert`] copies `count` values from
//!   `start/stride` positions of one array into `start/stride` positions of
//!   another, converting between element types on the way.
//!   [`TypedArray::insert_within`] does the same inside one array, and is
//!   correct when the ranges overlap.
//! - **Shape**: an array carries a multi-dimensional shape on top of its
//!   flat storage. Growing the array through a flat operation flattens the
//!   shape to one dimension.
//! - **Heavy data**: an array may be bound to a [`HeavyDataController`]
//!   that loads the content on [`TypedArray::read`]. Until then the array
//!   is not initialized and content access fails.
//!
//! ## Example
//!
//! ```
//! use dynarray::{ArrayType, TypedArray};
//!
//! let source: TypedArray = (0..10).collect();
//! let mut even = TypedArray::new();
//! even.insert(0, &source, 0, 5, 2, 1).unwrap();
//! assert_eq!(even.values_string().unwrap(), "0 2 4 6 8");
//! assert_eq!(even.array_type(), Some(ArrayType::Int32));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`
//!   - Enables serialization support for serde 1.x
//! - `approx`
//!   - Implementations of traits from version 0.5 of the [`approx`] crate.
//!
//! The library logs through the [`log`] facade and never installs a logger.
//!
//! [`approx`]: https://docs.rs/approx/0.5
//! [`log`]: https://docs.rs/log/0.4

use std::sync::Arc;

#[macro_use]
mod macro_utils;
#[macro_use]
mod private;

mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod array_type;
mod arrayformat;
mod data_repr;
pub mod dimension;
mod element;
pub mod error;
mod heavy;
mod impl_constructors;
mod impl_heavy;
mod impl_insert;
mod impl_methods;
mod impl_resize;
pub mod prelude;

pub use crate::array_type::ArrayType;
pub use crate::element::{convert, Element, Scalar};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::heavy::{HeavyDataController, TextController};

use crate::data_repr::ArrayData;

/// A resizable, runtime-typed, multi-dimensional array.
///
/// The array owns one contiguous buffer (`capacity` elements allocated,
/// `size` populated) of the element type reported by
/// [`.array_type()`](TypedArray::array_type), plus a shape whose product is
/// always `size`.
///
/// An array is in one of three states:
///
/// - *pristine*: freshly created, no element type yet. The first write
///   picks the element type.
/// - *resident*: content is held in memory. [`.is_initialized()`] is `true`.
/// - *pending*: content is described by metadata but not in memory, either
///   because a heavy data controller has not been read yet or because the
///   content was [released](TypedArray::release). Content operations fail
///   with `NotInitialized` until [`.read()`](TypedArray::read) succeeds.
///
/// No operation is internally synchronized; share an array between threads
/// behind a lock.
///
/// [`.is_initialized()`]: TypedArray::is_initialized
#[derive(Clone)]
pub struct TypedArray {
    /// Resident storage; `None` while pristine or pending.
    data: Option<ArrayData>,
    /// Element type, kept while pending so a released array remembers it.
    array_type: Option<ArrayType>,
    /// Explicit shape; empty means one dimension of `size`.
    dimensions: Vec<usize>,
    size: usize,
    name: String,
    controller: Option<Arc<dyn HeavyDataController>>,
    /// Capacity requested while no storage existed.
    pending_reserve: usize,
}
