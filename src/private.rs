// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sealing for `Element`.
//!
//! The storage enum has one variant per element type, so the set of
//! element types is closed: nobody outside this crate may add one.

/// Public but unreachable from outside the crate, so it cannot be named
/// in a foreign `Element` impl.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// Sealed; cannot be implemented outside of `dynarray`.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    }
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
