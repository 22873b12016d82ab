// Copyright 2024 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::Arc;

use log::debug;

use crate::error::ArrayError;
use crate::{HeavyDataController, TypedArray};

/// # Heavy data
impl TypedArray {
    /// Bind the array to `controller`, or unbind it with `None`.
    ///
    /// Nothing is read. A pristine array becomes pending and reports the
    /// controller's declared type and shape.
    pub fn set_heavy_data_controller(&mut self, controller: Option<Arc<dyn HeavyDataController>>) {
        match controller {
            Some(ref c) => debug!("attached {} heavy data controller", c.name()),
            None => debug!("detached heavy data controller"),
        }
        self.controller = controller;
    }

    /// Return the bound controller, if any.
    pub fn heavy_data_controller(&self) -> Option<&Arc<dyn HeavyDataController>> {
        self.controller.as_ref()
    }

    /// Materialize pending content through the heavy data controller.
    ///
    /// A resident array, or one without a controller, is left alone. On
    /// success the array adopts the type, shape and content supplied by the
    /// controller and keeps its own name and controller.
    ///
    /// ***Errors*** with `HeavyRead` if the controller fails, carrying the
    /// controller's error as `source()`. The array is unchanged.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use dynarray::{ArrayType, TextController, TypedArray};
    ///
    /// let controller = TextController::new(ArrayType::Float32, vec![2, 2], "1 2 3 4");
    /// let mut a = TypedArray::with_heavy_data_controller(Arc::new(controller));
    /// assert!(!a.is_initialized());
    /// assert!(a.get_value::<f32>(0).is_err());
    ///
    /// a.read().unwrap();
    /// assert!(a.is_initialized());
    /// assert_eq!(a.get_value::<f32>(3).unwrap(), 4.);
    /// assert_eq!(a.dimensions_string(), "2 2");
    /// ```
    pub fn read(&mut self) -> Result<(), ArrayError> {
        if self.data.is_some() {
            return Ok(());
        }
        let controller = match self.controller {
            Some(ref controller) => Arc::clone(controller),
            None => return Ok(()),
        };
        let loaded = controller.read().map_err(ArrayError::heavy_read)?;
        let mut data = match loaded.data {
            Some(data) => data,
            None => {
                return Err(ArrayError::heavy_read(
                    "controller returned an array without resident content".into(),
                ))
            }
        };
        data.apply_pending_reserve(self.pending_reserve);
        debug!(
            "read {} elements of {} through {} controller",
            data.len(),
            data.array_type(),
            controller.name()
        );
        self.array_type = Some(data.array_type());
        self.size = data.len();
        self.dimensions = loaded.dimensions;
        self.data = Some(data);
        self.pending_reserve = 0;
        Ok(())
    }

    /// Drop the resident content.
    ///
    /// The element type, shape, size and controller are kept, so a later
    /// `read` can bring the content back. Until then the array is pending.
    ///
    /// ```
    /// use dynarray::TypedArray;
    ///
    /// let mut a: TypedArray = (0..6u64).collect();
    /// a.release();
    /// assert!(!a.is_initialized());
    /// assert_eq!(a.size(), 6);
    /// assert_eq!(a.capacity(), 0);
    /// assert!(a.values_string().is_err());
    /// ```
    pub fn release(&mut self) {
        if let Some(data) = self.data.take() {
            debug!("released {} elements of {}", data.len(), data.array_type());
        }
        self.pending_reserve = 0;
    }
}
