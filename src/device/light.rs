// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmable light.

use crate::error::Result;
use crate::state::Setting;
use crate::types::{Brightness, PowerState};

use super::{DeviceCore, DeviceKind, SmartDevice};

/// A light with an adjustable brightness.
///
/// New lights are off, at 70% brightness.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{Light, SmartDevice};
///
/// let mut light = Light::new("Living Room Light");
/// assert_eq!(light.operate(), "Living Room Light: Light turned on — brightness 70%");
///
/// assert!(light.set_brightness(150).is_err());
/// assert_eq!(light.brightness().value(), 70);
///
/// light.set_brightness(85).unwrap();
/// assert_eq!(light.brightness().value(), 85);
/// ```
///
/// The brightness can only be reached through its accessors:
///
/// ```compile_fail
/// use smarthome_lib::Light;
///
/// let mut light = Light::new("Living Room Light");
/// light.brightness = smarthome_lib::types::Brightness::MAX;
/// ```
#[derive(Debug, Clone)]
pub struct Light {
    core: DeviceCore,
    brightness: Brightness,
}

impl Light {
    /// Creates a light that is off, at the default brightness.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: DeviceCore::new(name),
            brightness: Brightness::DEFAULT,
        }
    }

    /// Returns the current brightness.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Sets the brightness percentage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `value` is outside [0, 100]. The brightness is left unchanged.
    pub fn set_brightness(&mut self, value: i32) -> Result<()> {
        let brightness = Brightness::new(value).inspect_err(|err| {
            tracing::warn!(device = %self.core.name(), error = %err, "Rejected brightness");
        })?;
        self.brightness = brightness;
        tracing::debug!(device = %self.core.name(), %brightness, "Brightness updated");
        Ok(())
    }
}

impl SmartDevice for Light {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Light
    }

    fn power_state(&self) -> PowerState {
        self.core.power()
    }

    fn setting(&self) -> Setting {
        Setting::Brightness(self.brightness)
    }

    fn operate(&mut self) -> String {
        self.core.activate();
        format!(
            "{}: Light turned on — brightness {}",
            self.core.name(),
            self.brightness
        )
    }
}
