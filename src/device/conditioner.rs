// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioning unit.

use crate::error::Result;
use crate::state::Setting;
use crate::types::{PowerState, Temperature};

use super::{DeviceCore, DeviceKind, SmartDevice};

/// An air conditioning unit with a temperature setpoint.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{ConditionerUnit, SmartDevice};
///
/// let mut ac = ConditionerUnit::new("Office AC");
/// ac.set_temperature(21).unwrap();
/// assert_eq!(ac.temperature().value(), 21);
///
/// assert!(ac.set_temperature(35).is_err());
/// assert_eq!(ac.temperature().value(), 21);
/// ```
///
/// ```compile_fail
/// use smarthome_lib::ConditionerUnit;
///
/// let ac = ConditionerUnit::new("Office AC");
/// let _ = ac.core;
/// ```
#[derive(Debug, Clone)]
pub struct ConditionerUnit {
    core: DeviceCore,
    temperature: Temperature,
}

impl ConditionerUnit {
    /// Creates a unit that is off, set to 24°C.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: DeviceCore::new(name),
            temperature: Temperature::DEFAULT,
        }
    }

    /// Returns the current setpoint.
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Sets the setpoint in degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `value` is outside [16, 30]. The setpoint is left unchanged.
    pub fn set_temperature(&mut self, value: i32) -> Result<()> {
        let temperature = Temperature::new(value).inspect_err(|err| {
            tracing::warn!(device = %self.core.name(), error = %err, "Rejected temperature");
        })?;
        self.temperature = temperature;
        tracing::debug!(device = %self.core.name(), %temperature, "Temperature updated");
        Ok(())
    }
}

impl SmartDevice for ConditionerUnit {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::ConditionerUnit
    }

    fn power_state(&self) -> PowerState {
        self.core.power()
    }

    fn setting(&self) -> Setting {
        Setting::Temperature(self.temperature)
    }

    fn operate(&mut self) -> String {
        self.core.activate();
        format!(
            "{}: AC turned on — temperature set to {}",
            self.core.name(),
            self.temperature
        )
    }
}
