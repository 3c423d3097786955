// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The smart device hierarchy.
//!
//! Every device implements [`SmartDevice`]: it has a name, an on/off state,
//! an `operate` action and exactly one validated setting. The concrete
//! variants are [`Light`], [`Fan`] and [`ConditionerUnit`]; [`AnyDevice`]
//! wraps them so a heterogeneous list can be driven without trait objects.
//!
//! The power state can only be switched through the device's own actions.
//! There is no setter for it, and the field holding it is private.
//!
//! ```compile_fail
//! use smarthome_lib::Light;
//!
//! let mut light = Light::new("Hallway");
//! light.core.activate();
//! ```
//!
//! Once on, a device stays on: nothing outside the hierarchy can switch it
//! off again.
//!
//! ```compile_fail
//! use smarthome_lib::{Light, SmartDevice};
//!
//! let mut light = Light::new("Hallway");
//! light.operate();
//! light.deactivate();
//! ```

mod conditioner;
mod fan;
mod light;

pub use conditioner::ConditionerUnit;
pub use fan::Fan;
pub use light::Light;

use std::fmt;

use crate::error::{Error, Result};
use crate::state::{DeviceSnapshot, Setting};
use crate::types::PowerState;

/// The concrete kind of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DeviceKind {
    /// A dimmable light.
    Light,
    /// A three-speed fan.
    Fan,
    /// An air conditioning unit.
    ConditionerUnit,
}

impl DeviceKind {
    /// Returns the type name used in error messages and snapshots.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Fan => "Fan",
            Self::ConditionerUnit => "ConditionerUnit",
        }
    }

    /// Returns the short label used in action descriptions.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Fan => "Fan",
            Self::ConditionerUnit => "AC",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Capability shared by all smart devices.
///
/// Implementors supply the accessors and the `operate` action; status text,
/// snapshots and property lookup are derived from those.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{ConditionerUnit, SmartDevice};
///
/// let mut ac = ConditionerUnit::new("Office AC");
/// assert_eq!(ac.show_status(), "Office AC is OFF");
///
/// let message = ac.operate();
/// assert_eq!(message, "Office AC: AC turned on — temperature set to 24°C");
/// assert_eq!(ac.show_status(), "Office AC is ON");
/// ```
pub trait SmartDevice {
    /// Returns the device name.
    fn name(&self) -> &str;

    /// Returns the device variant.
    fn kind(&self) -> DeviceKind;

    /// Returns the current power state.
    fn power_state(&self) -> PowerState;

    /// Returns the variant's current setting.
    fn setting(&self) -> Setting;

    /// Switches the device on and describes what it did.
    ///
    /// After this call [`is_on`](Self::is_on) returns `true`.
    fn operate(&mut self) -> String;

    /// Returns `true` if the device is switched on.
    fn is_on(&self) -> bool {
        self.power_state().is_on()
    }

    /// Returns `"<name> is ON"` or `"<name> is OFF"`.
    fn show_status(&self) -> String {
        format!("{} is {}", self.name(), self.power_state())
    }

    /// Takes a read-only snapshot of the device's public surface.
    fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            name: self.name().to_string(),
            kind: self.kind(),
            is_on: self.is_on(),
            setting: self.setting(),
        }
    }

    /// Reads a public property by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchAttribute`] if `key` does not name a public
    /// property of this device.
    fn property(&self, key: &str) -> Result<serde_json::Value> {
        self.snapshot()
            .get(key)
            .ok_or_else(|| Error::NoSuchAttribute {
                device: self.kind().type_name().to_string(),
                attribute: key.to_string(),
            })
    }
}

/// Name and power state shared by every device variant.
///
/// Only the owning device can reach this, so power transitions stay inside
/// the hierarchy.
#[derive(Debug, Clone)]
pub(crate) struct DeviceCore {
    name: String,
    power: PowerState,
}

impl DeviceCore {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power: PowerState::Off,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn power(&self) -> PowerState {
        self.power
    }

    pub(crate) fn activate(&mut self) {
        self.power = PowerState::On;
        tracing::debug!(device = %self.name, "Device activated");
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn deactivate(&mut self) {
        self.power = PowerState::Off;
        tracing::debug!(device = %self.name, "Device deactivated");
    }
}

/// Wrapper enum for the concrete device types.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{AnyDevice, Fan, Light, SmartDevice};
///
/// let mut devices: Vec<AnyDevice> = vec![
///     Light::new("Living Room Light").into(),
///     Fan::new("Bedroom Fan").into(),
/// ];
///
/// for device in &mut devices {
///     device.operate();
/// }
/// assert!(devices.iter().all(SmartDevice::is_on));
/// ```
#[derive(Debug, Clone)]
pub enum AnyDevice {
    /// A dimmable light.
    Light(Light),
    /// A three-speed fan.
    Fan(Fan),
    /// An air conditioning unit.
    ConditionerUnit(ConditionerUnit),
}

impl AnyDevice {
    /// Returns the wrapped light, if any.
    #[must_use]
    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Self::Light(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the wrapped light mutably, if any.
    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match self {
            Self::Light(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the wrapped fan, if any.
    #[must_use]
    pub fn as_fan(&self) -> Option<&Fan> {
        match self {
            Self::Fan(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the wrapped fan mutably, if any.
    pub fn as_fan_mut(&mut self) -> Option<&mut Fan> {
        match self {
            Self::Fan(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the wrapped air conditioning unit, if any.
    #[must_use]
    pub fn as_conditioner(&self) -> Option<&ConditionerUnit> {
        match self {
            Self::ConditionerUnit(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the wrapped air conditioning unit mutably, if any.
    pub fn as_conditioner_mut(&mut self) -> Option<&mut ConditionerUnit> {
        match self {
            Self::ConditionerUnit(d) => Some(d),
            _ => None,
        }
    }
}

impl SmartDevice for AnyDevice {
    fn name(&self) -> &str {
        match self {
            Self::Light(d) => d.name(),
            Self::Fan(d) => d.name(),
            Self::ConditionerUnit(d) => d.name(),
        }
    }

    fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(d) => d.kind(),
            Self::Fan(d) => d.kind(),
            Self::ConditionerUnit(d) => d.kind(),
        }
    }

    fn power_state(&self) -> PowerState {
        match self {
            Self::Light(d) => d.power_state(),
            Self::Fan(d) => d.power_state(),
            Self::ConditionerUnit(d) => d.power_state(),
        }
    }

    fn setting(&self) -> Setting {
        match self {
            Self::Light(d) => d.setting(),
            Self::Fan(d) => d.setting(),
            Self::ConditionerUnit(d) => d.setting(),
        }
    }

    fn operate(&mut self) -> String {
        match self {
            Self::Light(d) => d.operate(),
            Self::Fan(d) => d.operate(),
            Self::ConditionerUnit(d) => d.operate(),
        }
    }
}

impl From<Light> for AnyDevice {
    fn from(device: Light) -> Self {
        Self::Light(device)
    }
}

impl From<Fan> for AnyDevice {
    fn from(device: Fan) -> Self {
        Self::Fan(device)
    }
}

impl From<ConditionerUnit> for AnyDevice {
    fn from(device: ConditionerUnit) -> Self {
        Self::ConditionerUnit(device)
    }
}
