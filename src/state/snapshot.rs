// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only device snapshots.

use serde_json::Value;

use crate::device::DeviceKind;
use crate::types::{Brightness, FanSpeed, Temperature};

/// The single adjustable setting carried by each device variant.
///
/// Serialized under the name of the variant's getter, so a light snapshot
/// carries a `brightness` key, a fan a `speed` key and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    /// Light brightness.
    Brightness(Brightness),
    /// Fan speed.
    Speed(FanSpeed),
    /// Air conditioning setpoint.
    Temperature(Temperature),
}

impl Setting {
    /// Returns the public property name of this setting.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Brightness(_) => "brightness",
            Self::Speed(_) => "speed",
            Self::Temperature(_) => "temperature",
        }
    }

    /// Returns the setting as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Brightness(b) => Value::from(b.value()),
            Self::Speed(s) => Value::from(s.as_str()),
            Self::Temperature(t) => Value::from(t.value()),
        }
    }
}

/// Point-in-time copy of a device's public surface.
///
/// Snapshots only ever contain what the device exposes through its
/// accessors. They cannot be used to modify the device they were taken from.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{Light, SmartDevice};
///
/// let light = Light::new("Desk Lamp");
/// let snapshot = light.snapshot();
///
/// assert_eq!(snapshot.name, "Desk Lamp");
/// assert!(!snapshot.is_on);
/// assert_eq!(snapshot.get("brightness"), Some(serde_json::json!(70)));
/// assert_eq!(snapshot.get("__brightness"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceSnapshot {
    /// Device name.
    pub name: String,
    /// Device variant.
    pub kind: DeviceKind,
    /// Whether the device was on when the snapshot was taken.
    pub is_on: bool,
    /// The variant's setting.
    #[serde(flatten)]
    pub setting: Setting,
}

impl DeviceSnapshot {
    /// Looks up a public property by name.
    ///
    /// Returns `None` for anything that is not one of `name`, `kind`,
    /// `is_on`, or the variant's setting key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "name" => Some(Value::from(self.name.as_str())),
            "kind" => Some(Value::from(self.kind.type_name())),
            "is_on" => Some(Value::from(self.is_on)),
            k if k == self.setting.key() => Some(self.setting.to_value()),
            _ => None,
        }
    }

    /// Renders the snapshot as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
