// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature for air conditioning units.

use std::fmt;

use crate::error::ValueError;

/// Target temperature in degrees Celsius (16-30).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::Temperature;
///
/// let temp = Temperature::new(21).unwrap();
/// assert_eq!(temp.value(), 21);
/// assert_eq!(temp.to_string(), "21°C");
///
/// assert!(Temperature::new(15).is_err());
/// assert!(Temperature::new(31).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Temperature(u8);

impl Temperature {
    /// Lowest supported setpoint.
    pub const MIN: Self = Self(16);

    /// Highest supported setpoint.
    pub const MAX: Self = Self(30);

    /// Factory setpoint.
    pub const DEFAULT: Self = Self(24);

    /// Creates a new temperature setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [16, 30].
    pub fn new(value: i32) -> Result<Self, ValueError> {
        let min = i32::from(Self::MIN.0);
        let max = i32::from(Self::MAX.0);
        match u8::try_from(value) {
            Ok(v) if (min..=max).contains(&value) => Ok(Self(v)),
            _ => Err(ValueError::OutOfRange {
                setting: "temperature",
                min,
                max,
                actual: value,
            }),
        }
    }

    /// Returns the setpoint in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl TryFrom<i32> for Temperature {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for i32 {
    fn from(value: Temperature) -> Self {
        i32::from(value.0)
    }
}
