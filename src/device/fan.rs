// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Three-speed fan.

use crate::error::Result;
use crate::state::Setting;
use crate::types::{FanSpeed, PowerState};

use super::{DeviceCore, DeviceKind, SmartDevice};

/// A fan with three speed levels.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{Fan, SmartDevice};
/// use smarthome_lib::types::FanSpeed;
///
/// let mut fan = Fan::new("Bedroom Fan");
/// assert_eq!(fan.operate(), "Bedroom Fan: Fan turned on — speed Medium");
///
/// fan.set_speed("High").unwrap();
/// assert_eq!(fan.speed(), FanSpeed::High);
///
/// assert!(fan.set_speed("Turbo").is_err());
/// assert_eq!(fan.speed(), FanSpeed::High);
/// ```
///
/// ```compile_fail
/// use smarthome_lib::Fan;
///
/// let fan = Fan::new("Bedroom Fan");
/// let _ = fan.speed;
/// ```
#[derive(Debug, Clone)]
pub struct Fan {
    core: DeviceCore,
    speed: FanSpeed,
}

impl Fan {
    /// Creates a fan that is off, at medium speed.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: DeviceCore::new(name),
            speed: FanSpeed::default(),
        }
    }

    /// Returns the current speed.
    #[must_use]
    pub fn speed(&self) -> FanSpeed {
        self.speed
    }

    /// Sets the speed from its name (`"Low"`, `"Medium"` or `"High"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `speed` is not one of the three names. The speed is left unchanged.
    pub fn set_speed(&mut self, speed: &str) -> Result<()> {
        let level = speed.parse::<FanSpeed>().inspect_err(|err| {
            tracing::warn!(device = %self.core.name(), error = %err, "Rejected fan speed");
        })?;
        self.set_speed_level(level);
        Ok(())
    }

    /// Sets the speed.
    pub fn set_speed_level(&mut self, speed: FanSpeed) {
        self.speed = speed;
        tracing::debug!(device = %self.core.name(), %speed, "Fan speed updated");
    }
}

impl SmartDevice for Fan {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Fan
    }

    fn power_state(&self) -> PowerState {
        self.core.power()
    }

    fn setting(&self) -> Setting {
        Setting::Speed(self.speed)
    }

    fn operate(&mut self) -> String {
        self.core.activate();
        format!("{}: Fan turned on — speed {}", self.core.name(), self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValueError};

    #[test]
    fn new_fan_defaults() {
        let fan = Fan::new("Ceiling Fan");
        assert!(!fan.is_on());
        assert_eq!(fan.speed(), FanSpeed::Medium);
    }

    #[test]
    fn operate_reports_speed() {
        let mut fan = Fan::new("Ceiling Fan");
        fan.set_speed_level(FanSpeed::Low);
        assert_eq!(fan.operate(), "Ceiling Fan: Fan turned on — speed Low");
        assert!(fan.is_on());
    }

    #[test]
    fn set_speed_accepts_every_level() {
        let mut fan = Fan::new("Ceiling Fan");
        for speed in FanSpeed::ALL {
            fan.set_speed(speed.as_str()).unwrap();
            assert_eq!(fan.speed(), speed);
        }
    }

    #[test]
    fn set_speed_rejects_unknown_level() {
        let mut fan = Fan::new("Ceiling Fan");
        let err = fan.set_speed("Turbo").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument(ValueError::InvalidFanSpeed("Turbo".to_string()))
        );
        assert_eq!(fan.speed(), FanSpeed::Medium);
    }
}
