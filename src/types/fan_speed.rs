// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed levels.
//!
//! # Device Methods
//!
//! Use [`FanSpeed`] with these [`Fan`](crate::Fan) methods:
//! - [`set_speed()`](crate::Fan::set_speed) - Set speed from its name
//! - [`set_speed_level()`](crate::Fan::set_speed_level) - Set a typed speed
//! - [`speed()`](crate::Fan::speed) - Query current speed

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Rotation speed of a fan.
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::FanSpeed;
///
/// let speed: FanSpeed = "High".parse().unwrap();
/// assert_eq!(speed, FanSpeed::High);
/// assert_eq!(FanSpeed::default(), FanSpeed::Medium);
///
/// assert!("Turbo".parse::<FanSpeed>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum FanSpeed {
    /// Slowest setting.
    Low,
    /// Middle setting.
    #[default]
    Medium,
    /// Fastest setting.
    High,
}

impl FanSpeed {
    /// All speeds, slowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the display name of the speed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.as_str() == s)
            .ok_or_else(|| ValueError::InvalidFanSpeed(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_speed_parses_known_names() {
        assert_eq!("Low".parse::<FanSpeed>().unwrap(), FanSpeed::Low);
        assert_eq!("Medium".parse::<FanSpeed>().unwrap(), FanSpeed::Medium);
        assert_eq!("High".parse::<FanSpeed>().unwrap(), FanSpeed::High);
    }

    #[test]
    fn fan_speed_rejects_unknown_names() {
        for name in ["", "Turbo", "high", "LOW", " Medium"] {
            assert_eq!(
                name.parse::<FanSpeed>(),
                Err(ValueError::InvalidFanSpeed(name.to_string()))
            );
        }
    }

    #[test]
    fn fan_speed_display_matches_parse() {
        for speed in FanSpeed::ALL {
            assert_eq!(speed.to_string().parse::<FanSpeed>().unwrap(), speed);
        }
    }

    #[test]
    fn fan_speed_ordering() {
        assert!(FanSpeed::Low < FanSpeed::Medium);
        assert!(FanSpeed::Medium < FanSpeed::High);
    }
}
