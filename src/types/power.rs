// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of a device.

use std::fmt;

/// Represents whether a device is switched on.
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::PowerState;
///
/// assert_eq!(PowerState::default(), PowerState::Off);
/// assert_eq!(PowerState::On.as_str(), "ON");
/// assert_eq!(PowerState::from(false), PowerState::Off);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the status text representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns `true` if this is [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_as_str() {
        assert_eq!(PowerState::Off.as_str(), "OFF");
        assert_eq!(PowerState::On.as_str(), "ON");
    }

    #[test]
    fn power_state_from_bool() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert_eq!(PowerState::from(false), PowerState::Off);
    }

    #[test]
    fn power_state_is_on() {
        assert!(PowerState::On.is_on());
        assert!(!PowerState::Off.is_on());
    }

    #[test]
    fn power_state_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&PowerState::On).unwrap(), "\"ON\"");
    }
}
