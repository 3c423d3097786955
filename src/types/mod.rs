// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device settings.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so a device can never hold an out-of-domain setting.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of a device
//! - [`Brightness`] - Light brightness level (0-100%)
//! - [`FanSpeed`] - Fan speed (Low, Medium, High)
//! - [`Temperature`] - Air conditioning setpoint (16-30°C)

mod brightness;
mod fan_speed;
mod power;
mod temperature;

pub use brightness::Brightness;
pub use fan_speed::FanSpeed;
pub use power::PowerState;
pub use temperature::Temperature;
