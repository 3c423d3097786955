// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `smarthome_lib` - a small model of smart-home devices.
//!
//! Each device has a name, an on/off state and one adjustable setting that
//! is validated on every write. Device state is private: it can only be
//! read through accessors and changed through the device's own operations.
//!
//! # Supported Devices
//!
//! - [`Light`]: brightness, 0-100% (default 70%)
//! - [`Fan`]: speed, Low / Medium / High (default Medium)
//! - [`ConditionerUnit`]: temperature, 16-30°C (default 24°C)
//!
//! # Quick Start
//!
//! ```
//! use smarthome_lib::{Light, SmartDevice};
//!
//! fn main() -> smarthome_lib::Result<()> {
//!     let mut light = Light::new("Living Room Light");
//!
//!     println!("{}", light.operate());
//!     println!("{}", light.show_status());
//!
//!     light.set_brightness(85)?;
//!     assert_eq!(light.brightness().value(), 85);
//!     Ok(())
//! }
//! ```
//!
//! ## Driving Several Devices
//!
//! ```
//! use smarthome_lib::{AnyDevice, ConditionerUnit, Fan, Light, SmartDevice};
//!
//! let mut devices: Vec<AnyDevice> = vec![
//!     Light::new("Living Room Light").into(),
//!     Fan::new("Bedroom Fan").into(),
//!     ConditionerUnit::new("Office AC").into(),
//! ];
//!
//! for device in &mut devices {
//!     println!("{}", device.operate());
//!     println!("{}", device.show_status());
//! }
//!
//! // Anything outside the public surface is rejected.
//! assert!(devices[0].property("__brightness").is_err());
//! ```

pub mod device;
pub mod error;
pub mod state;
pub mod types;

pub use device::{AnyDevice, ConditionerUnit, DeviceKind, Fan, Light, SmartDevice};
pub use error::{Error, Result, ValueError};
pub use state::{DeviceSnapshot, Setting};
pub use types::{Brightness, FanSpeed, PowerState, Temperature};
