// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state views.
//!
//! A [`DeviceSnapshot`] is a serializable copy of everything a device exposes
//! publicly. It backs [`SmartDevice::property`](crate::SmartDevice::property),
//! which is the only by-name way to read device state.
//!
//! # Examples
//!
//! ```
//! use smarthome_lib::{Fan, SmartDevice};
//! use smarthome_lib::state::Setting;
//! use smarthome_lib::types::FanSpeed;
//!
//! let mut fan = Fan::new("Bedroom Fan");
//! fan.operate();
//!
//! let snapshot = fan.snapshot();
//! assert!(snapshot.is_on);
//! assert_eq!(snapshot.setting, Setting::Speed(FanSpeed::Medium));
//! ```

mod snapshot;

pub use snapshot::{DeviceSnapshot, Setting};
