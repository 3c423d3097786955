// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `smarthome_lib` library.
//!
//! Two failure kinds exist: a setter rejecting a value outside its domain
//! ([`Error::InvalidArgument`]), and a property lookup naming something that
//! is not part of a device's public surface ([`Error::NoSuchAttribute`]).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A setter was given a value outside its allowed domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValueError),

    /// The requested attribute is not exposed by the device.
    #[error("'{device}' object has no attribute '{attribute}'")]
    NoSuchAttribute {
        /// Kind of the device that was queried.
        device: String,
        /// The attribute name that was requested.
        attribute: String,
    },
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric setting is outside the allowed range.
    #[error("{setting} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        /// Name of the setting being validated.
        setting: &'static str,
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },

    /// An unknown fan speed was provided.
    #[error("speed must be 'Low', 'Medium', or 'High', got '{0}'")]
    InvalidFanSpeed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
