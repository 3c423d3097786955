// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Demo program: drive one device of each kind and print a transcript.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin smarthome-demo
//! SMARTHOME_LOG=smarthome_lib=debug cargo run --bin smarthome-demo
//! ```
//!
//! The transcript goes to stdout; logs go to stderr.

mod config;

use std::io::{self, Write};

use smarthome_lib::{AnyDevice, ConditionerUnit, Fan, Light, SmartDevice};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Internal attribute names the demo tries to read from outside.
const PRIVATE_ATTRIBUTES: [&str; 4] = ["__brightness", "__speed", "__temperature", "__is_on"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    run(&config, &mut stdout)
}

fn run(config: &Config, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut devices: Vec<AnyDevice> = vec![
        Light::new(config.devices.light.as_str()).into(),
        Fan::new(config.devices.fan.as_str()).into(),
        ConditionerUnit::new(config.devices.conditioner.as_str()).into(),
    ];
    tracing::info!(count = devices.len(), "Created demo devices");

    for device in &mut devices {
        writeln!(out, "{}", device.operate())?;
        writeln!(out, "{}", device.show_status())?;
        writeln!(out)?;
    }

    writeln!(out, "Attempting direct access to private attributes…")?;
    for attr in PRIVATE_ATTRIBUTES {
        for device in &devices {
            match device.property(attr) {
                Ok(value) => writeln!(out, "{value}")?,
                Err(err) => writeln!(out, "{}: {err}", device.name())?,
            }
        }
    }
    writeln!(out)?;

    for device in &mut devices {
        match device {
            AnyDevice::Light(light) => light.set_brightness(85)?,
            AnyDevice::Fan(fan) => fan.set_speed("High")?,
            AnyDevice::ConditionerUnit(ac) => ac.set_temperature(21)?,
        }
    }

    writeln!(out, "After using setters:")?;
    for device in &devices {
        match device {
            AnyDevice::Light(light) => {
                writeln!(out, "{} brightness: {}", light.name(), light.brightness())?;
            }
            AnyDevice::Fan(fan) => writeln!(out, "{} speed: {}", fan.name(), fan.speed())?,
            AnyDevice::ConditionerUnit(ac) => {
                writeln!(out, "{} temperature: {}", ac.name(), ac.temperature())?;
            }
        }
    }

    Ok(())
}
