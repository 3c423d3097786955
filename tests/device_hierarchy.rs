// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the device hierarchy through the public API.

use smarthome_lib::types::{Brightness, FanSpeed, Temperature};
use smarthome_lib::{AnyDevice, ConditionerUnit, DeviceKind, Error, Fan, Light, SmartDevice};

fn living_room() -> Vec<AnyDevice> {
    vec![
        Light::new("Living Room Light").into(),
        Fan::new("Bedroom Fan").into(),
        ConditionerUnit::new("Office AC").into(),
    ]
}

// ============================================================================
// Power State
// ============================================================================

mod power_state {
    use super::*;

    #[test]
    fn every_device_starts_off() {
        for device in living_room() {
            assert!(!device.is_on());
        }
    }

    #[test]
    fn operate_switches_every_device_on() {
        let mut devices = living_room();
        for device in &mut devices {
            device.operate();
        }
        assert!(devices.iter().all(SmartDevice::is_on));
    }

    #[test]
    fn setters_never_switch_power() {
        let mut light = Light::new("Desk Lamp");
        let mut fan = Fan::new("Desk Fan");
        let mut ac = ConditionerUnit::new("Desk AC");

        light.set_brightness(10).unwrap();
        fan.set_speed("Low").unwrap();
        ac.set_temperature(18).unwrap();

        assert!(!light.is_on());
        assert!(!fan.is_on());
        assert!(!ac.is_on());
    }

    #[test]
    fn status_follows_power() {
        let mut fan = Fan::new("Bedroom Fan");
        assert_eq!(fan.show_status(), "Bedroom Fan is OFF");
        fan.operate();
        assert_eq!(fan.show_status(), "Bedroom Fan is ON");
        fan.set_speed("Low").unwrap();
        assert_eq!(fan.show_status(), "Bedroom Fan is ON");
    }
}

// ============================================================================
// Setters
// ============================================================================

mod setters {
    use super::*;

    #[test]
    fn light_accepts_exactly_zero_to_hundred() {
        let mut light = Light::new("Desk Lamp");
        for value in -10..=110 {
            let before = light.brightness();
            let result = light.set_brightness(value);
            if (0..=100).contains(&value) {
                assert!(result.is_ok(), "{value} should be accepted");
                assert_eq!(i32::from(light.brightness()), value);
            } else {
                assert!(matches!(result, Err(Error::InvalidArgument(_))));
                assert_eq!(light.brightness(), before);
            }
        }
    }

    #[test]
    fn fan_accepts_only_named_speeds() {
        let mut fan = Fan::new("Ceiling Fan");
        for name in ["Low", "Medium", "High"] {
            fan.set_speed(name).unwrap();
            assert_eq!(fan.speed().as_str(), name);
        }
        for name in ["Off", "Max", "medium", "3"] {
            assert!(matches!(
                fan.set_speed(name),
                Err(Error::InvalidArgument(_))
            ));
            assert_eq!(fan.speed(), FanSpeed::High);
        }
    }

    #[test]
    fn conditioner_accepts_exactly_sixteen_to_thirty() {
        let mut ac = ConditionerUnit::new("Office AC");
        for value in 0..=40 {
            let before = ac.temperature();
            let result = ac.set_temperature(value);
            if (16..=30).contains(&value) {
                assert!(result.is_ok(), "{value} should be accepted");
                assert_eq!(i32::from(ac.temperature()), value);
            } else {
                assert!(matches!(result, Err(Error::InvalidArgument(_))));
                assert_eq!(ac.temperature(), before);
            }
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(Light::new("a").brightness(), Brightness::new(70).unwrap());
        assert_eq!(Fan::new("b").speed(), FanSpeed::Medium);
        assert_eq!(ConditionerUnit::new("c").temperature(), Temperature::new(24).unwrap());
    }
}

// ============================================================================
// Encapsulation
// ============================================================================

mod encapsulation {
    use super::*;

    #[test]
    fn private_attribute_lookup_fails() {
        for device in living_room() {
            for attr in ["__brightness", "__speed", "__temperature", "__is_on"] {
                let result = device.property(attr);
                assert!(
                    matches!(result, Err(Error::NoSuchAttribute { ref attribute, .. }) if attribute == attr),
                    "{attr} should not be readable on {}",
                    device.name()
                );
            }
        }
    }

    #[test]
    fn lookup_error_is_distinct_from_invalid_argument() {
        let light = Light::new("Living Room Light");
        let err = light.property("__is_on").unwrap_err();
        assert!(!matches!(err, Error::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "'Light' object has no attribute '__is_on'"
        );
    }

    #[test]
    fn snapshot_exposes_public_surface_only() {
        let mut ac = ConditionerUnit::new("Office AC");
        ac.operate();
        let json: serde_json::Value =
            serde_json::from_str(&ac.snapshot().to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Office AC",
                "kind": "ConditionerUnit",
                "is_on": true,
                "temperature": 24
            })
        );
    }

    #[test]
    fn snapshot_is_detached_from_device() {
        let mut light = Light::new("Living Room Light");
        let snapshot = light.snapshot();
        light.operate();
        light.set_brightness(20).unwrap();
        assert!(!snapshot.is_on);
        assert_eq!(snapshot.kind, DeviceKind::Light);
        assert_eq!(snapshot.get("brightness"), Some(serde_json::json!(70)));
    }
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn living_room_light() {
        let mut light = Light::new("Living Room Light");

        let message = light.operate();
        assert!(light.is_on());
        assert!(message.contains("— brightness 70%"));

        assert!(light.set_brightness(150).is_err());
        assert_eq!(light.brightness().value(), 70);

        light.set_brightness(85).unwrap();
        assert_eq!(light.brightness().value(), 85);
    }

    #[test]
    fn operate_messages() {
        let mut devices = living_room();
        let messages: Vec<String> = devices.iter_mut().map(SmartDevice::operate).collect();
        assert_eq!(
            messages,
            [
                "Living Room Light: Light turned on — brightness 70%",
                "Bedroom Fan: Fan turned on — speed Medium",
                "Office AC: AC turned on — temperature set to 24°C",
            ]
        );
    }
}
