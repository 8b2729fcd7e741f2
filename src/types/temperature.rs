// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature unit normalization and setpoint snapping.
//!
//! The device always works in Celsius; the host may display Fahrenheit.
//! [`UnitBridge`] converts between the two *exactly once per direction*: a
//! value crossing into the core is converted on entry, a value leaving is
//! converted on exit, and nothing in between ever re-converts. Feeding an
//! already-internal value back through a converting setter is the classic
//! double-conversion bug this contract exists to prevent.

use std::fmt;

/// The unit the host displays temperatures in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum DisplayUnit {
    /// Degrees Celsius (device-native).
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "°C"),
            Self::Fahrenheit => write!(f, "°F"),
        }
    }
}

/// Converts temperatures between display units and device-internal Celsius.
///
/// Both directions are exact linear transforms, so a single round trip is
/// loss-free within floating-point tolerance. Display-granularity rounding is
/// the host's concern; setpoint snapping is [`snap_setpoint`]'s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitBridge {
    unit: DisplayUnit,
}

impl UnitBridge {
    /// Creates a bridge for the given display unit.
    #[must_use]
    pub const fn new(unit: DisplayUnit) -> Self {
        Self { unit }
    }

    /// Returns the display unit this bridge converts to.
    #[must_use]
    pub const fn unit(&self) -> DisplayUnit {
        self.unit
    }

    /// Converts a device-internal Celsius value to the display unit.
    #[must_use]
    pub fn to_display(&self, celsius: f32) -> f32 {
        match self.unit {
            DisplayUnit::Celsius => celsius,
            DisplayUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Converts a display-unit value to device-internal Celsius.
    #[must_use]
    pub fn from_display(&self, value: f32) -> f32 {
        match self.unit {
            DisplayUnit::Celsius => value,
            DisplayUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// How the unit accepts target temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum TempMode {
    /// Whole-degree setpoints only, matched against `TEMP_MAP`.
    #[default]
    Discrete,
    /// Half-degree setpoints in the [10, 31] °C range.
    Continuous,
}

/// Continuous-mode setpoint floor, in Celsius.
pub const SETPOINT_MIN: f32 = 10.0;
/// Continuous-mode setpoint ceiling, in Celsius.
pub const SETPOINT_MAX: f32 = 31.0;

/// Snaps a target temperature (device-internal Celsius) to a value the unit
/// accepts.
///
/// Discrete units take the target as-is when its nearest whole degree is a
/// `TEMP_MAP` entry, and fall back to the table minimum otherwise.
/// Continuous units round to the nearest half degree and clamp to
/// [`SETPOINT_MIN`]..=[`SETPOINT_MAX`].
#[must_use]
pub fn snap_setpoint(mode: TempMode, target: f32) -> f32 {
    use crate::tables::TEMP_MAP;

    match mode {
        TempMode::Discrete => {
            #[allow(clippy::cast_possible_truncation)]
            let nearest = (target + 0.5).floor() as i32;
            if TEMP_MAP.lookup(&nearest.to_string()).is_some() {
                target
            } else {
                lookup_table_min()
            }
        }
        TempMode::Continuous => {
            let half_degrees = (2.0 * target).round() / 2.0;
            half_degrees.clamp(SETPOINT_MIN, SETPOINT_MAX)
        }
    }
}

/// The `TEMP_MAP` minimum as a float. The table holds whole-degree strings,
/// so the parse cannot fail.
fn lookup_table_min() -> f32 {
    crate::tables::TEMP_MAP
        .default_code()
        .parse()
        .unwrap_or(SETPOINT_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn celsius_bridge_is_identity() {
        let bridge = UnitBridge::new(DisplayUnit::Celsius);
        assert!(close(bridge.to_display(21.5), 21.5));
        assert!(close(bridge.from_display(21.5), 21.5));
    }

    #[test]
    fn fahrenheit_bridge_converts() {
        let bridge = UnitBridge::new(DisplayUnit::Fahrenheit);
        assert!(close(bridge.to_display(0.0), 32.0));
        assert!(close(bridge.to_display(20.0), 68.0));
        assert!(close(bridge.from_display(68.0), 20.0));
    }

    #[test]
    fn single_round_trip_is_loss_free() {
        let bridge = UnitBridge::new(DisplayUnit::Fahrenheit);
        for celsius in [10.0_f32, 16.0, 21.3, 25.5, 31.0] {
            assert!(close(bridge.from_display(bridge.to_display(celsius)), celsius));
        }
    }

    #[test]
    fn continuous_snaps_to_half_degrees() {
        assert!(close(snap_setpoint(TempMode::Continuous, 21.3), 21.5));
        assert!(close(snap_setpoint(TempMode::Continuous, 21.2), 21.0));
        assert!(close(snap_setpoint(TempMode::Continuous, 21.75), 22.0));
    }

    #[test]
    fn continuous_clamps_to_range() {
        assert!(close(snap_setpoint(TempMode::Continuous, 9.0), 10.0));
        assert!(close(snap_setpoint(TempMode::Continuous, 32.0), 31.0));
    }

    #[test]
    fn discrete_keeps_matching_target() {
        // 21.3 rounds to 21, which is a TEMP_MAP entry; the target itself is
        // kept rather than truncated.
        assert!(close(snap_setpoint(TempMode::Discrete, 21.3), 21.3));
        assert!(close(snap_setpoint(TempMode::Discrete, 16.0), 16.0));
        assert!(close(snap_setpoint(TempMode::Discrete, 31.0), 31.0));
    }

    #[test]
    fn discrete_falls_back_to_table_minimum() {
        assert!(close(snap_setpoint(TempMode::Discrete, 35.0), 16.0));
        assert!(close(snap_setpoint(TempMode::Discrete, 5.0), 16.0));
    }
}
