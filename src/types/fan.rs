// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan mode type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The fan speed requested by the user.
///
/// Host frameworks expose more fan levels than the device accepts; the
/// control layer folds these onto the device's `FAN_MAP` codes (`Diffuse`
/// behaves like `Quiet`, `On` like `Auto`, `Off` powers the unit down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FanMode {
    /// Fan (and unit) off.
    Off,
    /// Lowest, quietest speed.
    Quiet,
    /// Diffuse airflow; the device treats it as quiet.
    Diffuse,
    /// Speed 1.
    Low,
    /// Speed 2.
    Medium,
    /// Speed 3.
    Middle,
    /// Speed 4.
    High,
    /// Fan on, speed chosen by the unit.
    On,
    /// Automatic speed.
    Auto,
}

impl FanMode {
    /// Returns the fan mode name as used in logs and host interfaces.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Quiet => "QUIET",
            Self::Diffuse => "DIFFUSE",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::Middle => "MIDDLE",
            Self::High => "HIGH",
            Self::On => "ON",
            Self::Auto => "AUTO",
        }
    }

    /// Returns the `FAN_MAP` device code this host-level mode folds onto, or
    /// `None` for [`FanMode::Off`], which is a power-off rather than a speed.
    #[must_use]
    pub const fn device_code(&self) -> Option<&'static str> {
        match self {
            Self::Off => None,
            Self::Quiet | Self::Diffuse => Some("QUIET"),
            Self::Low => Some("1"),
            Self::Medium => Some("2"),
            Self::Middle => Some("3"),
            Self::High => Some("4"),
            Self::On | Self::Auto => Some("AUTO"),
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(Self::Off),
            "QUIET" => Ok(Self::Quiet),
            "DIFFUSE" => Ok(Self::Diffuse),
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "MIDDLE" => Ok(Self::Middle),
            "HIGH" => Ok(Self::High),
            "ON" => Ok(Self::On),
            "AUTO" => Ok(Self::Auto),
            _ => Err(ValueError::InvalidFanMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_code_folding() {
        assert_eq!(FanMode::Off.device_code(), None);
        assert_eq!(FanMode::Quiet.device_code(), Some("QUIET"));
        assert_eq!(FanMode::Diffuse.device_code(), Some("QUIET"));
        assert_eq!(FanMode::Low.device_code(), Some("1"));
        assert_eq!(FanMode::Medium.device_code(), Some("2"));
        assert_eq!(FanMode::Middle.device_code(), Some("3"));
        assert_eq!(FanMode::High.device_code(), Some("4"));
        assert_eq!(FanMode::On.device_code(), Some("AUTO"));
        assert_eq!(FanMode::Auto.device_code(), Some("AUTO"));
    }

    #[test]
    fn from_str_round_trip() {
        for mode in [
            FanMode::Off,
            FanMode::Quiet,
            FanMode::Diffuse,
            FanMode::Low,
            FanMode::Medium,
            FanMode::Middle,
            FanMode::High,
            FanMode::On,
            FanMode::Auto,
        ] {
            assert_eq!(mode.as_str().parse::<FanMode>().unwrap(), mode);
        }
    }

    #[test]
    fn from_str_invalid() {
        assert!(matches!(
            "TURBO".parse::<FanMode>(),
            Err(ValueError::InvalidFanMode(_))
        ));
    }
}
