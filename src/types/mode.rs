// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode and reportable action types.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The operating mode requested by the user.
///
/// # Examples
///
/// ```
/// use cn105_climate::types::ClimateMode;
///
/// assert_eq!(ClimateMode::Cool.as_str(), "COOL");
/// assert_eq!("heat".parse::<ClimateMode>().unwrap(), ClimateMode::Heat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ClimateMode {
    /// Heating.
    Heat,
    /// Cooling.
    Cool,
    /// Dehumidifying.
    Dry,
    /// Heat or cool automatically around the setpoint.
    Auto,
    /// Circulate air without heating or cooling.
    FanOnly,
    /// Unit powered down.
    Off,
}

impl ClimateMode {
    /// Returns the mode name as used in logs and host interfaces.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heat => "HEAT",
            Self::Cool => "COOL",
            Self::Dry => "DRY",
            Self::Auto => "AUTO",
            Self::FanOnly => "FAN_ONLY",
            Self::Off => "OFF",
        }
    }

    /// Returns the `MODE_MAP` device code for this mode, or `None` for
    /// [`ClimateMode::Off`], which is a power-off rather than a mode.
    #[must_use]
    pub const fn device_code(&self) -> Option<&'static str> {
        match self {
            Self::Heat => Some("HEAT"),
            Self::Cool => Some("COOL"),
            Self::Dry => Some("DRY"),
            Self::Auto => Some("AUTO"),
            Self::FanOnly => Some("FAN"),
            Self::Off => None,
        }
    }
}

impl fmt::Display for ClimateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClimateMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HEAT" => Ok(Self::Heat),
            "COOL" => Ok(Self::Cool),
            "DRY" => Ok(Self::Dry),
            "AUTO" => Ok(Self::Auto),
            "FAN_ONLY" | "FAN" => Ok(Self::FanOnly),
            "OFF" => Ok(Self::Off),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}

/// The action the unit is currently performing, as inferred from telemetry.
///
/// Distinct from [`ClimateMode`]: a unit in `Heat` mode that has reached its
/// setpoint reports `Idle`, not `Heating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ClimateAction {
    /// Actively heating.
    Heating,
    /// Actively cooling.
    Cooling,
    /// Actively dehumidifying.
    Drying,
    /// Circulating air only.
    Fan,
    /// Powered on but not actively conditioning.
    Idle,
    /// Powered down.
    Off,
}

impl ClimateAction {
    /// Returns the action name as used in logs and host interfaces.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heating => "HEATING",
            Self::Cooling => "COOLING",
            Self::Drying => "DRYING",
            Self::Fan => "FAN",
            Self::Idle => "IDLE",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for ClimateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClimateAction {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HEATING" => Ok(Self::Heating),
            "COOLING" => Ok(Self::Cooling),
            "DRYING" => Ok(Self::Drying),
            "FAN" => Ok(Self::Fan),
            "IDLE" => Ok(Self::Idle),
            "OFF" => Ok(Self::Off),
            _ => Err(ValueError::InvalidAction(s.to_string())),
        }
    }
}
