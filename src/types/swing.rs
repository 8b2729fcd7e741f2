// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Swing mode type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The vane swing behaviour requested by the user.
///
/// Vertical swing oscillates the vane, horizontal swing the wide vane. How a
/// request interacts with the other axis (and with units lacking a wide
/// vane) is decided by the swing reconciler in the control layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SwingMode {
    /// Both axes held at a static position.
    Off,
    /// Vertical vane oscillating.
    Vertical,
    /// Horizontal (wide) vane oscillating.
    Horizontal,
    /// Both axes oscillating.
    Both,
}

impl SwingMode {
    /// Returns the swing mode name as used in logs and host interfaces.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Vertical => "VERTICAL",
            Self::Horizontal => "HORIZONTAL",
            Self::Both => "BOTH",
        }
    }
}

impl fmt::Display for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SwingMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(Self::Off),
            "VERTICAL" => Ok(Self::Vertical),
            "HORIZONTAL" => Ok(Self::Horizontal),
            "BOTH" => Ok(Self::Both),
            _ => Err(ValueError::InvalidSwingMode(s.to_string())),
        }
    }
}
