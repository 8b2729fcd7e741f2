// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-supplied static configuration.

use std::time::Duration;

use crate::types::{DisplayUnit, TempMode};

/// Static configuration for the climate core, supplied by the host once at
/// construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    /// How long a pending change must sit unmodified before it is sent.
    ///
    /// Rapid successive edits inside this window coalesce into one send.
    pub debounce_delay: Duration,

    /// Derive the operating status from the stage telemetry instead of the
    /// raw operating flag.
    ///
    /// Some hardware revisions report an unreliable operating flag; on those
    /// units the stage signal is the only trustworthy indicator. When
    /// enabled, the raw flag is ignored entirely.
    pub use_stage_for_operating_status: bool,

    /// Whether the unit accepts discrete whole-degree or continuous
    /// half-degree setpoints.
    pub temp_mode: TempMode,

    /// The unit the host displays temperatures in.
    pub display_unit: DisplayUnit,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            debounce_delay: Duration::from_millis(500),
            use_stage_for_operating_status: false,
            temp_mode: TempMode::default(),
            display_unit: DisplayUnit::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClimateConfig::default();
        assert_eq!(config.debounce_delay, Duration::from_millis(500));
        assert!(!config.use_stage_for_operating_status);
        assert_eq!(config.temp_mode, TempMode::Discrete);
        assert_eq!(config.display_unit, DisplayUnit::Celsius);
    }
}
