// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-reported settings and status.
//!
//! These snapshots are owned and serialized by the telemetry collaborator;
//! this core only reads them. They are eventually consistent with the actual
//! hardware, and fields the device has not reported yet stay at their
//! defaults (or `None` for the stage signal).

/// The last settings the device reported for itself.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct CurrentSettings {
    /// Reported power code.
    pub power: String,
    /// Reported mode code.
    pub mode: String,
    /// Reported target temperature, device-internal Celsius.
    pub temperature: f32,
    /// Reported fan speed code.
    pub fan: String,
    /// Reported vertical vane code.
    pub vane: String,
    /// Reported horizontal vane code.
    pub wide_vane: String,
    /// Reported stage signal, `None` until the device publishes one.
    pub stage: Option<String>,
}

impl CurrentSettings {
    /// Returns `true` if the vertical vane is reported as oscillating.
    #[must_use]
    pub fn vane_is_swinging(&self) -> bool {
        self.vane == "SWING"
    }

    /// Returns `true` if the horizontal vane is reported as oscillating.
    #[must_use]
    pub fn wide_vane_is_swinging(&self) -> bool {
        self.wide_vane == "SWING"
    }
}

/// The last operating status the device reported.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct CurrentStatus {
    /// The raw operating flag. Unreliable on some hardware revisions; see
    /// [`crate::config::ClimateConfig::use_stage_for_operating_status`].
    pub operating: bool,
    /// Compressor frequency in Hz. A poor activity indicator (several indoor
    /// units can share one compressor); kept for the legacy inference path.
    pub compressor_frequency: f32,
}
