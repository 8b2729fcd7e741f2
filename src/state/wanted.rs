// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The locally-desired device configuration awaiting transmission.

use tokio::time::Instant;

use crate::tables::{FAN_MAP, MODE_MAP, POWER_MAP, VANE_MAP, WIDEVANE_MAP};

/// The wanted-settings delta owned by the dispatch controller.
///
/// A single instance exists per device, created at controller construction
/// and mutated only under the dispatch guard. The three metadata fields track
/// its lifecycle: `has_changed` marks a pending edit, `has_been_sent` marks a
/// hand-off in flight, and `last_change` anchors the debounce window. The two
/// flags are never both asserted as "sent but still dirty": every mutation
/// clears `has_been_sent` in the same critical section that sets
/// `has_changed`.
#[derive(Debug, Clone, PartialEq)]
pub struct WantedSettings {
    /// Canonical mode code (`MODE_MAP`).
    pub mode: &'static str,
    /// Canonical power code (`POWER_MAP`).
    pub power: &'static str,
    /// Canonical fan speed code (`FAN_MAP`).
    pub fan: &'static str,
    /// Canonical vertical vane code (`VANE_MAP`).
    pub vane: &'static str,
    /// Canonical horizontal vane code (`WIDEVANE_MAP`).
    pub wide_vane: &'static str,
    /// Target temperature in device-internal Celsius.
    pub temperature: f32,

    /// A change is pending transmission.
    pub has_changed: bool,
    /// The current snapshot has been handed to the transport.
    pub has_been_sent: bool,
    /// When the most recent change was applied.
    pub last_change: Option<Instant>,
}

impl Default for WantedSettings {
    fn default() -> Self {
        Self {
            mode: MODE_MAP.default_code(),
            power: POWER_MAP.default_code(),
            fan: FAN_MAP.default_code(),
            vane: VANE_MAP.default_code(),
            wide_vane: WIDEVANE_MAP.default_code(),
            temperature: 20.0,
            has_changed: false,
            has_been_sent: false,
            last_change: None,
        }
    }
}

impl WantedSettings {
    /// Creates the settings with table defaults and no pending change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mode to the canonical code matching `candidate`, falling back
    /// to the table default for unknown input.
    pub fn set_mode(&mut self, candidate: &str) {
        self.mode = MODE_MAP.resolve(candidate);
    }

    /// Sets the power code. Unknown input falls back to `"OFF"`.
    pub fn set_power(&mut self, candidate: &str) {
        self.power = POWER_MAP.resolve(candidate);
    }

    /// Sets the fan speed code. Unknown input falls back to `"AUTO"`.
    pub fn set_fan(&mut self, candidate: &str) {
        self.fan = FAN_MAP.resolve(candidate);
    }

    /// Sets the vertical vane code. Unknown input falls back to `"AUTO"`.
    pub fn set_vane(&mut self, candidate: &str) {
        self.vane = VANE_MAP.resolve(candidate);
    }

    /// Sets the horizontal vane code. Unknown input falls back to `"|"`.
    pub fn set_wide_vane(&mut self, candidate: &str) {
        self.wide_vane = WIDEVANE_MAP.resolve(candidate);
    }

    /// Marks a pending change, anchoring the debounce window at `now`.
    ///
    /// Clears `has_been_sent` in the same step so the flags can never read
    /// "sent but still dirty".
    pub fn mark_changed(&mut self, now: Instant) {
        self.has_changed = true;
        self.has_been_sent = false;
        self.last_change = Some(now);
    }

    /// Takes a plain-data snapshot for the transport collaborator.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            mode: self.mode.to_string(),
            power: self.power.to_string(),
            fan: self.fan.to_string(),
            vane: self.vane.to_string(),
            wide_vane: self.wide_vane.to_string(),
            temperature: self.temperature,
        }
    }

    /// One-line summary for trace logging.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "power={} mode={} temp={:.1} fan={} vane={} wideVane={}",
            self.power, self.mode, self.temperature, self.fan, self.vane, self.wide_vane
        )
    }
}

/// A plain-data copy of the wanted settings, as handed to the transport.
///
/// Carries no control metadata; the dispatch controller keeps that to itself.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SettingsSnapshot {
    /// Canonical mode code.
    pub mode: String,
    /// Canonical power code.
    pub power: String,
    /// Canonical fan speed code.
    pub fan: String,
    /// Canonical vertical vane code.
    pub vane: String,
    /// Canonical horizontal vane code.
    pub wide_vane: String,
    /// Target temperature in device-internal Celsius.
    pub temperature: f32,
}
