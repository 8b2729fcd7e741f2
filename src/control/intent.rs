// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-request control intent.

use crate::types::{ClimateMode, FanMode, SwingMode};

/// A single control request from the host entity framework.
///
/// Each field is independently optional; absent fields leave the matching
/// wanted setting unchanged. All fields of one intent are applied in a single
/// critical section, so a multi-field request coalesces into one debounced
/// send.
///
/// # Examples
///
/// ```
/// use cn105_climate::control::ClimateIntent;
/// use cn105_climate::types::{ClimateMode, FanMode};
///
/// let intent = ClimateIntent::new()
///     .with_mode(ClimateMode::Cool)
///     .with_target_temperature(22.5)
///     .with_fan_mode(FanMode::Quiet);
/// assert!(!intent.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimateIntent {
    /// Requested operating mode.
    pub mode: Option<ClimateMode>,
    /// Requested target temperature, in the host's display unit.
    pub target_temperature: Option<f32>,
    /// Requested fan mode.
    pub fan_mode: Option<FanMode>,
    /// Requested swing mode.
    pub swing_mode: Option<SwingMode>,
}

impl ClimateIntent {
    /// Creates an empty intent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: None,
            target_temperature: None,
            fan_mode: None,
            swing_mode: None,
        }
    }

    /// Requests an operating mode change.
    #[must_use]
    pub const fn with_mode(mut self, mode: ClimateMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Requests a new target temperature, in the host's display unit.
    #[must_use]
    pub const fn with_target_temperature(mut self, target: f32) -> Self {
        self.target_temperature = Some(target);
        self
    }

    /// Requests a fan mode change.
    #[must_use]
    pub const fn with_fan_mode(mut self, fan: FanMode) -> Self {
        self.fan_mode = Some(fan);
        self
    }

    /// Requests a swing mode change.
    #[must_use]
    pub const fn with_swing_mode(mut self, swing: SwingMode) -> Self {
        self.swing_mode = Some(swing);
        self
    }

    /// Returns `true` if no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.target_temperature.is_none()
            && self.fan_mode.is_none()
            && self.swing_mode.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_intent() {
        assert!(ClimateIntent::new().is_empty());
        assert!(ClimateIntent::default().is_empty());
    }

    #[test]
    fn with_fields() {
        let intent = ClimateIntent::new()
            .with_mode(ClimateMode::Heat)
            .with_swing_mode(SwingMode::Vertical);
        assert_eq!(intent.mode, Some(ClimateMode::Heat));
        assert_eq!(intent.swing_mode, Some(SwingMode::Vertical));
        assert!(intent.target_temperature.is_none());
        assert!(intent.fan_mode.is_none());
        assert!(!intent.is_empty());
    }
}
