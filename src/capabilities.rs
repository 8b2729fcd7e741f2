// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capability descriptor.
//!
//! Not every unit behind a CN105 connector supports every mode or a
//! horizontal (wide) vane. The host supplies a [`Capabilities`] value once at
//! construction; the swing reconciler and the action inference query it to
//! avoid driving axes or modes the hardware does not have.

use crate::types::ClimateMode;

/// Capabilities of a connected heat-pump unit.
///
/// # Examples
///
/// ```
/// use cn105_climate::{Capabilities, types::ClimateMode};
///
/// let caps = Capabilities::heat_cool();
/// assert!(caps.supports_mode(ClimateMode::Heat));
/// assert!(caps.supports_mode(ClimateMode::Cool));
/// assert!(caps.wide_vane);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
// Each boolean is an independent hardware feature flag; they do not form a
// meaningful state machine.
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Supports heating.
    pub heat: bool,

    /// Supports cooling.
    pub cool: bool,

    /// Supports dehumidifying.
    pub dry: bool,

    /// Supports fan-only operation.
    pub fan_only: bool,

    /// Supports automatic heat/cool selection.
    pub auto: bool,

    /// Has a horizontal (wide) vane.
    pub wide_vane: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::heat_cool()
    }
}

impl Capabilities {
    /// Capabilities of a typical reversible unit: every mode, both vanes.
    #[must_use]
    pub const fn heat_cool() -> Self {
        Self {
            heat: true,
            cool: true,
            dry: true,
            fan_only: true,
            auto: true,
            wide_vane: true,
        }
    }

    /// Capabilities of a heating-only unit without a wide vane.
    #[must_use]
    pub const fn heat_only() -> Self {
        Self {
            heat: true,
            cool: false,
            dry: false,
            fan_only: true,
            auto: true,
            wide_vane: false,
        }
    }

    /// Capabilities of a cooling-only unit without a wide vane.
    #[must_use]
    pub const fn cool_only() -> Self {
        Self {
            heat: false,
            cool: true,
            dry: true,
            fan_only: true,
            auto: true,
            wide_vane: false,
        }
    }

    /// Returns `true` if the unit supports the given operating mode.
    ///
    /// `Off` is always supported.
    #[must_use]
    pub const fn supports_mode(&self, mode: ClimateMode) -> bool {
        match mode {
            ClimateMode::Heat => self.heat,
            ClimateMode::Cool => self.cool,
            ClimateMode::Dry => self.dry,
            ClimateMode::FanOnly => self.fan_only,
            ClimateMode::Auto => self.auto,
            ClimateMode::Off => true,
        }
    }

    /// Returns `true` if the unit can swing its horizontal vane.
    #[must_use]
    pub const fn supports_horizontal_swing(&self) -> bool {
        self.wide_vane
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_featured() {
        let caps = Capabilities::default();
        for mode in [
            ClimateMode::Heat,
            ClimateMode::Cool,
            ClimateMode::Dry,
            ClimateMode::FanOnly,
            ClimateMode::Auto,
            ClimateMode::Off,
        ] {
            assert!(caps.supports_mode(mode));
        }
        assert!(caps.supports_horizontal_swing());
    }

    #[test]
    fn heat_only_rejects_cool() {
        let caps = Capabilities::heat_only();
        assert!(caps.supports_mode(ClimateMode::Heat));
        assert!(!caps.supports_mode(ClimateMode::Cool));
        assert!(!caps.supports_horizontal_swing());
    }

    #[test]
    fn off_is_always_supported() {
        let caps = Capabilities {
            heat: false,
            cool: false,
            dry: false,
            fan_only: false,
            auto: false,
            wide_vane: false,
        };
        assert!(caps.supports_mode(ClimateMode::Off));
    }
}
