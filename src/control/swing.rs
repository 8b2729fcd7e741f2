// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Swing-mode reconciliation.
//!
//! Swinging one axis must not silently clobber a deliberate static position
//! on the other axis unless that axis was itself swinging. The reconciler
//! therefore consults the *device-reported* vane state when deciding whether
//! the opposite axis needs resetting, and leaves the wide vane alone on units
//! that do not have one.

use crate::capabilities::Capabilities;
use crate::state::{CurrentSettings, WantedSettings};
use crate::types::SwingMode;

/// Static default for the vertical vane when it stops swinging.
const VANE_STATIC_DEFAULT: &str = "AUTO";
/// Static default (centred) for the horizontal vane when it stops swinging.
const WIDE_VANE_STATIC_DEFAULT: &str = "|";

/// Resolves a swing-mode request into vane and wide-vane settings.
///
/// The wide-vane capability is queried once per invocation; on units without
/// one the horizontal axis is never touched.
pub fn reconcile_swing(
    swing: SwingMode,
    wanted: &mut WantedSettings,
    current: &CurrentSettings,
    capabilities: &Capabilities,
) {
    let wide_vane_supported = capabilities.supports_horizontal_swing();

    match swing {
        SwingMode::Off => {
            // All motion stops, regardless of what was swinging before.
            wanted.set_vane(VANE_STATIC_DEFAULT);
            if wide_vane_supported {
                wanted.set_wide_vane(WIDE_VANE_STATIC_DEFAULT);
            }
        }
        SwingMode::Vertical => {
            wanted.set_vane("SWING");
            // Coming from BOTH the wide vane must stop, but a static
            // horizontal position the user chose stays put.
            if wide_vane_supported && current.wide_vane_is_swinging() {
                wanted.set_wide_vane(WIDE_VANE_STATIC_DEFAULT);
            }
        }
        SwingMode::Horizontal => {
            // Mirror image: stop the vertical vane only if it was swinging.
            if current.vane_is_swinging() {
                wanted.set_vane(VANE_STATIC_DEFAULT);
            }
            if wide_vane_supported {
                wanted.set_wide_vane("SWING");
            } else {
                tracing::warn!(
                    swing = %swing,
                    "Horizontal swing requested on a unit without a wide vane"
                );
            }
        }
        SwingMode::Both => {
            wanted.set_vane("SWING");
            if wide_vane_supported {
                wanted.set_wide_vane("SWING");
            }
        }
    }
}
