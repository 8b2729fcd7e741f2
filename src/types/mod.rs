// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing climate value types.
//!
//! These are the typed values a host entity framework exchanges with the
//! core: operating modes, reportable actions, fan and swing selections, and
//! the temperature normalization helpers. Conversion to canonical device
//! codes happens inside the control layer via the [`crate::tables`] maps.

mod fan;
mod mode;
mod swing;
mod temperature;

pub use fan::FanMode;
pub use mode::{ClimateAction, ClimateMode};
pub use swing::SwingMode;
pub use temperature::{DisplayUnit, SETPOINT_MAX, SETPOINT_MIN, TempMode, UnitBridge, snap_setpoint};
