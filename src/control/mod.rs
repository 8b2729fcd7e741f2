// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control-reconciliation logic.
//!
//! Turns user intents into a coherent wanted-settings snapshot (swing
//! reconciliation, setpoint snapping, mode/power coupling), infers the
//! reportable action from telemetry, and owns the debounced dispatch of
//! settled changes to the transport.

mod action;
mod dispatch;
mod intent;
mod swing;

pub use action::{ActionInput, infer_action};
pub use dispatch::{DispatchController, DispatchState};
pub use intent::ClimateIntent;
pub use swing::reconcile_swing;

#[allow(deprecated)]
pub use action::infer_action_compressor_gated;
