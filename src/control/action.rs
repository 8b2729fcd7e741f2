// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating-action inference.
//!
//! Derives the reportable action (heating, cooling, idle, ...) from the
//! requested mode, the temperature pair, and possibly-unreliable telemetry.
//! The inference is a pure function; it is re-run after every telemetry
//! update and after every mode change.

use crate::capabilities::Capabilities;
use crate::state::{CurrentSettings, CurrentStatus};
use crate::tables::idle_stage;
use crate::types::{ClimateAction, ClimateMode};

/// Inputs to the action inference.
#[derive(Debug, Clone, Copy)]
pub struct ActionInput<'a> {
    /// The requested operating mode.
    pub mode: ClimateMode,
    /// Room temperature, device-internal Celsius.
    pub current_temperature: f32,
    /// Target temperature, device-internal Celsius.
    pub target_temperature: f32,
    /// Last reported status.
    pub status: &'a CurrentStatus,
    /// Last reported settings (for the stage signal).
    pub settings: &'a CurrentSettings,
    /// Unit capabilities.
    pub capabilities: &'a Capabilities,
    /// Derive the operating status from the stage signal instead of the raw
    /// flag.
    pub use_stage_fallback: bool,
    /// The action reported so far; returned unchanged on an unsupported mode
    /// combination.
    pub previous_action: ClimateAction,
}

/// Infers the reportable action from mode, temperatures, and telemetry.
///
/// Thermal modes resolve to `Idle` unless the unit is effectively operating.
/// `Auto` on a unit supporting only one of heat/cool degrades to `Fan` once
/// the relevant threshold is crossed; `Auto` on a unit supporting neither is
/// an error and leaves `previous_action` in place.
#[must_use]
pub fn infer_action(input: &ActionInput<'_>) -> ClimateAction {
    let action = match input.mode {
        ClimateMode::Off => ClimateAction::Off,
        // No operating check: a running fan is never idle.
        ClimateMode::FanOnly => ClimateAction::Fan,
        ClimateMode::Heat => gate_on_operating(input, ClimateAction::Heating),
        ClimateMode::Cool => gate_on_operating(input, ClimateAction::Cooling),
        ClimateMode::Dry => gate_on_operating(input, ClimateAction::Drying),
        ClimateMode::Auto => infer_auto(input),
    };

    tracing::debug!(
        mode = %input.mode,
        action = %action,
        stage_fallback = input.use_stage_fallback,
        "Inferred operating action"
    );
    action
}

fn infer_auto(input: &ActionInput<'_>) -> ClimateAction {
    let caps = input.capabilities;
    let above_target = input.current_temperature > input.target_temperature;

    if caps.heat && caps.cool {
        let candidate = if above_target {
            ClimateAction::Cooling
        } else {
            ClimateAction::Heating
        };
        gate_on_operating(input, candidate)
    } else if caps.cool {
        // Cooling-only unit: at or below target there is nothing left to
        // cool, so the unit just moves air.
        if input.current_temperature <= input.target_temperature {
            gate_on_operating(input, ClimateAction::Fan)
        } else {
            gate_on_operating(input, ClimateAction::Cooling)
        }
    } else if caps.heat {
        if input.current_temperature >= input.target_temperature {
            gate_on_operating(input, ClimateAction::Fan)
        } else {
            gate_on_operating(input, ClimateAction::Heating)
        }
    } else {
        tracing::error!("AUTO mode is not supported by this unit");
        input.previous_action
    }
}

/// Resolves a candidate action to `Idle` unless the unit is effectively
/// operating.
fn gate_on_operating(input: &ActionInput<'_>, candidate: ClimateAction) -> ClimateAction {
    if effective_operating(input) {
        candidate
    } else {
        ClimateAction::Idle
    }
}

/// Decides whether the unit is actively conditioning.
///
/// With the stage fallback enabled the raw operating flag is ignored
/// entirely and the stage signal alone decides: some hardware revisions
/// report a meaningless flag, and on those units stage is the only
/// trustworthy source. An unreported stage (`None`) counts as idle.
fn effective_operating(input: &ActionInput<'_>) -> bool {
    if input.use_stage_fallback {
        input
            .settings
            .stage
            .as_deref()
            .is_some_and(|stage| stage != idle_stage())
    } else {
        input.status.operating
    }
}

/// Legacy inference that additionally requires a positive compressor
/// frequency before reporting a thermal action.
///
/// The compressor frequency is a poor activity indicator (multiple indoor
/// units can share one compressor, and some units do not report it at all).
/// Kept only for device revisions that predate the operating flag.
#[deprecated(note = "compressor frequency is unreliable; use `infer_action`")]
#[must_use]
pub fn infer_action_compressor_gated(input: &ActionInput<'_>) -> ClimateAction {
    tracing::warn!(
        "Using compressor frequency as an activity indicator is deprecated; \
         prefer the operating status"
    );

    match input.mode {
        // Non-thermal modes never depended on the compressor.
        ClimateMode::Off | ClimateMode::FanOnly => infer_action(input),
        _ if input.status.compressor_frequency <= 0.0 => ClimateAction::Idle,
        _ => infer_action(input),
    }
}
