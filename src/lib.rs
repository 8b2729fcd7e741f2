// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CN105 Climate - the control-reconciliation core of a Mitsubishi heat-pump
//! driver.
//!
//! This library sits between a host entity framework (the thing users poke
//! at) and a transport layer (the thing that frames bytes onto the CN105
//! serial link). It turns discrete, possibly-concurrent user intents into a
//! coherent, debounced set of canonical device settings, and infers the
//! reportable operating action from telemetry that may be partial or
//! unreliable.
//!
//! # What it does
//!
//! - **Value mapping**: high-level settings resolve against fixed device-code
//!   tables, with unknown input absorbed into a safe default.
//! - **Temperature normalization**: one conversion per direction between the
//!   host's display unit and device-internal Celsius, plus mode-dependent
//!   setpoint snapping.
//! - **Swing reconciliation**: swinging one vane axis never clobbers a
//!   deliberate static position on the other.
//! - **Action inference**: heating/cooling/idle/fan derived from mode,
//!   temperatures, and a stage-signal fallback for units whose operating
//!   flag is untrustworthy.
//! - **Debounced dispatch**: rapid successive edits coalesce into exactly
//!   one transport hand-off per settled change, serialized by a single
//!   guard.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cn105_climate::control::{ClimateIntent, DispatchController};
//! use cn105_climate::state::{CurrentSettings, SettingsSnapshot};
//! use cn105_climate::transport::SettingsSink;
//! use cn105_climate::types::ClimateMode;
//! use cn105_climate::{Capabilities, ClimateConfig, TransportError};
//!
//! struct SerialLink;
//!
//! impl SettingsSink for SerialLink {
//!     async fn send_wanted_settings(
//!         &self,
//!         _snapshot: SettingsSnapshot,
//!     ) -> Result<(), TransportError> {
//!         // frame and write to the CN105 connector here
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = Arc::new(DispatchController::new(
//!         ClimateConfig::default(),
//!         Capabilities::heat_cool(),
//!         SerialLink,
//!     ));
//!     tokio::spawn(Arc::clone(&controller).run());
//!
//!     let intent = ClimateIntent::new()
//!         .with_mode(ClimateMode::Cool)
//!         .with_target_temperature(22.5);
//!     controller.apply_intent(&intent, &CurrentSettings::default());
//! }
//! ```
//!
//! # Reporting the operating action
//!
//! ```
//! use cn105_climate::Capabilities;
//! use cn105_climate::control::{ActionInput, infer_action};
//! use cn105_climate::state::{CurrentSettings, CurrentStatus};
//! use cn105_climate::types::{ClimateAction, ClimateMode};
//!
//! let status = CurrentStatus { operating: true, compressor_frequency: 0.0 };
//! let action = infer_action(&ActionInput {
//!     mode: ClimateMode::Cool,
//!     current_temperature: 25.0,
//!     target_temperature: 22.0,
//!     status: &status,
//!     settings: &CurrentSettings::default(),
//!     capabilities: &Capabilities::heat_cool(),
//!     use_stage_fallback: false,
//!     previous_action: ClimateAction::Idle,
//! });
//! assert_eq!(action, ClimateAction::Cooling);
//! ```

mod capabilities;
mod config;
pub mod control;
pub mod error;
pub mod state;
pub mod tables;
pub mod transport;
pub mod types;

pub use capabilities::Capabilities;
pub use config::ClimateConfig;
pub use control::{ActionInput, ClimateIntent, DispatchController, DispatchState, infer_action};
pub use error::{Error, Result, TransportError, ValueError};
pub use state::{CurrentSettings, CurrentStatus, SettingsSnapshot, WantedSettings};
pub use tables::{
    ByteMap, FAN_MAP, MODE_MAP, POWER_MAP, STAGE_MAP, TEMP_MAP, VANE_MAP, WIDEVANE_MAP,
};
pub use transport::SettingsSink;
pub use types::{
    ClimateAction, ClimateMode, DisplayUnit, FanMode, SwingMode, TempMode, UnitBridge,
};
