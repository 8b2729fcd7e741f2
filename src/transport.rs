// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seam to the transport collaborator.
//!
//! The core never touches wire bytes; once a pending change has settled it
//! hands a [`SettingsSnapshot`](crate::state::SettingsSnapshot) to whatever
//! implements [`SettingsSink`] and moves on. The sink encodes the canonical
//! codes into protocol frames, talks to the serial link, and calls
//! [`DispatchController::acknowledge`](crate::control::DispatchController::acknowledge)
//! once the device confirms.

use crate::error::TransportError;
use crate::state::SettingsSnapshot;

/// Trait for transport implementations that deliver settings to the device.
#[allow(async_fn_in_trait)]
pub trait SettingsSink {
    /// Hands a settled wanted-settings snapshot to the device link.
    ///
    /// Invoked at most once per settled debounce window. From the core's
    /// perspective this is fire-and-forget: an `Ok` means the snapshot was
    /// accepted for delivery, not that the device applied it.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the snapshot could not be accepted; the
    /// pending change then stays dirty and is retried on the next settled
    /// window.
    async fn send_wanted_settings(&self, snapshot: SettingsSnapshot)
    -> Result<(), TransportError>;
}
