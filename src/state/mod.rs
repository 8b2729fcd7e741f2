// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state: the wanted-settings delta this core owns, and the
//! device-reported snapshots it reads.

mod current;
mod wanted;

pub use current::{CurrentSettings, CurrentStatus};
pub use wanted::{SettingsSnapshot, WantedSettings};
