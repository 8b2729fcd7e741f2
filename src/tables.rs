// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical device-code tables for the CN105 protocol.
//!
//! Every high-level setting the core manipulates is ultimately one of a small
//! set of fixed string tokens the transport layer knows how to encode. Each
//! table is an ordered, immutable list of those tokens; index 0 is always the
//! safe default a lookup falls back to, so an unknown candidate can never
//! leave a field unset or push the device into an invalid state.

/// An ordered table of canonical device codes with an index-0 safe default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteMap {
    entries: &'static [&'static str],
}

impl ByteMap {
    /// Creates a table over the given entries.
    ///
    /// Tables are only ever constructed as crate-level constants; an empty
    /// table would make the default entry unreachable and is rejected by the
    /// `const` assert below.
    #[must_use]
    pub const fn new(entries: &'static [&'static str]) -> Self {
        assert!(!entries.is_empty(), "a ByteMap needs a default entry");
        Self { entries }
    }

    /// Looks up a candidate by exact comparison.
    ///
    /// Returns the matching index, or `None` when the candidate is not a
    /// known code for this table.
    #[must_use]
    pub fn lookup(&self, candidate: &str) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == candidate)
    }

    /// Resolves a candidate to a canonical code.
    ///
    /// Unknown candidates are absorbed into the table's index-0 default; this
    /// never fails.
    #[must_use]
    pub fn resolve(&self, candidate: &str) -> &'static str {
        match self.lookup(candidate) {
            Some(index) => self.entries[index],
            None => {
                tracing::debug!(
                    candidate = %candidate,
                    default = %self.entries[0],
                    "Unknown device code, falling back to table default"
                );
                self.entries[0]
            }
        }
    }

    /// Returns the index-0 safe default of this table.
    #[must_use]
    pub const fn default_code(&self) -> &'static str {
        self.entries[0]
    }

    /// Returns the code at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).copied()
    }

    /// Returns the number of entries in this table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table is empty. Always `false` in practice.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Power codes. Default: `"OFF"`.
pub const POWER_MAP: ByteMap = ByteMap::new(&["OFF", "ON"]);

/// Operating mode codes. Default: `"HEAT"`.
pub const MODE_MAP: ByteMap = ByteMap::new(&["HEAT", "DRY", "COOL", "FAN", "AUTO"]);

/// Fan speed codes. Default: `"AUTO"`.
pub const FAN_MAP: ByteMap = ByteMap::new(&["AUTO", "QUIET", "1", "2", "3", "4"]);

/// Vertical vane codes. `"SWING"` oscillates, the rest are static angles.
/// Default: `"AUTO"`.
pub const VANE_MAP: ByteMap = ByteMap::new(&["AUTO", "1", "2", "3", "4", "5", "SWING"]);

/// Horizontal (wide) vane codes. `"|"` is the centred static position and the
/// table default; `"SWING"` oscillates.
pub const WIDEVANE_MAP: ByteMap = ByteMap::new(&["|", "<<", "<", ">", ">>", "<>", "SWING"]);

/// Discrete setpoints accepted by units that only take whole-degree targets,
/// ascending so index 0 is the minimum.
pub const TEMP_MAP: ByteMap = ByteMap::new(&[
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31",
]);

/// Stage telemetry codes. Index 0 (`"IDLE"`) is the idle sentinel the
/// operating-status fallback compares against.
pub const STAGE_MAP: ByteMap = ByteMap::new(&["IDLE", "1", "2", "3", "4", "5"]);

/// The stage code meaning "not actively heating or cooling".
#[must_use]
pub const fn idle_stage() -> &'static str {
    STAGE_MAP.default_code()
}
