// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the CN105 climate core.
//!
//! Most reconciliation failures in this crate deliberately do *not* surface
//! as errors: unknown device codes degrade to a table default and unsupported
//! requests are logged no-ops, so a misbehaving frontend can never push the
//! heat pump into an invalid state. Errors exist only at the typed parse
//! boundary and at the transport seam.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while parsing a host-facing value.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while handing settings to the transport collaborator.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors raised when parsing host-facing strings into typed climate values.
///
/// These occur only at the typed boundary (`FromStr` impls). Lookups against
/// the device-code tables never fail; they fall back to the table default.
// No `Eq`: `TemperatureOutOfRange` carries f32 fields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// An invalid climate mode string was provided.
    #[error("invalid climate mode: {0}")]
    InvalidMode(String),

    /// An invalid climate action string was provided.
    #[error("invalid climate action: {0}")]
    InvalidAction(String),

    /// An invalid fan mode string was provided.
    #[error("invalid fan mode: {0}")]
    InvalidFanMode(String),

    /// An invalid swing mode string was provided.
    #[error("invalid swing mode: {0}")]
    InvalidSwingMode(String),

    /// A temperature is outside the range the device accepts.
    #[error("temperature {actual} is out of range [{min}, {max}]")]
    TemperatureOutOfRange {
        /// Minimum accepted setpoint, in device units.
        min: f32,
        /// Maximum accepted setpoint, in device units.
        max: f32,
        /// The value that was provided.
        actual: f32,
    },
}

/// Errors reported by the transport collaborator when a settings hand-off
/// fails.
///
/// The dispatch controller logs these and leaves the pending change dirty so
/// the next settled debounce window retries the send.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The link to the device is down.
    #[error("transport is not connected")]
    NotConnected,

    /// Internal channel to the transport task was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::TemperatureOutOfRange {
            min: 10.0,
            max: 31.0,
            actual: 35.0,
        };
        assert_eq!(err.to_string(), "temperature 35 is out of range [10, 31]");
    }

    #[test]
    fn value_errors_compare_equal() {
        let a = ValueError::TemperatureOutOfRange {
            min: 10.0,
            max: 31.0,
            actual: 35.0,
        };
        assert_eq!(a.clone(), a);
        assert_ne!(a, ValueError::InvalidMode("TURBO".to_string()));
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidMode("TURBO".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidMode(_))));
    }

    #[test]
    fn transport_error_display() {
        let err = TransportError::NotConnected;
        assert_eq!(err.to_string(), "transport is not connected");
    }
}
