// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `lutron_hvac` library.
//!
//! Decoding failures are reported as [`ParseError`] and never touch device
//! state. Failures of the status source used during resynchronization are
//! reported as [`ProtocolError`]. Both fold into the crate-level [`Error`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A status line could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The controller could not be queried.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors raised while decoding an HVAC status line.
///
/// Any of these rejects the whole line; no field of the device state is
/// modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The leading token is not an integer action code.
    #[error("invalid action code: {0:?}")]
    InvalidAction(String),

    /// A payload token required by the action is absent.
    #[error("action {action} is missing its {field} field")]
    MissingField {
        /// The action code being decoded.
        action: i64,
        /// Name of the absent field.
        field: String,
    },

    /// A payload token is present but not a valid number.
    #[error("failed to parse {field} from {value:?}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// The offending token, verbatim.
        value: String,
        /// Description of the parsing failure.
        message: String,
    },
}

impl ParseError {
    pub(crate) fn missing(action: i64, field: &str) -> Self {
        Self::MissingField {
            action,
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, value: &str, message: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

/// Errors related to querying the controller for a status snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// No status source was configured for the device.
    #[error("no status source configured")]
    NoStatusSource,

    /// The connection to the controller is not usable.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The source gave up waiting for the controller.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
