// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder for HVAC status lines.
//!
//! The controller pushes one line per status change. The transport strips
//! the device addressing and hands over the rest: a leading integer action
//! code followed by action-specific payload tokens, all comma separated.
//!
//! | Action | Payload | Meaning |
//! |---|---|---|
//! | 1 | `°F` | current temperature |
//! | 2 | `°F,°F` | heat and cool setpoints |
//! | 3 | integer | operating mode |
//! | 4 | integer | fan mode |
//! | 5 | integer | eco indicator (`2` means enabled) |
//! | 14 | integer | call status |
//! | 15 | `°C` | Celsius mirror of action 1 |
//! | 16 | `°C,°C` | Celsius mirror of action 2 |
//!
//! Any other action code decodes to [`StatusMessage::Unrecognized`], which
//! is not an error.
//!
//! # Examples
//!
//! ```
//! use lutron_hvac::status::{StatusMessage, parse_status};
//!
//! let msg = parse_status("2,68.00,74.00").unwrap();
//! assert!(matches!(msg, StatusMessage::Setpoints { .. }));
//!
//! assert!(parse_status("2,abc,74").is_err());
//! assert!(matches!(
//!     parse_status("99,foo").unwrap(),
//!     StatusMessage::Unrecognized { action: 99 }
//! ));
//! ```

pub mod action;

use std::str::FromStr;

use crate::error::ParseError;
use crate::state::StateChange;
use crate::types::{CallStatus, DegreesC, DegreesF, ECO_ENABLED, FanMode, OperatingMode};

/// A decoded HVAC status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusMessage {
    /// Current temperature reading (action 1).
    CurrentTemperature(DegreesF),

    /// Heat and cool setpoints (action 2).
    Setpoints {
        /// Heat setpoint.
        heat: DegreesF,
        /// Cool setpoint.
        cool: DegreesF,
    },

    /// Operating mode (action 3).
    OperatingMode(OperatingMode),

    /// Fan mode (action 4).
    FanMode(FanMode),

    /// Eco indicator (action 5).
    Eco(bool),

    /// Call status (action 14).
    CallStatus(CallStatus),

    /// Celsius mirror of the current temperature (action 15).
    CelsiusTemperature(DegreesC),

    /// Celsius mirror of the setpoints (action 16).
    CelsiusSetpoints {
        /// Heat setpoint.
        heat: DegreesC,
        /// Cool setpoint.
        cool: DegreesC,
    },

    /// An action code this decoder does not handle.
    Unrecognized {
        /// The action code as received.
        action: i64,
    },
}

impl StatusMessage {
    /// Returns the wire action code of this message.
    #[must_use]
    pub const fn action(&self) -> i64 {
        match self {
            Self::CurrentTemperature(_) => action::CURRENT_TEMPERATURE,
            Self::Setpoints { .. } => action::SETPOINTS,
            Self::OperatingMode(_) => action::OPERATING_MODE,
            Self::FanMode(_) => action::FAN_MODE,
            Self::Eco(_) => action::ECO,
            Self::CallStatus(_) => action::CALL_STATUS,
            Self::CelsiusTemperature(_) => action::CELSIUS_TEMPERATURE,
            Self::CelsiusSetpoints { .. } => action::CELSIUS_SETPOINTS,
            Self::Unrecognized { action } => *action,
        }
    }

    /// Returns `true` for the redundant Celsius mirror messages.
    #[must_use]
    pub const fn is_redundant(&self) -> bool {
        matches!(
            self,
            Self::CelsiusTemperature(_) | Self::CelsiusSetpoints { .. }
        )
    }

    /// Returns `true` if the action code is not handled by this decoder.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized { .. })
    }

    /// Converts the message into the state change it carries.
    ///
    /// Celsius mirrors and unrecognized actions carry no change; the
    /// Fahrenheit values remain authoritative.
    #[must_use]
    pub fn to_state_change(&self) -> Option<StateChange> {
        match *self {
            Self::CurrentTemperature(t) => Some(StateChange::CurrentTemperature(t)),
            Self::Setpoints { heat, cool } => Some(StateChange::Setpoints { heat, cool }),
            Self::OperatingMode(m) => Some(StateChange::OperatingMode(m)),
            Self::FanMode(f) => Some(StateChange::FanMode(f)),
            Self::Eco(enabled) => Some(StateChange::Eco(enabled)),
            Self::CallStatus(c) => Some(StateChange::CallStatus(c)),
            Self::CelsiusTemperature(_)
            | Self::CelsiusSetpoints { .. }
            | Self::Unrecognized { .. } => None,
        }
    }
}

/// Positional access to the payload tokens of one line.
struct Payload<'a> {
    action: i64,
    tokens: &'a [&'a str],
}

impl Payload<'_> {
    fn token(&self, position: usize, field: &str) -> Result<&str, ParseError> {
        self.tokens
            .get(position)
            .copied()
            .ok_or_else(|| ParseError::missing(self.action, field))
    }

    fn value<T>(&self, position: usize, field: &str) -> Result<T, ParseError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        let token = self.token(position, field)?;
        token
            .parse()
            .map_err(|e: T::Err| ParseError::invalid(field, token, e))
    }

    fn integer(&self, field: &str) -> Result<i64, ParseError> {
        self.value(0, field)
    }
}

/// Parses one raw status line.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The leading token is not an integer action code
/// - A payload token required by a handled action is missing
/// - A payload token is not a valid decimal or integer
///
/// Unrecognized action codes are not errors; their payload is not inspected.
pub fn parse_status(line: &str) -> Result<StatusMessage, ParseError> {
    let tokens: Vec<&str> = line.split(',').collect();
    let (head, rest) = tokens
        .split_first()
        .ok_or_else(|| ParseError::InvalidAction(String::new()))?;

    let action: i64 = head
        .parse()
        .map_err(|_| ParseError::InvalidAction((*head).to_string()))?;

    let payload = Payload {
        action,
        tokens: rest,
    };

    let msg = match action {
        action::CURRENT_TEMPERATURE => {
            StatusMessage::CurrentTemperature(payload.value(0, "current temperature")?)
        }
        action::SETPOINTS => StatusMessage::Setpoints {
            heat: payload.value(0, "heat setpoint")?,
            cool: payload.value(1, "cool setpoint")?,
        },
        action::OPERATING_MODE => {
            StatusMessage::OperatingMode(payload.integer("operating mode")?.into())
        }
        action::FAN_MODE => StatusMessage::FanMode(payload.integer("fan mode")?.into()),
        action::ECO => StatusMessage::Eco(payload.integer("eco mode")? == ECO_ENABLED),
        action::CALL_STATUS => StatusMessage::CallStatus(payload.integer("call status")?.into()),
        action::CELSIUS_TEMPERATURE => {
            StatusMessage::CelsiusTemperature(payload.value(0, "current temperature")?)
        }
        action::CELSIUS_SETPOINTS => StatusMessage::CelsiusSetpoints {
            heat: payload.value(0, "heat setpoint")?,
            cool: payload.value(1, "cool setpoint")?,
        },
        other => StatusMessage::Unrecognized { action: other },
    };

    Ok(msg)
}
