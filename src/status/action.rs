// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC action codes.

/// Current temperature in °F.
pub const CURRENT_TEMPERATURE: i64 = 1;
/// Heat and cool setpoints in °F.
pub const SETPOINTS: i64 = 2;
/// Operating mode.
pub const OPERATING_MODE: i64 = 3;
/// Fan mode.
pub const FAN_MODE: i64 = 4;
/// Eco indicator.
pub const ECO: i64 = 5;
/// Call status.
pub const CALL_STATUS: i64 = 14;
/// Current temperature in °C (redundant).
pub const CELSIUS_TEMPERATURE: i64 = 15;
/// Heat and cool setpoints in °C (redundant).
pub const CELSIUS_SETPOINTS: i64 = 16;

/// Actions that together describe the full state of a device.
///
/// A status source can query each of these to build a snapshot.
pub const SNAPSHOT: [i64; 6] = [
    CURRENT_TEMPERATURE,
    SETPOINTS,
    OPERATING_MODE,
    FAN_MODE,
    ECO,
    CALL_STATUS,
];
