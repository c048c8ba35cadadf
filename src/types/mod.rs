// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types reported by the HVAC controller.
//!
//! # Types
//!
//! - [`DegreesF`] - Temperature in degrees Fahrenheit (authoritative)
//! - [`DegreesC`] - Temperature in degrees Celsius (redundant mirrors only)
//! - [`OperatingMode`] - Thermostat operating mode
//! - [`FanMode`] - Fan mode
//! - [`CallStatus`] - Current heat/cool demand

mod modes;
mod temperature;

pub use modes::{CallStatus, ECO_ENABLED, FanMode, OperatingMode};
pub use temperature::{DegreesC, DegreesF};
