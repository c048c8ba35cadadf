// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature types.
//!
//! The controller reports temperatures as plain decimals, optionally zero
//! padded with up to three integer digits and two fractional digits
//! (`072.50`). Fahrenheit values are authoritative; Celsius values only
//! appear in the redundant mirror messages.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Parses a finite decimal, accepting a sign and leading zeros.
fn parse_decimal(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err("temperature must be finite".to_string())
    }
}

/// A temperature in degrees Fahrenheit.
///
/// # Examples
///
/// ```
/// use lutron_hvac::types::DegreesF;
///
/// let t: DegreesF = "072.50".parse().unwrap();
/// assert_eq!(t.value(), 72.5);
/// assert_eq!(DegreesF::default().value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
pub struct DegreesF(f64);

impl DegreesF {
    /// Creates a temperature from a raw Fahrenheit value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the value in degrees Fahrenheit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for DegreesF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\u{00b0}F", self.0)
    }
}

impl FromStr for DegreesF {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Self)
    }
}

impl From<f64> for DegreesF {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// A temperature in degrees Celsius.
///
/// Only produced by the redundant Celsius mirror messages, which are
/// validated and then discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
pub struct DegreesC(f64);

impl DegreesC {
    /// Creates a temperature from a raw Celsius value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the value in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for DegreesC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\u{00b0}C", self.0)
    }
}

impl FromStr for DegreesC {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Self)
    }
}
