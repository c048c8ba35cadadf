// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! Each variant corresponds to one field group of [`HvacState`](super::HvacState)
//! and to exactly one mutation entry point of [`StateStore`](super::StateStore).
//!
//! # Examples
//!
//! ```
//! use lutron_hvac::state::{StateChange, StateStore};
//! use lutron_hvac::types::FanMode;
//!
//! let store = StateStore::new();
//!
//! // Apply returns the new snapshot if state actually changed
//! assert!(store.apply(&StateChange::FanMode(FanMode::On)).is_some());
//!
//! // Applying same change again returns None
//! assert!(store.apply(&StateChange::FanMode(FanMode::On)).is_none());
//! ```

use serde::Serialize;

use crate::types::{CallStatus, DegreesF, FanMode, OperatingMode};

/// A change to one field group of an HVAC device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum StateChange {
    /// Current temperature changed.
    CurrentTemperature(DegreesF),

    /// Heat and cool setpoints changed.
    ///
    /// Both values are always written together.
    Setpoints {
        /// The new heat setpoint.
        heat: DegreesF,
        /// The new cool setpoint.
        cool: DegreesF,
    },

    /// Operating mode changed.
    OperatingMode(OperatingMode),

    /// Fan mode changed.
    FanMode(FanMode),

    /// Eco mode toggled.
    Eco(bool),

    /// Call status changed.
    CallStatus(CallStatus),
}

impl StateChange {
    /// Returns `true` if this change touches a temperature or setpoint.
    #[must_use]
    pub fn is_temperature(&self) -> bool {
        matches!(self, Self::CurrentTemperature(_) | Self::Setpoints { .. })
    }

    /// Returns `true` if this change touches a mode (operating, fan or eco).
    #[must_use]
    pub fn is_mode(&self) -> bool {
        matches!(self, Self::OperatingMode(_) | Self::FanMode(_) | Self::Eco(_))
    }
}
