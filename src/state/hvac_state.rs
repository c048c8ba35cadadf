// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC state snapshot.

use serde::Serialize;

use crate::types::{CallStatus, DegreesF, FanMode, OperatingMode};

use super::StateChange;

/// State of one HVAC device.
///
/// Every field holds the last value decoded for it, or its zero value if
/// the controller has not reported it yet. Fields are independent: no
/// relationship between setpoints or modes is enforced.
///
/// Values of this type are snapshots. The live state is owned by
/// [`StateStore`](super::StateStore).
///
/// # Examples
///
/// ```
/// use lutron_hvac::state::HvacState;
///
/// let state = HvacState::new();
/// assert_eq!(state.current_temperature().value(), 0.0);
/// assert!(!state.eco_enabled());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HvacState {
    /// Current temperature reading.
    current_temperature: DegreesF,
    /// Heat setpoint.
    heat_setpoint: DegreesF,
    /// Cool setpoint.
    cool_setpoint: DegreesF,
    /// Operating mode.
    operating_mode: OperatingMode,
    /// Fan mode.
    fan_mode: FanMode,
    /// Eco mode flag.
    eco_enabled: bool,
    /// Current demand state.
    call_status: CallStatus,
    /// Number of applied changes that modified a field.
    revision: u64,
}

impl HvacState {
    /// Creates a zero-valued state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current temperature.
    #[must_use]
    pub fn current_temperature(&self) -> DegreesF {
        self.current_temperature
    }

    /// Gets the heat setpoint.
    #[must_use]
    pub fn heat_setpoint(&self) -> DegreesF {
        self.heat_setpoint
    }

    /// Gets the cool setpoint.
    #[must_use]
    pub fn cool_setpoint(&self) -> DegreesF {
        self.cool_setpoint
    }

    /// Gets the heat and cool setpoints as one pair.
    #[must_use]
    pub fn setpoints(&self) -> (DegreesF, DegreesF) {
        (self.heat_setpoint, self.cool_setpoint)
    }

    /// Gets the operating mode.
    #[must_use]
    pub fn operating_mode(&self) -> OperatingMode {
        self.operating_mode
    }

    /// Gets the fan mode.
    #[must_use]
    pub fn fan_mode(&self) -> FanMode {
        self.fan_mode
    }

    /// Returns `true` if eco mode is enabled.
    #[must_use]
    pub fn eco_enabled(&self) -> bool {
        self.eco_enabled
    }

    /// Gets the call status.
    #[must_use]
    pub fn call_status(&self) -> CallStatus {
        self.call_status
    }

    /// Gets the revision of this snapshot.
    ///
    /// Starts at zero and grows by one with every change that modifies a
    /// field. Of two snapshots of the same device, the one with the higher
    /// revision is the more recent, regardless of the order in which they
    /// were received.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a state change and returns whether the state actually changed.
    ///
    /// Only the fields named by the change are written; no other field is
    /// read or modified. The revision is bumped when anything changed.
    pub(crate) fn apply(&mut self, change: &StateChange) -> bool {
        macro_rules! update {
            ($field:ident, $value:expr) => {{
                let value = $value;
                if self.$field == value {
                    false
                } else {
                    self.$field = value;
                    true
                }
            }};
        }

        let changed = match *change {
            StateChange::CurrentTemperature(t) => update!(current_temperature, t),
            StateChange::Setpoints { heat, cool } => {
                let heat_changed = update!(heat_setpoint, heat);
                let cool_changed = update!(cool_setpoint, cool);
                heat_changed || cool_changed
            }
            StateChange::OperatingMode(m) => update!(operating_mode, m),
            StateChange::FanMode(f) => update!(fan_mode, f),
            StateChange::Eco(enabled) => update!(eco_enabled, enabled),
            StateChange::CallStatus(c) => update!(call_status, c),
        };

        if changed {
            self.revision += 1;
        }
        changed
    }
}
