// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock-guarded live state of one device.

use parking_lot::Mutex;

use crate::types::{CallStatus, DegreesF, FanMode, OperatingMode};

use super::{HvacState, StateChange};

/// Live state of one HVAC device behind a single exclusive lock.
///
/// Every mutation and every read holds the lock for its whole duration and
/// nothing else: no I/O, no logging, no other lock. Multi-field reads
/// ([`snapshot`](Self::snapshot), [`setpoints`](Self::setpoints)) therefore
/// never observe a half-applied update.
///
/// The lock is per store; separate devices never share one.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: Mutex<HvacState>,
}

impl StateStore {
    /// Creates a store holding a zero-valued state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a change under the lock.
    ///
    /// Returns the snapshot taken right after the change if the state was
    /// modified, `None` if it already held the target values.
    pub fn apply(&self, change: &StateChange) -> Option<HvacState> {
        let mut state = self.inner.lock();
        state.apply(change).then_some(*state)
    }

    // ========== Mutations ==========
    //
    // Shorthands for `apply` with the matching `StateChange`, for callers
    // that do not need the resulting snapshot. `Hvac` dispatch goes through
    // `apply` directly so it can publish that snapshot.

    /// Sets the current temperature.
    pub fn set_current_temperature(&self, value: DegreesF) {
        self.apply(&StateChange::CurrentTemperature(value));
    }

    /// Sets both setpoints in one critical section.
    ///
    /// Same as [`apply`](Self::apply) with [`StateChange::Setpoints`].
    pub fn set_setpoints(&self, heat: DegreesF, cool: DegreesF) {
        self.apply(&StateChange::Setpoints { heat, cool });
    }

    /// Sets the operating mode.
    pub fn set_mode(&self, mode: OperatingMode) {
        self.apply(&StateChange::OperatingMode(mode));
    }

    /// Sets the fan mode.
    pub fn set_fan(&self, fan: FanMode) {
        self.apply(&StateChange::FanMode(fan));
    }

    /// Sets the eco flag.
    pub fn set_eco(&self, enabled: bool) {
        self.apply(&StateChange::Eco(enabled));
    }

    /// Sets the call status.
    pub fn set_call_status(&self, call: CallStatus) {
        self.apply(&StateChange::CallStatus(call));
    }

    // ========== Reads ==========

    /// Returns a consistent copy of every field.
    #[must_use]
    pub fn snapshot(&self) -> HvacState {
        *self.inner.lock()
    }

    /// Returns the heat and cool setpoints read together.
    #[must_use]
    pub fn setpoints(&self) -> (DegreesF, DegreesF) {
        self.inner.lock().setpoints()
    }

    /// Gets the current temperature.
    #[must_use]
    pub fn current_temperature(&self) -> DegreesF {
        self.inner.lock().current_temperature()
    }

    /// Gets the operating mode.
    #[must_use]
    pub fn operating_mode(&self) -> OperatingMode {
        self.inner.lock().operating_mode()
    }

    /// Gets the fan mode.
    #[must_use]
    pub fn fan_mode(&self) -> FanMode {
        self.inner.lock().fan_mode()
    }

    /// Returns `true` if eco mode is enabled.
    #[must_use]
    pub fn eco_enabled(&self) -> bool {
        self.inner.lock().eco_enabled()
    }

    /// Gets the call status.
    #[must_use]
    pub fn call_status(&self) -> CallStatus {
        self.inner.lock().call_status()
    }
}
