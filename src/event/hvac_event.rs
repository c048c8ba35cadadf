// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC event types.

use serde::Serialize;

use crate::device::ResyncReport;
use crate::error::ProtocolError;
use crate::state::{HvacState, StateChange};

/// Events emitted by an HVAC device.
///
/// All events carry the integration id of the device that emitted them, so
/// several devices can share one [`EventBus`](super::EventBus).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HvacEvent {
    /// A status line changed the device state.
    ///
    /// Not emitted when a line re-reports values the state already holds.
    ///
    /// When status lines are dispatched from several tasks at once, these
    /// events can be received out of order. Compare
    /// [`HvacState::revision`] to discard a snapshot older than one already
    /// seen.
    StateChanged {
        /// The integration id of the device.
        device_id: i32,
        /// The change that was applied.
        change: StateChange,
        /// The complete state right after the change.
        new_state: HvacState,
    },

    /// A status snapshot was requested and replayed after a reconnect.
    Resynced {
        /// The integration id of the device.
        device_id: i32,
        /// Outcome of the replay.
        report: ResyncReport,
    },

    /// The status snapshot could not be obtained after a reconnect.
    ///
    /// The state still holds whatever was last decoded and may be stale.
    ResyncFailed {
        /// The integration id of the device.
        device_id: i32,
        /// Why the snapshot request failed.
        #[serde(serialize_with = "serialize_display")]
        error: ProtocolError,
    },
}

fn serialize_display<S: serde::Serializer>(
    error: &ProtocolError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl HvacEvent {
    /// Returns the integration id associated with this event.
    #[must_use]
    pub fn device_id(&self) -> i32 {
        match self {
            Self::StateChanged { device_id, .. }
            | Self::Resynced { device_id, .. }
            | Self::ResyncFailed { device_id, .. } => *device_id,
        }
    }

    /// Returns `true` if this is a state change event.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }

    /// Returns `true` if this is a resynchronization event.
    #[must_use]
    pub fn is_resync(&self) -> bool {
        matches!(self, Self::Resynced { .. } | Self::ResyncFailed { .. })
    }

    /// Returns the revision of the carried snapshot if this is a state
    /// change event.
    #[must_use]
    pub fn revision(&self) -> Option<u64> {
        match self {
            Self::StateChanged { new_state, .. } => Some(new_state.revision()),
            _ => None,
        }
    }

    /// Returns the state change if this is a state change event.
    #[must_use]
    pub fn change(&self) -> Option<&StateChange> {
        match self {
            Self::StateChanged { change, .. } => Some(change),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DegreesF;

    fn state_changed(device_id: i32) -> HvacEvent {
        let change = StateChange::CurrentTemperature(DegreesF::new(70.0));
        HvacEvent::StateChanged {
            device_id,
            change,
            new_state: HvacState::new(),
        }
    }

    #[test]
    fn device_id_accessor() {
        assert_eq!(state_changed(4).device_id(), 4);

        let failed = HvacEvent::ResyncFailed {
            device_id: 8,
            error: ProtocolError::NoStatusSource,
        };
        assert_eq!(failed.device_id(), 8);
    }

    #[test]
    fn classification() {
        let event = state_changed(1);
        assert!(event.is_state_change());
        assert!(!event.is_resync());
        assert!(event.change().is_some());

        let resynced = HvacEvent::Resynced {
            device_id: 1,
            report: ResyncReport::default(),
        };
        assert!(resynced.is_resync());
        assert!(resynced.change().is_none());
        assert!(resynced.revision().is_none());
    }

    #[test]
    fn resync_failure_serializes_message() {
        let event = HvacEvent::ResyncFailed {
            device_id: 2,
            error: ProtocolError::ConnectionFailed("reset by peer".to_string()),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json["ResyncFailed"]["error"],
            "connection failed: reset by peer"
        );
    }
}
