// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC device: status dispatch and reconnection handling.
//!
//! The transport delivers each status line to [`Hvac::handle_event`] and
//! calls [`Hvac::reconnect`] whenever its connection to the controller is
//! re-established. Everything in between (decoding, locking, change
//! notification) happens here.
//!
//! ```
//! use lutron_hvac::{Hvac, IntegrationId};
//! use lutron_hvac::types::FanMode;
//!
//! let hvac = Hvac::new(IntegrationId::new(12));
//!
//! hvac.handle_event("2,68.00,74.00").unwrap();
//! hvac.handle_event("4,2").unwrap();
//!
//! // Malformed lines are rejected without touching state
//! assert!(hvac.handle_event("2,abc,70").is_err());
//!
//! let state = hvac.state();
//! assert_eq!(state.heat_setpoint().value(), 68.0);
//! assert_eq!(state.fan_mode(), FanMode::On);
//! ```

mod builder;

pub use builder::HvacBuilder;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::error::{ParseError, Result};
use crate::event::{EventBus, HvacEvent};
use crate::identity::Identity;
use crate::protocol::{NoStatusSource, StatusSource};
use crate::state::{HvacState, StateChange, StateStore};
use crate::status::{StatusMessage, parse_status};
use crate::types::DegreesF;

/// Outcome of dispatching one status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The line was applied to the state.
    Applied {
        /// Whether any field actually changed value.
        changed: bool,
    },
    /// The line was a redundant Celsius mirror; decoded and discarded.
    Discarded,
    /// The action code is not handled; the line was logged and ignored.
    Ignored {
        /// The unhandled action code.
        action: i64,
    },
}

/// Outcome of replaying a status snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResyncReport {
    /// Lines applied to the state.
    pub applied: usize,
    /// Applied lines that actually changed a field.
    pub changed: usize,
    /// Redundant Celsius mirror lines.
    pub discarded: usize,
    /// Lines with an unhandled action code.
    pub ignored: usize,
    /// Lines that failed to decode.
    pub rejected: usize,
}

impl ResyncReport {
    /// Returns the number of lines in the snapshot.
    #[must_use]
    pub fn total(&self) -> usize {
        self.applied + self.discarded + self.ignored + self.rejected
    }

    fn record(&mut self, outcome: std::result::Result<Dispatch, &ParseError>) {
        match outcome {
            Ok(Dispatch::Applied { changed }) => {
                self.applied += 1;
                if changed {
                    self.changed += 1;
                }
            }
            Ok(Dispatch::Discarded) => self.discarded += 1,
            Ok(Dispatch::Ignored { .. }) => self.ignored += 1,
            Err(_) => self.rejected += 1,
        }
    }
}

/// An HVAC accessory of a home-automation controller.
///
/// Owns the live [`HvacState`] of one device and keeps it in sync with the
/// status lines the controller pushes.
///
/// # Type Parameters
///
/// - `I`: the [`Identity`] supplying the device's integration id
/// - `S`: the [`StatusSource`] used to resynchronize after a reconnect
///
/// `Hvac` is `Send + Sync` whenever `I` and `S` are, so one instance can be
/// fed by the transport while readers query it from other tasks.
pub struct Hvac<I, S = NoStatusSource> {
    identity: I,
    name: Option<String>,
    state: StateStore,
    events: EventBus,
    status_source: S,
}

impl<I: Identity> Hvac<I> {
    /// Creates a device with default settings and no status source.
    #[must_use]
    pub fn new(identity: I) -> Self {
        HvacBuilder::new(identity).build()
    }

    /// Returns a builder for configuring a device.
    #[must_use]
    pub fn builder(identity: I) -> HvacBuilder<I> {
        HvacBuilder::new(identity)
    }
}

impl<I: Identity, S> Hvac<I, S> {
    /// Returns the integration id of the device.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.identity.id()
    }

    /// Returns the identity collaborator.
    #[must_use]
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Returns the friendly name if set, otherwise a name derived from the id.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("HVAC {}", self.identity.id()),
        }
    }

    /// Returns a consistent snapshot of the device state.
    #[must_use]
    pub fn state(&self) -> HvacState {
        self.state.snapshot()
    }

    /// Returns the heat and cool setpoints, read together.
    #[must_use]
    pub fn setpoints(&self) -> (DegreesF, DegreesF) {
        self.state.setpoints()
    }

    /// Subscribes to the events of this device.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HvacEvent> {
        self.events.subscribe()
    }

    /// Returns the event bus this device publishes on.
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.events
    }

    /// Decodes one status line and applies it.
    ///
    /// Performs at most one state mutation. Celsius mirrors are decoded and
    /// discarded. Unhandled action codes produce one log record naming the
    /// device and the line, and are not an error.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the line cannot be decoded; the state is left
    /// untouched.
    pub fn handle_event(&self, line: &str) -> std::result::Result<(), ParseError> {
        self.dispatch(line).map(|_| ())
    }

    /// Decodes one status line, applies it, and reports what happened.
    ///
    /// Same behavior as [`handle_event`](Self::handle_event).
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the line cannot be decoded; the state is left
    /// untouched.
    pub fn dispatch(&self, line: &str) -> std::result::Result<Dispatch, ParseError> {
        let msg = parse_status(line)?;

        if let Some(change) = msg.to_state_change() {
            let changed = self.apply(change);
            return Ok(Dispatch::Applied { changed });
        }

        match msg {
            StatusMessage::Unrecognized { action } => {
                tracing::info!(
                    hvac = self.identity.id(),
                    event = line,
                    "HVAC ignoring unrecognized status"
                );
                Ok(Dispatch::Ignored { action })
            }
            _ => Ok(Dispatch::Discarded),
        }
    }

    /// Applies a change and publishes it if the state was modified.
    fn apply(&self, change: StateChange) -> bool {
        let Some(new_state) = self.state.apply(&change) else {
            return false;
        };

        // Lock is released here, so racing dispatchers may publish out of
        // order; the snapshot revision orders them
        self.events.publish(HvacEvent::StateChanged {
            device_id: self.identity.id(),
            change,
            new_state,
        });
        true
    }
}

impl<I: Identity, S: StatusSource> Hvac<I, S> {
    /// Resynchronizes the device after the transport reconnected.
    ///
    /// Status lines sent while the connection was down are lost, so the
    /// whole state is requested again and replayed through
    /// [`dispatch`](Self::dispatch). Failures are logged and published as
    /// [`HvacEvent::ResyncFailed`]; they never propagate to the transport.
    pub async fn reconnect(&self) {
        let device_id = self.identity.id();

        match self.resync().await {
            Ok(report) => tracing::debug!(
                hvac = device_id,
                applied = report.applied,
                changed = report.changed,
                rejected = report.rejected,
                "HVAC state resynchronized"
            ),
            Err(e) => tracing::warn!(
                hvac = device_id,
                error = %e,
                "HVAC resync failed, state may be stale"
            ),
        }
    }

    /// Requests a status snapshot and replays it.
    ///
    /// Lines that fail to decode are counted in the report and skipped; the
    /// remaining lines are still applied.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the status source cannot provide a
    /// snapshot. The state is left untouched in that case.
    pub async fn resync(&self) -> Result<ResyncReport> {
        let device_id = self.identity.id();

        let lines = match self.status_source.request_status(device_id).await {
            Ok(lines) => lines,
            Err(error) => {
                self.events.publish(HvacEvent::ResyncFailed {
                    device_id,
                    error: error.clone(),
                });
                return Err(error.into());
            }
        };

        let mut report = ResyncReport::default();
        for line in &lines {
            let outcome = self.dispatch(line);
            if let Err(e) = &outcome {
                tracing::warn!(hvac = device_id, line = %line, error = %e, "Skipping malformed snapshot line");
            }
            report.record(outcome.as_ref().copied());
        }

        self.events.publish(HvacEvent::Resynced { device_id, report });
        Ok(report)
    }
}

impl<I: Identity, S> std::fmt::Debug for Hvac<I, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hvac")
            .field("id", &self.identity.id())
            .field("display_name", &self.display_name())
            .field("state", &self.state.snapshot())
            .finish_non_exhaustive()
    }
}
