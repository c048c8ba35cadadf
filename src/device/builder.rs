// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC device builder.

use crate::event::EventBus;
use crate::identity::Identity;
use crate::protocol::{NoStatusSource, StatusSource};
use crate::state::StateStore;

use super::Hvac;

/// Builder for configuring an [`Hvac`] device.
///
/// # Examples
///
/// ```
/// use lutron_hvac::event::EventBus;
/// use lutron_hvac::protocol::NoStatusSource;
/// use lutron_hvac::{Hvac, IntegrationId};
///
/// // Several devices can publish on one shared bus
/// let bus = EventBus::with_capacity(128);
///
/// let upstairs = Hvac::builder(IntegrationId::new(30))
///     .with_name("Upstairs")
///     .with_event_bus(bus.clone())
///     .with_status_source(NoStatusSource)
///     .build();
///
/// let downstairs = Hvac::builder(IntegrationId::new(31))
///     .with_event_bus(bus)
///     .build();
///
/// assert_eq!(upstairs.display_name(), "Upstairs");
/// assert_eq!(downstairs.display_name(), "HVAC 31");
/// ```
#[derive(Debug)]
pub struct HvacBuilder<I, S = NoStatusSource> {
    identity: I,
    name: Option<String>,
    events: Option<EventBus>,
    event_capacity: Option<usize>,
    status_source: S,
}

impl<I: Identity> HvacBuilder<I> {
    /// Creates a builder for the device with the given identity.
    pub(crate) fn new(identity: I) -> Self {
        Self {
            identity,
            name: None,
            events: None,
            event_capacity: None,
            status_source: NoStatusSource,
        }
    }
}

impl<I: Identity, S> HvacBuilder<I, S> {
    /// Sets a friendly name for the device.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Publishes events on an existing bus instead of a private one.
    ///
    /// Takes precedence over [`with_event_capacity`](Self::with_event_capacity).
    #[must_use]
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Sets the capacity of the device's private event bus.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = Some(capacity.max(1));
        self
    }

    /// Sets the source of status snapshots used on reconnect.
    #[must_use]
    pub fn with_status_source<T: StatusSource>(self, source: T) -> HvacBuilder<I, T> {
        HvacBuilder {
            identity: self.identity,
            name: self.name,
            events: self.events,
            event_capacity: self.event_capacity,
            status_source: source,
        }
    }

    /// Builds the device with a zero-valued state.
    #[must_use]
    pub fn build(self) -> Hvac<I, S> {
        let events = match (self.events, self.event_capacity) {
            (Some(bus), _) => bus,
            (None, Some(capacity)) => EventBus::with_capacity(capacity),
            (None, None) => EventBus::new(),
        };

        Hvac {
            identity: self.identity,
            name: self.name,
            state: StateStore::new(),
            events,
            status_source: self.status_source,
        }
    }
}
