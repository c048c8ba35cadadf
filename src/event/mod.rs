// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for HVAC state changes.
//!
//! Each [`Hvac`](crate::Hvac) publishes an [`HvacEvent`] on its [`EventBus`]
//! after a status line changed its state and after every resynchronization
//! attempt. The bus uses tokio's broadcast channel, so any number of readers
//! can follow a device without polling.
//!
//! # Examples
//!
//! ```
//! use lutron_hvac::event::{EventBus, HvacEvent};
//! use lutron_hvac::{Hvac, IntegrationId};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let hvac = Hvac::builder(IntegrationId::new(7))
//!     .with_event_bus(bus.clone())
//!     .build();
//! hvac.handle_event("1,70.5").unwrap();
//!
//! let event = rx.try_recv().unwrap();
//! assert!(matches!(event, HvacEvent::StateChanged { device_id: 7, .. }));
//! ```

mod event_bus;
mod hvac_event;

pub use event_bus::EventBus;
pub use hvac_event::HvacEvent;
