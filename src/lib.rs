// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `lutron_hvac` - HVAC state synchronization for Lutron integration controllers.
//!
//! A home-automation controller pushes a status line whenever something
//! changes on a thermostat. This library decodes those lines and keeps a
//! per-device state record consistent for concurrent readers. Owning the
//! connection and splitting its byte stream into lines is left to the
//! caller's transport.
//!
//! # Supported Status
//!
//! - **Temperature**: current reading, heat and cool setpoints (°F)
//! - **Modes**: operating mode, fan mode, eco mode
//! - **Demand**: call status (heating, cooling, idle)
//!
//! Celsius mirrors of the temperatures are validated and discarded.
//!
//! # Quick Start
//!
//! ```
//! use lutron_hvac::{Hvac, IntegrationId};
//!
//! let hvac = Hvac::new(IntegrationId::new(42));
//!
//! // Feed lines as the transport receives them
//! hvac.handle_event("1,071.50")?;
//! hvac.handle_event("2,68.00,74.00")?;
//! hvac.handle_event("5,2")?;
//!
//! let state = hvac.state();
//! assert_eq!(state.current_temperature().value(), 71.5);
//! assert!(state.eco_enabled());
//! # Ok::<(), lutron_hvac::ParseError>(())
//! ```
//!
//! # Reconnection
//!
//! Lines sent while the connection was down are lost. Give the device a
//! [`StatusSource`] and call [`Hvac::reconnect`] after every reconnect to
//! fetch and replay a full snapshot:
//!
//! ```
//! use lutron_hvac::{Hvac, IntegrationId, ProtocolError, StatusSource};
//!
//! struct Controller;
//!
//! impl StatusSource for Controller {
//!     async fn request_status(&self, _id: i32) -> Result<Vec<String>, ProtocolError> {
//!         Ok(vec!["1,70.00".into(), "3,4".into()])
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let hvac = Hvac::builder(IntegrationId::new(42))
//!     .with_status_source(Controller)
//!     .build();
//!
//! hvac.reconnect().await;
//! assert_eq!(hvac.state().current_temperature().value(), 70.0);
//! # }
//! ```

mod device;
pub mod error;
pub mod event;
mod identity;
pub mod protocol;
pub mod state;
pub mod status;
pub mod types;

pub use device::{Dispatch, Hvac, HvacBuilder, ResyncReport};
pub use error::{Error, ParseError, ProtocolError, Result};
pub use identity::{Identity, IntegrationId};
pub use protocol::{NoStatusSource, StatusSource};
pub use state::{HvacState, StateChange};
pub use status::{StatusMessage, parse_status};
