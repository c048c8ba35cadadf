// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC state management types.
//!
//! [`HvacState`] is a plain snapshot of one device. [`StateChange`] is a
//! single field-group update decoded from the wire. [`StateStore`] owns the
//! live state behind one exclusive lock and is the only place it is mutated.
//!
//! # Examples
//!
//! ```
//! use lutron_hvac::state::StateStore;
//! use lutron_hvac::types::DegreesF;
//!
//! let store = StateStore::new();
//! store.set_setpoints(DegreesF::new(68.0), DegreesF::new(74.0));
//!
//! let (heat, cool) = store.setpoints();
//! assert_eq!(heat.value(), 68.0);
//! assert_eq!(cool.value(), 74.0);
//! ```

mod hvac_state;
mod state_change;
mod store;

pub use hvac_state::HvacState;
pub use state_change::StateChange;
pub use store::StateStore;
