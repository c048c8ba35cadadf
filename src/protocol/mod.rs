// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seam between an HVAC device and the controller connection.
//!
//! Status lines normally arrive unsolicited. After the connection drops and
//! comes back, anything the controller reported in between is lost, so the
//! device asks the connection for a fresh snapshot through
//! [`StatusSource`] and replays it through its regular dispatch path.
//!
//! How the snapshot is requested on the wire belongs to the implementation;
//! a typical one queries every action in [`action::SNAPSHOT`] for the
//! device and collects the replies.
//!
//! [`action::SNAPSHOT`]: crate::status::action::SNAPSHOT

use std::sync::Arc;

use crate::error::ProtocolError;

/// Source of full status snapshots for a device.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// Requests the current status of a device from the controller.
    ///
    /// Returns the status lines in the same `<action>,<payload…>` form the
    /// transport delivers to [`Hvac::handle_event`](crate::Hvac::handle_event),
    /// in the order they should be applied.
    ///
    /// # Arguments
    ///
    /// * `device_id` - The integration id of the device
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the controller cannot be queried.
    async fn request_status(&self, device_id: i32) -> Result<Vec<String>, ProtocolError>;
}

impl<S: StatusSource> StatusSource for Arc<S> {
    async fn request_status(&self, device_id: i32) -> Result<Vec<String>, ProtocolError> {
        (**self).request_status(device_id).await
    }
}

/// Placeholder source for devices built without a connection.
///
/// Every request fails with [`ProtocolError::NoStatusSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatusSource;

impl StatusSource for NoStatusSource {
    async fn request_status(&self, _device_id: i32) -> Result<Vec<String>, ProtocolError> {
        Err(ProtocolError::NoStatusSource)
    }
}
