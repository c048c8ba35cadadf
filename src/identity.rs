// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity.
//!
//! Identifiers are assigned and persisted by the surrounding integration.
//! This crate only reads them, for logging and event tagging.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Supplies the stable integer identifier of a device.
///
/// Held by composition: an [`Hvac`](crate::Hvac) keeps its identity as a
/// field rather than inheriting from a component type.
pub trait Identity {
    /// Returns the integration id of the device.
    fn id(&self) -> i32;
}

impl<T: Identity + ?Sized> Identity for &T {
    fn id(&self) -> i32 {
        (**self).id()
    }
}

impl<T: Identity + ?Sized> Identity for Arc<T> {
    fn id(&self) -> i32 {
        (**self).id()
    }
}

/// Integration id assigned to a device by the controller.
///
/// # Examples
///
/// ```
/// use lutron_hvac::{Identity, IntegrationId};
///
/// let id = IntegrationId::new(27);
/// assert_eq!(id.id(), 27);
/// assert_eq!(id.to_string(), "27");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IntegrationId(i32);

impl IntegrationId {
    /// Creates an identifier from its integer value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl Identity for IntegrationId {
    fn id(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for IntegrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for IntegrationId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<IntegrationId> for i32 {
    fn from(id: IntegrationId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Component {
        id: i32,
    }

    impl Identity for Component {
        fn id(&self) -> i32 {
            self.id
        }
    }

    #[test]
    fn integration_id_round_trip() {
        let id = IntegrationId::from(12);
        assert_eq!(id.value(), 12);
        assert_eq!(i32::from(id), 12);
    }

    #[test]
    fn references_and_arcs_forward() {
        let component = Component { id: 5 };
        assert_eq!((&component).id(), 5);

        let shared: Arc<dyn Identity + Send + Sync> = Arc::new(IntegrationId::new(9));
        assert_eq!(shared.id(), 9);
    }

    #[test]
    fn hashable() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(IntegrationId::new(3));
        assert!(set.contains(&IntegrationId::new(3)));
    }
}
