// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer-coded HVAC enumerations.
//!
//! The controller reports operating mode, fan mode and call status as bare
//! integers. Each enumeration names the values documented for the Lutron
//! integration protocol and keeps every other value in an explicit
//! `Unrecognized` variant. Conversion is lossless in both directions and no
//! range checking is performed, so a controller reporting an undocumented
//! value is recorded as-is rather than rejected.

use std::fmt;

use serde::Serialize;

/// Declares an open, integer-backed enumeration.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the documented set, kept verbatim.
            Unrecognized(i64),
        }

        impl $name {
            /// Converts a wire integer into the enumeration.
            #[must_use]
            pub const fn from_code(code: i64) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Unrecognized(other),
                }
            }

            /// Returns the wire integer for this value.
            #[must_use]
            pub const fn code(&self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unrecognized(code) => *code,
                }
            }

            /// Returns `true` if the value is one of the documented codes.
            #[must_use]
            pub const fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_code(0)
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                Self::from_code(code)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Unrecognized(code) => write!(f, "unrecognized({code})"),
                    other => write!(f, "{other:?}"),
                }
            }
        }
    };
}

open_enum! {
    /// Thermostat operating mode (action 3).
    OperatingMode {
        /// System off.
        Off = 1,
        /// Heating only.
        Heat = 2,
        /// Cooling only.
        Cool = 3,
        /// Automatic heat/cool changeover.
        Auto = 4,
        /// Emergency or auxiliary heat only.
        EmergencyHeat = 5,
        /// Thermostat locked out.
        LockedOut = 6,
        /// Fan only.
        Fan = 7,
        /// Dehumidification.
        Dry = 8,
    }
}

open_enum! {
    /// Fan mode (action 4).
    FanMode {
        /// Fan runs on demand.
        Auto = 1,
        /// Fan runs continuously.
        On = 2,
        /// Fan cycles periodically.
        Cycler = 3,
        /// No fan installed.
        NoFan = 4,
        /// High speed.
        High = 5,
        /// Medium speed.
        Medium = 6,
        /// Low speed.
        Low = 7,
        /// Top speed.
        Top = 8,
    }
}

open_enum! {
    /// Current demand state (action 14).
    CallStatus {
        /// No demand; the last call was for heat.
        IdleLastHeat = 0,
        /// Heat stage 1.
        HeatStage1 = 1,
        /// Heat stages 1 and 2.
        HeatStage1And2 = 2,
        /// Heat stages 1, 2 and 3.
        HeatStage1To3 = 3,
        /// Heat stage 3.
        HeatStage3 = 4,
        /// No demand; the last call was for cooling.
        IdleLastCool = 5,
        /// Cool stage 1.
        CoolStage1 = 6,
        /// Cool stage 2.
        CoolStage2 = 7,
        /// System off.
        Off = 8,
        /// Emergency heat.
        EmergencyHeat = 9,
        /// Dehumidification.
        Dry = 10,
    }
}

impl CallStatus {
    /// Returns `true` if the controller is actively calling for heat.
    #[must_use]
    pub const fn is_heating(&self) -> bool {
        matches!(
            self,
            Self::HeatStage1
                | Self::HeatStage1And2
                | Self::HeatStage1To3
                | Self::HeatStage3
                | Self::EmergencyHeat
        )
    }

    /// Returns `true` if the controller is actively calling for cooling.
    #[must_use]
    pub const fn is_cooling(&self) -> bool {
        matches!(self, Self::CoolStage1 | Self::CoolStage2)
    }
}

/// Wire value of the eco indicator meaning "eco enabled".
///
/// Every other integer means disabled; this is an explicit mapping, not a
/// boolean cast.
pub const ECO_ENABLED: i64 = 2;
