//! Caller-supplied identifiers attached to every exported row.
//!
//! Vehicle and trip identifiers are opaque strings chosen by the fleet
//! operator (`"WB4222"`, `"trip-0002"`).  The core never generates them; the
//! wrappers only keep the two from being swapped at a call site.

use std::fmt;

/// Generate a typed string wrapper.
macro_rules! text_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

text_id! {
    /// Fleet vehicle identifier (registration or asset tag).
    pub struct VehicleId;
}

text_id! {
    /// Identifier of one simulated trip.
    pub struct TripId;
}
