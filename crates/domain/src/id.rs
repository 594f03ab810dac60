//! Typed identifiers for floorplan records.
//!
//! Every record is keyed by a random UUID rendered in its lowercase hyphenated
//! form. That text is what clients send in paths and bodies, what the API
//! returns as `id`, and what the storage layer keys rows by. Parsing accepts
//! any form `uuid` understands, so ids always come back canonical.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text that does not parse as an identifier of the expected kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id `{value}`")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Record kind named in parse errors.
            pub const KIND: &'static str = $kind;

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.hyphenated().fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self).map_err(|_| ParseIdError {
                    kind: Self::KIND,
                    value: s.to_string(),
                })
            }
        }
    };
}

define_id!(
    /// Identifies an [`Area`](crate::area::Area). Stays valid after the area
    /// is soft-deleted, so lookups by id still find it.
    AreaId,
    "area"
);

define_id!(
    /// Identifies a [`Table`](crate::table::Table) listed in an area's `tables`.
    TableId,
    "table"
);

define_id!(
    /// Identifies the [`Order`](crate::order::Order) seated at a table.
    OrderId,
    "order"
);

define_id!(
    /// Identifies the [`Outlet`](crate::outlet::Outlet) an area belongs to.
    OutletId,
    "outlet"
);
