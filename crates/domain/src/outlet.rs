//! Outlet — the venue an area belongs to.

use serde::{Deserialize, Serialize};

use crate::id::OutletId;
use crate::status::DelStatus;

/// A restaurant or venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: OutletId,
    pub outlet_name: String,
    pub address: Option<String>,
    #[serde(default)]
    pub del_status: DelStatus,
}

impl Outlet {
    #[must_use]
    pub fn new(outlet_name: impl Into<String>) -> Self {
        Self {
            id: OutletId::new(),
            outlet_name: outlet_name.into(),
            address: None,
            del_status: DelStatus::Live,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
