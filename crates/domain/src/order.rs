//! Order — only ever seen through the table it is seated at.

use serde::{Deserialize, Serialize};

use crate::id::OrderId;
use crate::status::DelStatus;

/// An order placed at a table.
///
/// `order_status` is owned by the ordering workflow and treated as opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_status: String,
    #[serde(default)]
    pub del_status: DelStatus,
}

impl Order {
    #[must_use]
    pub fn new(order_status: impl Into<String>) -> Self {
        Self {
            id: OrderId::new(),
            order_status: order_status.into(),
            del_status: DelStatus::Live,
        }
    }

    /// Project the order down to the fields exposed through an area.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            order_status: self.order_status.clone(),
        }
    }
}

/// The `order_status` projection attached to a populated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_status: String,
}
