//! Table — a seating position inside an area.

use serde::{Deserialize, Serialize};

use crate::id::{OrderId, TableId};
use crate::order::OrderSummary;
use crate::status::DelStatus;

/// A physical table, optionally linked to the order currently seated at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub table_name: String,
    pub seat_capacity: u32,
    pub order: Option<OrderId>,
    #[serde(default)]
    pub del_status: DelStatus,
}

impl Table {
    /// Create a builder for constructing a [`Table`].
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Attach a resolved order, yielding the view exposed through an area.
    #[must_use]
    pub fn populate(self, order: Option<OrderSummary>) -> PopulatedTable {
        PopulatedTable {
            id: self.id,
            table_name: self.table_name,
            seat_capacity: self.seat_capacity,
            order,
            del_status: self.del_status,
        }
    }
}

/// Step-by-step builder for [`Table`].
#[derive(Debug, Default)]
pub struct TableBuilder {
    id: Option<TableId>,
    table_name: Option<String>,
    seat_capacity: Option<u32>,
    order: Option<OrderId>,
    del_status: DelStatus,
}

impl TableBuilder {
    #[must_use]
    pub fn id(mut self, id: TableId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    #[must_use]
    pub fn seat_capacity(mut self, seat_capacity: u32) -> Self {
        self.seat_capacity = Some(seat_capacity);
        self
    }

    #[must_use]
    pub fn order(mut self, order: OrderId) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn del_status(mut self, del_status: DelStatus) -> Self {
        self.del_status = del_status;
        self
    }

    /// Consume the builder. Missing capacity defaults to four seats.
    #[must_use]
    pub fn build(self) -> Table {
        Table {
            id: self.id.unwrap_or_default(),
            table_name: self.table_name.unwrap_or_default(),
            seat_capacity: self.seat_capacity.unwrap_or(4),
            order: self.order,
            del_status: self.del_status,
        }
    }
}

/// A [`Table`] whose `order` reference has been resolved.
///
/// `order` is `None` when the table has no order or the order is not live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulatedTable {
    pub id: TableId,
    pub table_name: String,
    pub seat_capacity: u32,
    pub order: Option<OrderSummary>,
    pub del_status: DelStatus,
}
