//! Order Records

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

use crate::{domain::dishes::Dish, ids::TypedId, store::Entity};

use super::data::NewOrder;

/// Order Id
pub type OrderId = TypedId<Order>;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderStatus {
    #[default]
    Paid,
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Paid,
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status `{0}`")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Ok(Self::default());
        }

        Self::ALL
            .into_iter()
            .find(|status| {
                status.as_str().eq_ignore_ascii_case(value)
                    || status.as_str().replace(' ', "-").eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| UnknownOrderStatus(value.to_owned()))
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(D::Error::custom)
    }
}

/// Totals and status of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(default)]
    pub status: OrderStatus,

    #[serde(default)]
    pub total_price: u64,

    #[serde(default)]
    pub delivery_fee: u64,
}

/// Cart Line Item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TypedId<Dish>>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: u64,

    #[serde(default)]
    pub quantity: u32,
}

/// Order Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    /// Customer name.
    #[serde(default, alias = "customerName")]
    pub name: String,

    #[serde(default, rename = "orderSummary")]
    pub summary: OrderSummary,

    #[serde(default, rename = "cartItems")]
    pub items: Vec<CartItem>,
}

impl Order {
    /// Amount charged for the order: items plus delivery.
    #[must_use]
    pub fn amount_due(&self) -> u64 {
        self.summary
            .total_price
            .saturating_add(self.summary.delivery_fee)
    }
}

impl Entity for Order {
    type Draft = NewOrder;

    const COLLECTION: &'static str = "orders";
    const STORAGE_KEY: &'static str = "orders-storage";

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewOrder, _created_at: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            summary: draft.summary,
            items: draft.items,
        }
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_parsing_accepts_lower_case_and_defaults_to_paid() -> TestResult {
        assert_eq!("paid".parse::<OrderStatus>()?, OrderStatus::Paid);
        assert_eq!("in progress".parse::<OrderStatus>()?, OrderStatus::InProgress);
        assert_eq!("In-Progress".parse::<OrderStatus>()?, OrderStatus::InProgress);
        assert_eq!("".parse::<OrderStatus>()?, OrderStatus::Paid);
        assert!("lost".parse::<OrderStatus>().is_err());

        Ok(())
    }

    #[test]
    fn reads_customer_name_alias_and_camel_case_fields() -> TestResult {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "o-1",
                "customerName": "Awa",
                "orderSummary": { "status": "In Progress", "totalPrice": 9000, "deliveryFee": 500 },
                "cartItems": [{ "id": "d-1", "name": "Ndolé", "price": 4500, "quantity": 2 }]
            }"#,
        )?;

        assert_eq!(order.name, "Awa");
        assert_eq!(order.summary.status, OrderStatus::InProgress);
        assert_eq!(order.amount_due(), 9500);
        assert_eq!(order.items.len(), 1);

        let written = serde_json::to_value(&order)?;

        assert_eq!(written["orderSummary"]["status"], "In Progress");
        assert_eq!(written["name"], "Awa");

        Ok(())
    }
}
