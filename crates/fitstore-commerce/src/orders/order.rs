//! Order types.

use crate::address::Address;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId, UserId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, being prepared.
    #[default]
    Processing,
    /// Handed to the courier.
    Shipped,
    /// Received by the buyer.
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(CommerceError::UnknownStatus(other.to_string())),
        }
    }
}

/// A purchased product, snapshotted at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Unit price paid.
    pub price: Money,
}

impl OrderItem {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.quantity))
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Buyer who placed the order.
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
    /// Address snapshot at order time.
    pub shipping_address: Address,
}

impl Order {
    /// Create an order; the total is the sum of the item lines.
    pub fn new(
        id: OrderId,
        user_id: UserId,
        items: Vec<OrderItem>,
        status: OrderStatus,
        order_date: DateTime<Utc>,
        shipping_address: Address,
    ) -> Self {
        let currency = items
            .first()
            .map(|i| i.price.currency)
            .unwrap_or(Currency::INR);
        let total_minor = items
            .iter()
            .filter_map(OrderItem::line_total)
            .fold(0i64, |acc, m| acc.saturating_add(m.amount_minor));
        Self {
            id,
            user_id,
            items,
            total_amount: Money::new(total_minor, currency),
            status,
            order_date,
            expected_delivery: None,
            delivery_date: None,
            shipping_address,
        }
    }

    pub fn with_expected_delivery(mut self, at: DateTime<Utc>) -> Self {
        self.expected_delivery = Some(at);
        self
    }

    pub fn with_delivery_date(mut self, at: DateTime<Utc>) -> Self {
        self.delivery_date = Some(at);
        self
    }

    /// Sum of item quantities.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
