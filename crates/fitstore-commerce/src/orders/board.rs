//! The seller's order board, persisted under the `orders` key.

use crate::demo;
use crate::error::CommerceError;
use crate::ids::{OrderId, UserId};
use crate::orders::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use fitstore_cache::{keys, Cache};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of orders in each status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Processing => self.processing,
            OrderStatus::Shipped => self.shipped,
            OrderStatus::Delivered => self.delivered,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderBoard {
    orders: Vec<Order>,
    cache: Cache,
}

impl OrderBoard {
    /// Load the persisted board, falling back to the demo orders.
    pub fn load(cache: Cache) -> Result<Self, CommerceError> {
        let orders = match cache.get::<Vec<Order>>(keys::ORDERS)? {
            Some(orders) => orders,
            None => demo::orders(),
        };
        Ok(Self { orders, cache })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Orders whose id contains `search` (case-insensitive) and, when
    /// given, whose status matches.
    pub fn filter(&self, search: &str, status: Option<OrderStatus>) -> Vec<&Order> {
        let needle = search.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| needle.is_empty() || o.id.as_str().to_lowercase().contains(&needle))
            .filter(|o| status.map_or(true, |s| o.status == s))
            .collect()
    }

    /// Orders placed by one buyer, newest first as stored.
    pub fn for_user(&self, user_id: &UserId) -> Vec<&Order> {
        self.orders.iter().filter(|o| &o.user_id == user_id).collect()
    }

    /// Change an order's status. Moving to delivered records `now` as the
    /// delivery date.
    pub fn set_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<(), CommerceError> {
        let mut orders = self.orders.clone();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;
        let previous = order.status;
        order.status = status;
        if status == OrderStatus::Delivered && order.delivery_date.is_none() {
            order.delivery_date = Some(now);
        }
        self.cache.set(keys::ORDERS, &orders)?;
        self.orders = orders;
        info!(order_id = %id, from = %previous, to = %status, "order status changed");
        Ok(())
    }

    pub fn count_by_status(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.orders.len(),
            ..StatusCounts::default()
        };
        for order in &self.orders {
            match order.status {
                OrderStatus::Processing => counts.processing += 1,
                OrderStatus::Shipped => counts.shipped += 1,
                OrderStatus::Delivered => counts.delivered += 1,
            }
        }
        counts
    }
}
