//! Orders module.
//!
//! Contains order records, the seller's order board and the dashboard.

mod board;
mod dashboard;
mod order;

pub use board::{OrderBoard, StatusCounts};
pub use dashboard::{DashboardRules, SellerDashboard};
pub use order::{Order, OrderItem, OrderStatus};
