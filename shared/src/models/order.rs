//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
///
/// Flat status field: any value may be assigned from any other, there is
/// no transition guard. The storefront never drives these transitions;
/// the admin layer does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Processing => "Processing",
            Self::Ready => "Ready",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Position in the standard fulfilment flow; `None` for cancelled
    /// orders, which sit outside it.
    pub fn progress_index(&self) -> Option<usize> {
        match self {
            Self::Pending => Some(0),
            Self::Confirmed => Some(1),
            Self::Processing => Some(2),
            Self::Ready => Some(3),
            Self::Delivered => Some(4),
            Self::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// Delivery type, shared by orders and the checkout form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    #[default]
    Delivery,
    Pickup,
}

/// Order line as captured at submission time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_image: String,
    pub quantity: u32,
    /// Weight in pounds, for sized cakes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Line price in rupees (unit price x quantity)
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Order entity (admin-side mock collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub delivery_type: DeliveryType,
    pub delivery_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order payload
///
/// Id, order number and timestamps are assigned by the order store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub delivery_type: DeliveryType,
    pub delivery_date: DateTime<Utc>,
    pub delivery_time: Option<String>,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
    pub notes: Option<String>,
}

/// Aggregate figures for the admin dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: u32,
    pub total_revenue: f64,
    pub pending_orders: u32,
    pub completed_orders: u32,
    pub custom_order_requests: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_index_follows_fulfilment_flow() {
        assert_eq!(OrderStatus::Pending.progress_index(), Some(0));
        assert_eq!(OrderStatus::Delivered.progress_index(), Some(4));
        assert_eq!(OrderStatus::Cancelled.progress_index(), None);
    }

    #[test]
    fn terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn status_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"processing\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryType::Pickup).unwrap(),
            "\"pickup\""
        );
    }
}
