//! Mock order access
//!
//! Async suppliers over the seeded order collections, used by the admin
//! panel and the tracking page. Every call sleeps the configured mock
//! delay first; mutations apply to the in-memory collection and refresh
//! `updated_at`. Status fields have no transition guard: the admin may
//! assign any status from any other.

use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use shared::models::{
    CustomOrder, CustomOrderCreate, CustomOrderStatus, CustomOrderUpdate, DashboardStats, Order,
    OrderCreate, OrderStatus,
};
use thiserror::Error;
use tracing::{debug, info};

use super::{seed, tracking};

/// Order-layer errors
#[derive(Debug, Error)]
pub enum OrdersError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Custom order not found: {0}")]
    CustomOrderNotFound(String),
}

pub type OrdersResult<T> = Result<T, OrdersError>;

/// Admin-side order list filters
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    /// Inclusive bounds on `created_at`
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    /// `None` means all statuses
    pub status: Option<OrderStatus>,
}

/// Mock order collections
pub struct MockOrderApi {
    orders: Vec<Order>,
    custom_orders: Vec<CustomOrder>,
    stats: DashboardStats,
    delay: Duration,
}

impl MockOrderApi {
    pub fn new(
        orders: Vec<Order>,
        custom_orders: Vec<CustomOrder>,
        stats: DashboardStats,
        delay: Duration,
    ) -> Self {
        Self {
            orders,
            custom_orders,
            stats,
            delay,
        }
    }

    /// Collections seeded with the standard mock data
    pub fn seeded(delay: Duration) -> Self {
        Self::new(
            seed::orders(),
            seed::custom_orders(),
            seed::dashboard_stats(),
            delay,
        )
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(self.delay).await;
    }

    // ── Standard orders ─────────────────────────────────────────────

    pub async fn list(&self, filters: &OrderFilters) -> Vec<Order> {
        self.simulate_latency().await;
        self.orders
            .iter()
            .filter(|order| {
                filters.date_range.is_none_or(|(from, to)| {
                    order.created_at >= from && order.created_at <= to
                }) && filters.status.is_none_or(|status| order.status == status)
            })
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<Order> {
        self.simulate_latency().await;
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    pub async fn get_by_number(&self, order_number: &str) -> Option<Order> {
        self.simulate_latency().await;
        self.orders
            .iter()
            .find(|o| o.order_number == order_number)
            .cloned()
    }

    /// Tracking lookup: order number (case-insensitive) or phone (exact)
    pub async fn track(&self, query: &str) -> Option<Order> {
        self.simulate_latency().await;
        tracking::find_order(&self.orders, query).cloned()
    }

    /// Create an order, assigning id, order number and timestamps
    pub async fn create(&mut self, draft: OrderCreate) -> Order {
        self.simulate_latency().await;
        let now = Utc::now();
        let seq = self.orders.len() + 1;
        let order = Order {
            id: seq.to_string(),
            order_number: format!("ORD-{}-{:03}", now.year(), seq),
            customer_name: draft.customer_name,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            delivery_type: draft.delivery_type,
            delivery_date: draft.delivery_date,
            delivery_time: draft.delivery_time,
            items: draft.items,
            subtotal: draft.subtotal,
            delivery_fee: draft.delivery_fee,
            total: draft.total,
            status: draft.status,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        info!(order_number = %order.order_number, "created order");
        self.orders.push(order.clone());
        order
    }

    /// Assign a status; any status is reachable from any other
    pub async fn update_status(&mut self, id: &str, status: OrderStatus) -> OrdersResult<Order> {
        self.simulate_latency().await;
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| OrdersError::OrderNotFound(id.to_string()))?;
        debug!(id, from = order.status.label(), to = status.label(), "order status change");
        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    // ── Custom orders ───────────────────────────────────────────────

    pub async fn list_custom(&self) -> Vec<CustomOrder> {
        self.simulate_latency().await;
        self.custom_orders.clone()
    }

    pub async fn get_custom(&self, id: &str) -> Option<CustomOrder> {
        self.simulate_latency().await;
        self.custom_orders.iter().find(|o| o.id == id).cloned()
    }

    /// Create a custom-cake request; status starts at `new`
    pub async fn create_custom(&mut self, draft: CustomOrderCreate) -> CustomOrder {
        self.simulate_latency().await;
        let now = Utc::now();
        let order = CustomOrder {
            id: (self.custom_orders.len() + 1).to_string(),
            customer_name: draft.customer_name,
            phone: draft.phone,
            email: draft.email,
            cake_details: draft.cake_details,
            preferred_date: draft.preferred_date,
            reference_image: draft.reference_image,
            status: CustomOrderStatus::New,
            admin_notes: None,
            quoted_price: None,
            created_at: now,
            updated_at: now,
        };
        info!(id = %order.id, "created custom order request");
        self.custom_orders.push(order.clone());
        order
    }

    /// Apply a partial update; a status change may carry an admin note
    /// and a quoted price in the same mutation.
    pub async fn update_custom(
        &mut self,
        id: &str,
        update: CustomOrderUpdate,
    ) -> OrdersResult<CustomOrder> {
        self.simulate_latency().await;
        let order = self
            .custom_orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| OrdersError::CustomOrderNotFound(id.to_string()))?;

        if let Some(status) = update.status {
            order.status = status;
        }
        if let Some(notes) = update.admin_notes {
            order.admin_notes = Some(notes);
        }
        if let Some(price) = update.quoted_price {
            order.quoted_price = Some(price);
        }
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    // ── Dashboard ───────────────────────────────────────────────────

    pub async fn dashboard_stats(&self) -> DashboardStats {
        self.simulate_latency().await;
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn api() -> MockOrderApi {
        MockOrderApi::seeded(Duration::ZERO)
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let api = api();
        let pending = api
            .list(&OrderFilters {
                status: Some(OrderStatus::Pending),
                ..Default::default()
            })
            .await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].order_number, "ORD-2024-001");
    }

    #[tokio::test]
    async fn list_filters_by_created_date_range() {
        let api = api();
        let from = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 21, 23, 59, 59).unwrap();
        let in_range = api
            .list(&OrderFilters {
                date_range: Some((from, to)),
                ..Default::default()
            })
            .await;
        assert_eq!(in_range.len(), 2);
    }

    #[tokio::test]
    async fn update_status_refreshes_timestamp() {
        let mut api = api();
        let before = api.get("1").await.unwrap().updated_at;
        let updated = api.update_status("1", OrderStatus::Confirmed).await.unwrap();

        assert_eq!(updated.status, OrderStatus::Confirmed);
        assert!(updated.updated_at > before);
        // The mutation is applied to the collection
        assert_eq!(api.get("1").await.unwrap().status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn any_status_is_reachable_from_any_other() {
        let mut api = api();
        api.update_status("3", OrderStatus::Pending).await.unwrap();
        api.update_status("3", OrderStatus::Cancelled).await.unwrap();
        let back = api.update_status("3", OrderStatus::Delivered).await.unwrap();
        assert_eq!(back.status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn update_status_unknown_id_is_not_found() {
        let mut api = api();
        let err = api.update_status("999", OrderStatus::Ready).await.unwrap_err();
        assert!(matches!(err, OrdersError::OrderNotFound(_)));
    }

    #[tokio::test]
    async fn create_assigns_sequential_numbers() {
        let mut api = api();
        let draft = OrderCreate {
            customer_name: "Test Buyer".to_string(),
            phone: "+977 9800000000".to_string(),
            email: None,
            address: None,
            delivery_type: shared::models::DeliveryType::Pickup,
            delivery_date: Utc::now(),
            delivery_time: Some("4:00 PM".to_string()),
            items: vec![],
            subtotal: 450.0,
            delivery_fee: 0.0,
            total: 450.0,
            status: OrderStatus::Pending,
            notes: None,
        };
        let order = api.create(draft).await;

        assert_eq!(order.id, "4");
        assert!(order.order_number.starts_with("ORD-"));
        assert!(order.order_number.ends_with("-004"));
        assert!(api.get_by_number(&order.order_number).await.is_some());
    }

    #[tokio::test]
    async fn custom_order_update_attaches_note_and_quote() {
        let mut api = api();
        let before = api.get_custom("1").await.unwrap().updated_at;
        let updated = api
            .update_custom(
                "1",
                CustomOrderUpdate {
                    status: Some(CustomOrderStatus::Quoted),
                    admin_notes: Some("Quoted over the phone".to_string()),
                    quoted_price: Some(4200.0),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, CustomOrderStatus::Quoted);
        assert_eq!(updated.admin_notes.as_deref(), Some("Quoted over the phone"));
        assert_eq!(updated.quoted_price, Some(4200.0));
        assert!(updated.updated_at > before);
    }

    #[tokio::test]
    async fn custom_order_partial_update_keeps_other_fields() {
        let mut api = api();
        let updated = api
            .update_custom(
                "3",
                CustomOrderUpdate {
                    status: Some(CustomOrderStatus::Confirmed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // Existing note and quote survive a status-only update
        assert_eq!(updated.quoted_price, Some(3500.0));
        assert!(updated.admin_notes.is_some());
    }

    #[tokio::test]
    async fn created_custom_order_starts_new() {
        let mut api = api();
        let created = api
            .create_custom(shared::models::CustomOrderCreate {
                customer_name: "Test".to_string(),
                phone: "+977 9800000001".to_string(),
                email: None,
                cake_details: "Photo cake".to_string(),
                preferred_date: None,
                reference_image: None,
            })
            .await;

        assert_eq!(created.status, CustomOrderStatus::New);
        assert_eq!(created.id, "4");
    }

    #[tokio::test]
    async fn dashboard_stats_match_seed() {
        let stats = api().dashboard_stats().await;
        assert_eq!(stats.total_orders, 156);
        assert_eq!(stats.total_revenue, 287_500.0);
    }
}
