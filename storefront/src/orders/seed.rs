//! Seeded order collections
//!
//! Mock orders and custom-cake requests behind the admin panel and the
//! tracking page. Not connected to the storefront cart: submitting a
//! cart order goes out over WhatsApp, not into this data.

use chrono::{DateTime, TimeZone, Utc};
use shared::models::{
    CustomOrder, CustomOrderStatus, DashboardStats, DeliveryType, Order, OrderItem, OrderStatus,
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

/// Seeded standard orders
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".to_string(),
            order_number: "ORD-2024-001".to_string(),
            customer_name: "Ram Sharma".to_string(),
            phone: "+977 9841234567".to_string(),
            email: Some("ram@example.com".to_string()),
            address: Some("Kathmandu, Nepal".to_string()),
            delivery_type: DeliveryType::Delivery,
            delivery_date: date(2024, 1, 25),
            delivery_time: Some("2:00 PM".to_string()),
            items: vec![
                OrderItem {
                    id: "1".to_string(),
                    product_id: "vanilla-cake".to_string(),
                    product_name: "Vanilla Dream Cake".to_string(),
                    product_image: "/assets/vanilla-cake.jpg".to_string(),
                    quantity: 1,
                    size: Some(2.0),
                    price: 900.0,
                    notes: Some("Write \"Happy Birthday Sita\"".to_string()),
                },
                OrderItem {
                    id: "2".to_string(),
                    product_id: "birthday-balloon-set".to_string(),
                    product_name: "Birthday Balloon Set".to_string(),
                    product_image: "/assets/birthday-decor.jpg".to_string(),
                    quantity: 1,
                    size: None,
                    price: 299.0,
                    notes: None,
                },
            ],
            subtotal: 1199.0,
            delivery_fee: 100.0,
            total: 1299.0,
            status: OrderStatus::Pending,
            notes: Some("Please deliver before 2 PM".to_string()),
            created_at: date(2024, 1, 20),
            updated_at: date(2024, 1, 20),
        },
        Order {
            id: "2".to_string(),
            order_number: "ORD-2024-002".to_string(),
            customer_name: "Sita Devi".to_string(),
            phone: "+977 9851234567".to_string(),
            email: None,
            address: None,
            delivery_type: DeliveryType::Pickup,
            delivery_date: date(2024, 1, 26),
            delivery_time: Some("10:00 AM".to_string()),
            items: vec![OrderItem {
                id: "3".to_string(),
                product_id: "chocolate-cake".to_string(),
                product_name: "Belgian Chocolate Cake".to_string(),
                product_image: "/assets/chocolate-cake.jpg".to_string(),
                quantity: 1,
                size: Some(3.0),
                price: 1800.0,
                notes: None,
            }],
            subtotal: 1800.0,
            delivery_fee: 0.0,
            total: 1800.0,
            status: OrderStatus::Confirmed,
            notes: None,
            created_at: date(2024, 1, 21),
            updated_at: date(2024, 1, 21),
        },
        Order {
            id: "3".to_string(),
            order_number: "ORD-2024-003".to_string(),
            customer_name: "Krishna Bahadur".to_string(),
            phone: "+977 9861234567".to_string(),
            email: Some("krishna@example.com".to_string()),
            address: Some("Lalitpur, Nepal".to_string()),
            delivery_type: DeliveryType::Delivery,
            delivery_date: date(2024, 1, 27),
            delivery_time: None,
            items: vec![OrderItem {
                id: "4".to_string(),
                product_id: "vanilla-cake".to_string(),
                product_name: "Vanilla Dream Cake".to_string(),
                product_image: "/assets/vanilla-cake.jpg".to_string(),
                quantity: 2,
                size: Some(1.0),
                price: 900.0,
                notes: None,
            }],
            subtotal: 900.0,
            delivery_fee: 150.0,
            total: 1050.0,
            status: OrderStatus::Delivered,
            notes: None,
            created_at: date(2024, 1, 18),
            updated_at: date(2024, 1, 27),
        },
    ]
}

/// Seeded custom-cake requests
pub fn custom_orders() -> Vec<CustomOrder> {
    vec![
        CustomOrder {
            id: "1".to_string(),
            customer_name: "Gita Kumari".to_string(),
            phone: "+977 9871234567".to_string(),
            email: Some("gita@example.com".to_string()),
            cake_details: "I want a 3-tier wedding cake with white fondant and fresh flowers \
                           decoration. The cake should be vanilla with strawberry filling. Need \
                           it for 200 guests."
                .to_string(),
            preferred_date: Some(date(2024, 2, 14)),
            reference_image: None,
            status: CustomOrderStatus::New,
            admin_notes: None,
            quoted_price: None,
            created_at: date(2024, 1, 22),
            updated_at: date(2024, 1, 22),
        },
        CustomOrder {
            id: "2".to_string(),
            customer_name: "Hari Prasad".to_string(),
            phone: "+977 9881234567".to_string(),
            email: None,
            cake_details: "Custom photo cake with my daughters photo for her 5th birthday. 2 lb \
                           chocolate cake."
                .to_string(),
            preferred_date: Some(date(2024, 1, 30)),
            reference_image: Some("/assets/chocolate-cake.jpg".to_string()),
            status: CustomOrderStatus::Contacted,
            admin_notes: Some("Called customer, confirmed design requirements".to_string()),
            quoted_price: None,
            created_at: date(2024, 1, 20),
            updated_at: date(2024, 1, 21),
        },
        CustomOrder {
            id: "3".to_string(),
            customer_name: "Maya Tamang".to_string(),
            phone: "+977 9891234567".to_string(),
            email: Some("maya@example.com".to_string()),
            cake_details: "Need a eggless black forest cake for office party. Around 5 lbs with \
                           company logo on top."
                .to_string(),
            preferred_date: Some(date(2024, 2, 1)),
            reference_image: None,
            status: CustomOrderStatus::Quoted,
            admin_notes: Some("Quoted Rs 3500 for 5lb eggless with edible logo print".to_string()),
            quoted_price: Some(3500.0),
            created_at: date(2024, 1, 19),
            updated_at: date(2024, 1, 22),
        },
    ]
}

/// Seeded dashboard figures
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_orders: 156,
        total_revenue: 287_500.0,
        pending_orders: 12,
        completed_orders: 138,
        custom_order_requests: 8,
    }
}
