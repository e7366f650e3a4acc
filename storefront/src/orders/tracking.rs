//! Order tracking lookup
//!
//! The tracking page accepts one query box: buyers paste either their
//! order number or the phone number used at checkout.

use shared::models::Order;

/// Find an order by order number (case-insensitive) or phone (exact)
pub fn find_order<'a>(orders: &'a [Order], query: &str) -> Option<&'a Order> {
    orders
        .iter()
        .find(|order| order.order_number.eq_ignore_ascii_case(query) || order.phone == query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::seed;

    #[test]
    fn matches_order_number_case_insensitively() {
        let orders = seed::orders();
        let found = find_order(&orders, "ord-2024-002").expect("order exists");
        assert_eq!(found.customer_name, "Sita Devi");
    }

    #[test]
    fn matches_phone_exactly() {
        let orders = seed::orders();
        let found = find_order(&orders, "+977 9861234567").expect("order exists");
        assert_eq!(found.order_number, "ORD-2024-003");

        // Partial phone numbers do not match
        assert!(find_order(&orders, "9861234567").is_none());
    }

    #[test]
    fn unknown_query_yields_none() {
        let orders = seed::orders();
        assert!(find_order(&orders, "ORD-2024-999").is_none());
    }
}
