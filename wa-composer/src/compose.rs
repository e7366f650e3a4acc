//! Order and custom-inquiry message composers
//!
//! The receiving side reads these messages verbatim, so the layout is
//! part of the wire format: block order, labels and the pickup/delivery
//! variants must not drift.

use shared::cart::CartLine;
use shared::checkout::OrderDetails;
use shared::models::{DeliveryType, ProductCategory};

use crate::builder::MessageBuilder;

/// Business header on every outbound message
const BUSINESS_NAME: &str = "Blackberry Cakes";

/// Render an order into the WhatsApp message body
///
/// `total` is the cart subtotal; no delivery fee is added at this stage
/// (it is quoted separately by the shop).
pub fn order_message(lines: &[CartLine], details: &OrderDetails, total: f64) -> String {
    let mut m = MessageBuilder::new();

    m.line(&format!("🎂 *{BUSINESS_NAME} - New Order*")).newline();

    m.bold_line("Customer Details:").sep();
    m.field("Customer Name", &details.full_name);
    m.field("Primary Phone", &details.phone);

    match details.delivery_option {
        DeliveryType::Delivery => {
            m.field_opt("Secondary Phone", details.secondary_phone.as_deref());
            m.field("Delivery", "Yes");
            m.field_opt("Delivery Address", details.address.as_deref());
            m.field_opt("Delivery Location", details.delivery_location.as_deref());
            m.field_opt("Landmark", details.landmark.as_deref());
        }
        DeliveryType::Pickup => {
            m.field("Delivery", "No (Store Pickup)");
        }
    }

    m.field("Date", &details.delivery_date);
    m.field("Time", &details.delivery_time);

    if let Some(notes) = details.notes.as_deref() {
        m.newline().field("Notes", notes);
    }

    m.newline().bold_line("Order Items:").sep();

    for (index, line) in lines.iter().enumerate() {
        m.newline();
        m.line(&format!("{}. *{}*", index + 1, line.product.name));
        m.item_field("SKU", &line.product.id);
        m.item_field("Category", line.product.category.label());

        if line.product.category == ProductCategory::Cakes {
            m.item_field("Eggless", if line.eggless { "Yes" } else { "No" });
            if let Some(size) = line.selected_size {
                m.item_field("Size", format!("{size} Pound"));
            }
        }

        m.item_field("Qty", line.quantity);
        m.item_field("Price", format!("Rs {}", line.line_total()));
    }

    m.newline().sep();
    m.bold_line(&format!("Subtotal: Rs {total}"));
    m.bold_line("Delivery Fee: Calculated separately");
    m.bold_line(&format!("Total: Rs {total}"));

    m.build()
}

/// Custom cake inquiry, sent from the bespoke-order form
#[derive(Debug, Clone)]
pub struct CustomInquiry {
    pub name: String,
    pub phone: String,
    /// Free-text cake description from the buyer
    pub message: String,
    pub preferred_date: Option<String>,
    /// Buyer will follow up with a reference image
    pub has_image: bool,
}

/// Render a custom cake inquiry into the WhatsApp message body
pub fn custom_inquiry_message(inquiry: &CustomInquiry) -> String {
    let mut m = MessageBuilder::new();

    m.line(&format!("🎂 *{BUSINESS_NAME} - Custom Order Inquiry*"))
        .newline();

    m.bold_line("Customer Details:").sep();
    m.field("Name", &inquiry.name);
    m.field("Phone", &inquiry.phone);
    m.field_opt("Preferred Date", inquiry.preferred_date.as_deref());

    m.newline().bold_line("Cake Details/Message:");
    m.line(&inquiry.message);

    if inquiry.has_image {
        m.newline()
            .line("📷 *Note: Customer will send reference image in the next message*");
    }

    m.build()
}
