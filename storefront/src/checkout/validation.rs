//! Checkout validation schema
//!
//! All fields are checked on every call so the form can show every
//! problem at once; the first failure per field wins. Lengths are
//! counted in characters, not bytes.

use std::collections::BTreeMap;

use shared::checkout::OrderDetails;
use shared::models::DeliveryType;

use super::form::CheckoutForm;

// ── Field length limits ─────────────────────────────────────────────

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;
pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_PHONE_LEN: usize = 15;
/// Address minimum applies only when delivery is selected
pub const MIN_ADDRESS_LEN: usize = 10;
pub const MAX_NOTE_LEN: usize = 500;

/// Per-field validation failures, keyed by the form field name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Apply the checkout schema to the form
///
/// Returns the normalized snapshot (name and phone trimmed, blank
/// optionals dropped) or the full error map.
pub(super) fn validate(form: &CheckoutForm) -> Result<OrderDetails, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.full_name.trim();
    let name_len = name.chars().count();
    if name_len < MIN_NAME_LEN {
        errors.insert("fullName", "Name must be at least 2 characters".to_string());
    } else if name_len > MAX_NAME_LEN {
        errors.insert("fullName", "Name is too long".to_string());
    }

    let phone = form.phone.trim();
    let phone_len = phone.chars().count();
    if phone_len < MIN_PHONE_LEN {
        errors.insert("phone", "Phone number must be at least 10 digits".to_string());
    } else if phone_len > MAX_PHONE_LEN {
        errors.insert("phone", "Phone number is too long".to_string());
    }

    if form.delivery_date.is_empty() {
        errors.insert("deliveryDate", "Please select a delivery date".to_string());
    }

    if form.delivery_time.is_empty() {
        errors.insert("deliveryTime", "Please select a delivery time".to_string());
    }

    if form.notes.chars().count() > MAX_NOTE_LEN {
        errors.insert("notes", "Notes are too long".to_string());
    }

    // Address is mandatory only for delivery; pickup ignores it
    if form.delivery_option == DeliveryType::Delivery
        && form.address.trim().chars().count() < MIN_ADDRESS_LEN
    {
        errors.insert(
            "address",
            "Please enter a valid address (at least 10 characters)".to_string(),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(OrderDetails {
        full_name: name.to_string(),
        phone: phone.to_string(),
        secondary_phone: non_empty(&form.delivery_details.secondary_phone),
        delivery_option: form.delivery_option,
        address: non_empty(&form.address),
        delivery_location: non_empty(&form.delivery_details.delivery_location),
        landmark: non_empty(&form.delivery_details.landmark),
        delivery_date: form.delivery_date.clone(),
        delivery_time: form.delivery_time.clone(),
        notes: non_empty(&form.notes),
    })
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
