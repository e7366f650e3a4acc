//! Checkout form state
//!
//! Holds buyer-entered delivery details between field edits and
//! submission. Like the cart, an explicit container: instantiate one
//! per checkout session. Setting a field clears that field's recorded
//! validation error; the nested delivery details never carry errors of
//! their own.

use shared::checkout::OrderDetails;
use shared::models::DeliveryType;

use super::validation::{self, FieldErrors};

/// Optional fine-grained delivery sub-fields
#[derive(Debug, Clone, Default)]
pub struct DeliveryDetails {
    pub secondary_phone: String,
    pub delivery_location: String,
    pub landmark: String,
}

/// Buyer-entered checkout details
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub(super) full_name: String,
    pub(super) phone: String,
    pub(super) delivery_option: DeliveryType,
    pub(super) address: String,
    pub(super) delivery_date: String,
    pub(super) delivery_time: String,
    pub(super) notes: String,
    pub(super) delivery_details: DeliveryDetails,
    errors: FieldErrors,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            delivery_option: DeliveryType::Delivery,
            address: String::new(),
            delivery_date: String::new(),
            delivery_time: String::new(),
            notes: String::new(),
            delivery_details: DeliveryDetails::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Field setters (clear that field's recorded error) ───────────

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
        self.errors.remove("fullName");
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
        self.errors.remove("phone");
    }

    pub fn set_delivery_option(&mut self, option: DeliveryType) {
        self.delivery_option = option;
        self.errors.remove("deliveryOption");
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
        self.errors.remove("address");
    }

    pub fn set_delivery_date(&mut self, value: impl Into<String>) {
        self.delivery_date = value.into();
        self.errors.remove("deliveryDate");
    }

    pub fn set_delivery_time(&mut self, value: impl Into<String>) {
        self.delivery_time = value.into();
        self.errors.remove("deliveryTime");
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.notes = value.into();
        self.errors.remove("notes");
    }

    // ── Nested delivery details (no validation state of their own) ──

    pub fn set_secondary_phone(&mut self, value: impl Into<String>) {
        self.delivery_details.secondary_phone = value.into();
    }

    pub fn set_delivery_location(&mut self, value: impl Into<String>) {
        self.delivery_details.delivery_location = value.into();
    }

    pub fn set_landmark(&mut self, value: impl Into<String>) {
        self.delivery_details.landmark = value.into();
    }

    // ── Validation ──────────────────────────────────────────────────

    /// Apply the checkout schema
    ///
    /// On success, returns the normalized snapshot for the message
    /// composer. On failure, records and returns the per-field error
    /// map; every invalid field is reported at once.
    pub fn validate(&mut self) -> Result<OrderDetails, FieldErrors> {
        match validation::validate(self) {
            Ok(snapshot) => {
                self.errors.clear();
                Ok(snapshot)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Currently recorded validation errors
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn delivery_option(&self) -> DeliveryType {
        self.delivery_option
    }

    pub fn delivery_details(&self) -> &DeliveryDetails {
        &self.delivery_details
    }

    /// Restore the initial empty form (after a successful submission)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_pickup_form() -> CheckoutForm {
        let mut form = CheckoutForm::new();
        form.set_full_name("Ram Sharma");
        form.set_phone("+977 9841234567");
        form.set_delivery_option(DeliveryType::Pickup);
        form.set_delivery_date("2024-01-25");
        form.set_delivery_time("2:00 PM");
        form
    }

    #[test]
    fn pickup_validates_without_address() {
        let mut form = filled_pickup_form();
        let snapshot = form.validate().expect("pickup needs no address");

        assert_eq!(snapshot.full_name, "Ram Sharma");
        assert_eq!(snapshot.delivery_option, DeliveryType::Pickup);
        assert_eq!(snapshot.address, None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn delivery_requires_ten_character_address() {
        let mut form = filled_pickup_form();
        form.set_delivery_option(DeliveryType::Delivery);
        form.set_address("short");

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("address").map(String::as_str),
            Some("Please enter a valid address (at least 10 characters)")
        );

        form.set_address("House 12, Baluwatar Road, Kathmandu");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn whitespace_only_address_fails_for_delivery() {
        let mut form = filled_pickup_form();
        form.set_delivery_option(DeliveryType::Delivery);
        form.set_address("              ");

        assert!(form.validate().unwrap_err().contains_key("address"));
    }

    #[test]
    fn all_invalid_fields_are_reported_at_once() {
        let mut form = CheckoutForm::new();
        form.set_full_name("R");
        form.set_phone("123");

        let errors = form.validate().unwrap_err();
        assert!(errors.contains_key("fullName"));
        assert!(errors.contains_key("phone"));
        assert!(errors.contains_key("deliveryDate"));
        assert!(errors.contains_key("deliveryTime"));
        assert!(errors.contains_key("address")); // default option is delivery
    }

    #[test]
    fn setting_a_field_clears_its_recorded_error() {
        let mut form = CheckoutForm::new();
        form.validate().unwrap_err();
        assert!(form.errors().contains_key("fullName"));

        form.set_full_name("Ram Sharma");
        assert!(!form.errors().contains_key("fullName"));
        // Other errors stay until their fields change or validation reruns
        assert!(form.errors().contains_key("phone"));
    }

    #[test]
    fn name_and_phone_are_trimmed_in_the_snapshot() {
        let mut form = filled_pickup_form();
        form.set_full_name("  Ram Sharma  ");
        form.set_phone("  +977 9841234567 ");

        let snapshot = form.validate().unwrap();
        assert_eq!(snapshot.full_name, "Ram Sharma");
        assert_eq!(snapshot.phone, "+977 9841234567");
    }

    #[test]
    fn overlong_notes_are_rejected() {
        let mut form = filled_pickup_form();
        form.set_notes("x".repeat(501));

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("notes").map(String::as_str), Some("Notes are too long"));
    }

    #[test]
    fn blank_optionals_become_none_in_the_snapshot() {
        let mut form = filled_pickup_form();
        form.set_secondary_phone("");
        form.set_landmark("Near the temple");

        let snapshot = form.validate().unwrap();
        assert_eq!(snapshot.secondary_phone, None);
        assert_eq!(snapshot.landmark.as_deref(), Some("Near the temple"));
    }

    #[test]
    fn reset_restores_the_empty_form() {
        let mut form = filled_pickup_form();
        form.set_notes("hello");
        form.reset();

        assert!(form.validate().is_err());
        assert_eq!(form.delivery_option(), DeliveryType::Delivery);
    }
}
