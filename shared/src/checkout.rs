//! Checkout snapshot types
//!
//! The normalized output of a successful checkout validation. The
//! mutable form state lives in the storefront crate; this snapshot is
//! what the message composer consumes.

use serde::{Deserialize, Serialize};

use crate::models::DeliveryType;

/// Normalized buyer details produced by checkout validation
///
/// Name and phone are trimmed; optional fields are `None` when left
/// blank. The composer decides which fields appear on the outbound
/// message (pickup orders never print address lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub full_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    pub delivery_option: DeliveryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub delivery_date: String,
    pub delivery_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
