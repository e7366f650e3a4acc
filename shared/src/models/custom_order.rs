//! Custom-Order Model
//!
//! Bespoke cake requests handled over WhatsApp and tracked by the admin
//! layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Custom-order request status
///
/// Like [`OrderStatus`](super::OrderStatus), a flat field with no
/// transition guard: any value is reachable from any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomOrderStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Confirmed,
    Completed,
    Cancelled,
}

impl CustomOrderStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Quoted => "Quoted",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Custom-order request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrder {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub cake_details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
    pub status: CustomOrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create custom-order payload
///
/// Status starts at `new`; id and timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderCreate {
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub cake_details: String,
    pub preferred_date: Option<DateTime<Utc>>,
    pub reference_image: Option<String>,
}

/// Update custom-order payload
///
/// A status change may carry an admin note and/or a quoted price in the
/// same mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderUpdate {
    pub status: Option<CustomOrderStatus>,
    pub admin_notes: Option<String>,
    pub quoted_price: Option<f64>,
}
