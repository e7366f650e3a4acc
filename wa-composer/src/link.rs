//! Outbound wa.me link
//!
//! Fire-and-forget: the storefront opens the link and never consumes a
//! callback.

use urlencoding::encode;

/// Build the `wa.me` link carrying a composed message
///
/// `number` is the destination in international format without `+`
/// (e.g. `9779851234567`).
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, encode(message))
}
