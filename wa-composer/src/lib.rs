//! WhatsApp order message composition
//!
//! Renders cart and checkout snapshots into the text block sent to the
//! bakery's WhatsApp number, and builds the outbound `wa.me` link.
//! Composition is pure: the same snapshots always yield the same bytes.

mod builder;
mod compose;
mod link;

pub use builder::MessageBuilder;
pub use compose::{CustomInquiry, custom_inquiry_message, order_message};
pub use link::whatsapp_link;
