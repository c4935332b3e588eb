//! Domain Entities
//!
//! - Menu: fixed item/price table
//! - Order: transient order lines priced against the menu
//! - Session: payload sent to the realtime session provider

mod menu;
mod order;
mod session;

pub use menu::*;
pub use order::*;
pub use session::*;
