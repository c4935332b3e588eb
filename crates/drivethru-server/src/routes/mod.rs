//! Gateway API Routes
//!
//! - /session - Realtime voice session bootstrap
//! - /order - Add a line to the order
//! - /order/remove - Remove a line from the order
//! - /menu/:item_name - Menu item lookup

pub mod menu;
pub mod order;
pub mod session;
pub mod swagger;

#[cfg(test)]
pub(crate) mod test_support;
