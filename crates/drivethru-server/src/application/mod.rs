//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates with
//! external services.

mod order_service;
mod session_service;

pub use order_service::OrderService;
pub use session_service::SessionService;
