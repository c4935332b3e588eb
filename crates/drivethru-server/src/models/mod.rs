//! Gateway Data Models
//!
//! - Order: order line request/response DTOs
//! - Menu: single item lookup response
//! - Session: realtime session query parameters
//! - Error: JSON error envelope

mod error;
mod menu;
mod order;
mod session;

pub use error::*;
pub use menu::*;
pub use order::*;
pub use session::*;
