//! Drive-Thru Domain Library
//!
//! Core domain types and interfaces for the drive-thru ordering gateway.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Menu table, order lines, realtime session configuration
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (realtime session provider)
//!
//! # Usage
//!
//! ```rust
//! use drivethru::{Menu, OrderLineRequest};
//!
//! let line = Menu::standard()
//!     .price_order_line(&OrderLineRequest::new("burger", 2))
//!     .unwrap();
//! assert_eq!(line.price, 5.99);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, Menu, MenuItem, OrderLine, OrderLineRequest, SessionConfig, SessionGrant,
    DEFAULT_VOICE, DRIVE_THRU_INSTRUCTIONS, MENU_ITEMS, REALTIME_MODEL,
};
pub use ports::RealtimeSessionProvider;
