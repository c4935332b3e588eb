//! Service Ports
//!
//! Abstract interfaces for external services.

mod realtime_session;

pub use realtime_session::*;
