//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod realtime;

// Re-exports
pub use realtime::HttpRealtimeSessionProvider;
