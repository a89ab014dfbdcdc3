//! Log storage
//!
//! Provides the storage abstraction handlers use for food, workout and chat
//! logs, plus the in-memory implementation used by the server.

pub mod ids;
pub mod logs;

pub use ids::LogIdGenerator;
pub use logs::{local_day, InMemoryLogStore, LogStore};
