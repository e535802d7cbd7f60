// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Timestamps are assigned by the application, never by clients; routing the
/// clock through a port keeps the services deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
