// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for entity timestamps and token expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
