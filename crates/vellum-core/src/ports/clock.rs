use chrono::{DateTime, Utc};

/// Single source of "now". Every expiry check and timestamp in the system
/// goes through this so time can be controlled in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
