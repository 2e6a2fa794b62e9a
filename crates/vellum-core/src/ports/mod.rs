//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod account;
mod clock;
mod content;
mod mailer;
mod password;

pub use account::AccountStore;
pub use clock::Clock;
pub use content::ContentStore;
pub use mailer::Mailer;
pub use password::{PasswordError, PasswordHasher};
