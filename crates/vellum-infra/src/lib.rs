//! # Vellum Infrastructure
//!
//! Concrete implementations of the ports defined in `vellum-core`: in-memory
//! stores, Argon2 password hashing, clocks, and the logging mailer.

pub mod auth;
pub mod clock;
pub mod mailer;
pub mod seed;
pub mod store;

pub use auth::Argon2PasswordHasher;
pub use clock::{ManualClock, SystemClock};
pub use mailer::LogMailer;
pub use store::{MemoryAccountStore, MemoryContentStore};
