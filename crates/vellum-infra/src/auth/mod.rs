//! Authentication infrastructure.

mod password;

pub use password::Argon2PasswordHasher;
