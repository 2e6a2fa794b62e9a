//! Derived-view computation - pure, deterministic leaf utilities consumed by
//! response shaping. No store access, no side effects.

mod format;
pub mod markdown;

pub use format::{compact_number, initials, reading_time, relative_time};
