//! In-memory store implementations. All state lives behind a single
//! `RwLock`, so every operation is atomic per call.

mod account;
mod content;

pub use account::MemoryAccountStore;
pub use content::MemoryContentStore;
