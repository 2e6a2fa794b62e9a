//! # Vellum Shared
//!
//! Wire types shared between server and clients: request DTOs with their
//! validation rules, and the standard response envelopes.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, FieldErrorBody};
