//! Observability: request-ID stamping for correlation across logs.

mod request_id;

pub use request_id::RequestIdMiddleware;
