//! Custom extractors for Axum handlers.

pub mod json_body;

pub use json_body::JsonBody;
