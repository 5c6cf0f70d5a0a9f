//! Access control
//!
//! A single shared secret gates the create and delete endpoints.

mod api_key;

pub use api_key::ApiKeyGate;
