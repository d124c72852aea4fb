//! API Error Module
//!
//! Error taxonomy for the HTTP surface and its conversion to responses.
//!
//! - **`types`** - the `ApiError` enum and status-code mapping
//! - **`conversion`** - `IntoResponse` into the response envelope, plus
//!   conversions from library error types
//!
//! Client-facing messages stay generic for anything server-side (storage,
//! hashing, token signing, upstream calls); the original cause is logged
//! before the response is built.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
