//! API Conventions
//!
//! Shared plumbing for the HTTP surface:
//!
//! - **`envelope`** - the uniform `{success, data, error, message}` response
//!   wrapper every route returns
//! - **`validated_json`** - JSON body extractor that runs `validator` rules
//!   and rejects with the first field violation

/// Uniform response wrapper
pub mod envelope;

/// Validating JSON body extractor
pub mod validated_json;

pub use envelope::ApiResponse;
pub use validated_json::ValidatedJson;
