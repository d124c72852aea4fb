//! Route Configuration
//!
//! - **`api_routes`** - the route table, split public vs. token-protected
//! - **`router`** - final assembly with fallback and tracing

/// Route table
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
