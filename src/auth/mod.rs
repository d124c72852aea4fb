//! Authentication Module
//!
//! Registration, login, stateless JWT sessions, and the current-user
//! surface.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── users.rs     - User model and public projection
//! ├── sessions.rs  - JWT issuance and verification
//! └── handlers/    - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage and never
//!   serialized into a response
//! - Invalid credentials return 401 with one generic message (no user
//!   enumeration)
//! - Tokens are verified per request and the user row re-read, so deleting
//!   an account revokes its tokens in practice

/// User model
pub mod users;

/// JWT session tokens
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthData, LoginRequest, RegisterRequest, UpdateUserRequest};
pub use handlers::{get_me, login, register, signout, update_me};
