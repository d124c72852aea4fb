//! HTTP handlers for authentication and the current-user surface
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request/response types
//! ├── register.rs - POST /api/auth/register
//! ├── login.rs    - POST /api/auth/login
//! ├── signout.rs  - POST /api/auth/signout (501 stub)
//! └── me.rs       - GET/PUT /api/users/me
//! ```

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Signout stub
pub mod signout;

/// Current-user handlers
pub mod me;

pub use login::login;
pub use me::{get_me, update_me};
pub use register::register;
pub use signout::signout;
