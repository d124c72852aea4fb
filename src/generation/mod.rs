//! Generation Module
//!
//! Email generation through an OpenAI-compatible completion API.
//!
//! - **`prompt`** - fixed prompt template and completion-output parsing
//! - **`client`** - `CompletionClient` trait and the reqwest implementation
//! - **`handlers`** - the generation endpoint (auth + onboarding gated)

/// Prompt template and output shaping
pub mod prompt;

/// Completion API client
pub mod client;

/// Generation handler
pub mod handlers;

pub use client::{CompletionClient, GenerationError, OpenAiClient};
pub use handlers::generate_email;
pub use prompt::{GenerateEmailRequest, GeneratedEmail, Tone};
