/**
 * Authentication Handler Types
 *
 * Request and response types shared by the registration, login, and
 * profile handlers. Validation messages are exactly what the client sees
 * (the first violated rule wins).
 */
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::users::PublicUser;

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Profile update request; both fields optional
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
}

/// Payload returned by register and login
#[derive(Debug, Serialize)]
pub struct AuthData {
    /// User information (without sensitive data)
    pub user: PublicUser,
    /// Session token
    pub token: String,
}
