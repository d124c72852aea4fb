/**
 * Validated JSON Extractor
 *
 * Deserializes a JSON request body and runs its `validator` rules before
 * the handler sees it. Rejection is an `ApiError::Validation` carrying the
 * FIRST field violation's message, so a body breaking several rules still
 * produces one concrete complaint rather than a wall of errors.
 */
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// An extractor that deserializes JSON and validates it
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::validation("Invalid JSON format"))?;

        value
            .validate()
            .map_err(|errors| ApiError::validation(first_violation(&errors)))?;

        Ok(Self(value))
    }
}

/// Pull the first field violation's message out of a validation result
fn first_violation(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}
