//! Request body extractors

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// `Json<T>` that also runs `T::validate()`.
///
/// Malformed bodies, missing fields, wrong types, a missing JSON content type
/// and failed validation rules are all rejected with 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Body could not be read or deserialized
    Body(JsonRejection),
    /// Body deserialized but broke a validation rule
    Invalid(ValidationErrors),
}

impl ValidatedJsonRejection {
    fn into_error(self) -> Error {
        match self {
            ValidatedJsonRejection::Body(rejection) => Error::Validation(rejection.body_text()),
            ValidatedJsonRejection::Invalid(errors) => {
                Error::Validation(describe_validation_errors(&errors))
            }
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        self.into_error().into_response()
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Body)?;

        value.validate().map_err(ValidatedJsonRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}

/// One `field: message` entry per failed rule, sorted by field name.
///
/// Rules without a custom message fall back to their validator code.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut entries: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                let message = failure
                    .message
                    .as_deref()
                    .unwrap_or(failure.code.as_ref());
                format!("{}: {}", field, message)
            })
        })
        .collect();

    entries.sort();
    entries.join("; ")
}
