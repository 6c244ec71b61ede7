//! Request extractors that reject bad input with [`AppError`] JSON bodies.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, Path, Request};
use axum::Json;
use hotel_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and checked against its `validator`
/// constraints before the handler runs.
///
/// - Unparseable bodies (syntax, wrong types, wrong content type) become
///   [`AppError::BadRequest`].
/// - Constraint failures become `CoreError::Validation` carrying every
///   field violation.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateHotelRequest>) -> AppResult<...>
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if let Err(err) = validate_input(&value) {
            tracing::debug!(error = %err, "Rejected request body");
            return Err(err.into());
        }

        Ok(Self(value))
    }
}

/// Unwrap a path extraction, turning a rejection into [`AppError::BadRequest`].
pub fn path_or_bad_request<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    path.map(|Path(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
