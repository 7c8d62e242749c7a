use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use spin_wheel_core::api::ApiErrorBody;
use spin_wheel_core::constants::{
    GENERATE_FAILED_ERROR, GENERATOR_UPSTREAM_ERROR, INVALID_COUNT_ERROR, INVALID_THEME_ERROR,
    RATE_LIMIT_ERROR,
};
use validator::ValidationErrors;

use crate::generator::GeneratorError;

#[derive(Debug)]
pub enum Error {
    Validation(ValidationErrors),
    Generator(GeneratorError),
    /// The model answered, but with fewer usable prizes than a wheel needs.
    NotEnoughPrizes(usize),
}

impl From<ValidationErrors> for Error {
    fn from(err: ValidationErrors) -> Self {
        Error::Validation(err)
    }
}

impl From<GeneratorError> for Error {
    fn from(err: GeneratorError) -> Self {
        Error::Generator(err)
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Generator(GeneratorError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            Error::Generator(_) | Error::NotEnoughPrizes(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Error::Validation(errors) => {
                if errors.field_errors().contains_key("count") {
                    INVALID_COUNT_ERROR
                } else {
                    INVALID_THEME_ERROR
                }
            }
            Error::Generator(GeneratorError::RateLimited) => RATE_LIMIT_ERROR,
            Error::Generator(_) => GENERATOR_UPSTREAM_ERROR,
            Error::NotEnoughPrizes(_) => GENERATE_FAILED_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ApiErrorBody { error: self.message().to_string() }),
        )
            .into_response()
    }
}
