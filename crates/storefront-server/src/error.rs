use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use storefront::{ScraperError, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing fields")]
    MissingFields,
    #[error("Item not found")]
    NotFound,
    #[error(transparent)]
    Body(JsonRejection),
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] ScraperError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::MissingFields => AppError::MissingFields,
            StoreError::Seed(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Body(rejection) => rejection.status(),
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Body(rejection) = self {
            log::debug!("Rejected request body: {rejection}");
            return rejection.into_response();
        }
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{self}");
        } else {
            log::debug!("{self}");
        }
        (status, self.to_string()).into_response()
    }
}
