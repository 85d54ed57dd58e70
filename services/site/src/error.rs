use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::view::ErrorPage;

/// Site service error variants.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid form submission")]
    InvalidForm,
    #[error("request body exceeds the upload limit")]
    PayloadTooLarge,
    #[error("page rendering failed")]
    Render(#[from] askama::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SiteError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidForm => "INVALID_FORM",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::Render(_) => "RENDER",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidForm => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Render(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) => tracing::error!(error = ?e, kind = self.kind(), "internal error"),
            Self::Render(e) => tracing::error!(error = %e, kind = self.kind(), "render error"),
            Self::InvalidForm | Self::PayloadTooLarge => {}
        }
        let page = ErrorPage::new(status);
        match askama::Template::render(&page) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to render error page");
                (status, status.to_string()).into_response()
            }
        }
    }
}
