use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::u501_upload_document::{ErrorResponse, MSG_UNSUPPORTED_TYPE};

/// Ошибки загрузки документа; текст ошибки уходит клиенту в поле `detail`
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file provided in field 'file'")]
    MissingFile,

    #[error("{}", MSG_UNSUPPORTED_TYPE)]
    UnsupportedType,

    #[error("Invalid file name")]
    InvalidFilename,

    #[error("File is too large (limit is {limit} bytes)")]
    TooLarge { limit: usize },

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("Failed to store file: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Error processing file: {0}")]
    Processing(String),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFile => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnsupportedType | Self::InvalidFilename | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Storage(_) | Self::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
