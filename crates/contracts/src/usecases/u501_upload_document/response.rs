use serde::{Deserialize, Serialize};

/// Body of a successful `POST /upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Name of the stored file, echoed back for the success banner
    pub filename: String,

    #[serde(default)]
    pub message: String,

    /// First part of the extracted text; the full text stays on the server
    #[serde(default)]
    pub extracted_text_preview: Option<String>,

    /// Length of the full extracted text in characters
    #[serde(default)]
    pub full_text_length: usize,
}

/// Body of every non-2xx response of the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_success_body() {
        let resp: UploadResponse = serde_json::from_str(r#"{"filename":"quiz.pdf"}"#).unwrap();
        assert_eq!(resp.filename, "quiz.pdf");
        assert_eq!(resp.extracted_text_preview, None);
        assert_eq!(resp.full_text_length, 0);
    }

    #[test]
    fn test_success_body_without_filename_is_rejected() {
        let resp = serde_json::from_str::<UploadResponse>(r#"{"extracted_text_preview":"Q1"}"#);
        assert!(resp.is_err());
    }

    #[test]
    fn test_error_body() {
        let err: ErrorResponse = serde_json::from_str(r#"{"detail":"Unsupported format"}"#).unwrap();
        assert_eq!(err.detail.as_deref(), Some("Unsupported format"));

        // FastAPI-style validation errors carry a list; only strings are accepted
        assert!(serde_json::from_str::<ErrorResponse>(r#"{"detail":[{"msg":"x"}]}"#).is_err());

        let empty: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.detail, None);
    }
}
