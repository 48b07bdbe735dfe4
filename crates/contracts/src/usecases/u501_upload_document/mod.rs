pub mod document_kind;
pub mod messages;
pub mod response;

pub use document_kind::{DocumentKind, ACCEPT_FILTER};
pub use messages::*;
pub use response::{ErrorResponse, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

/// Multipart field that carries the document
pub const UPLOAD_FIELD: &str = "file";

/// Path of the upload endpoint relative to the backend origin
pub const UPLOAD_PATH: &str = "/upload";

/// Number of characters of extracted text returned as the preview
pub const PREVIEW_CHAR_LIMIT: usize = 2000;

/// Appended to the preview when the full text is longer than the limit
pub const PREVIEW_ELLIPSIS: &str = "...";

pub struct UploadDocument;

impl UseCaseMetadata for UploadDocument {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "upload_document"
    }

    fn display_name() -> &'static str {
        "Upload Quiz Document (PDF / Word)"
    }

    fn description() -> &'static str {
        "Upload a PDF or Word document and preview the text extracted from it"
    }
}
