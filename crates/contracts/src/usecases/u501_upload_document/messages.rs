//! User-facing strings shared by the form and the service.

/// Shown when the form is submitted without a selected file
pub const MSG_SELECT_FILE_FIRST: &str = "Please select a PDF or DOCX file first.";

/// Shown when an upload fails and the server did not explain why
pub const MSG_UPLOAD_FAILED: &str = "Upload/Extraction failed.";

/// Shown in the preview panel when the server returned no text
pub const MSG_NO_TEXT_EXTRACTED: &str = "No text extracted.";

pub const MSG_UNSUPPORTED_TYPE: &str = "Only PDF and DOCX files are allowed";

pub const MSG_FILE_STORED: &str = "File uploaded successfully";

/// Banner text after a successful upload
pub fn success_message(filename: &str) -> String {
    format!("Success: {} processed!", filename)
}
