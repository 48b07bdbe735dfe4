pub mod common;
pub mod u501_upload_document;
