use super::error::UploadError;
use super::extractor::extractor_for;
use super::storage;
use crate::shared::config::UploadConfig;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use contracts::usecases::u501_upload_document::{
    DocumentKind, UploadResponse, MSG_FILE_STORED, PREVIEW_ELLIPSIS, UPLOAD_FIELD,
};
use std::path::PathBuf;

/// Document received from the client, before validation
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Executor для UseCase загрузки документа: проверка, сохранение, извлечение текста
#[derive(Debug, Clone)]
pub struct UploadExecutor {
    upload_dir: PathBuf,
    max_file_bytes: usize,
    preview_chars: usize,
}

impl UploadExecutor {
    pub fn new(upload_dir: PathBuf, config: &UploadConfig) -> Self {
        Self {
            upload_dir,
            max_file_bytes: config.max_file_bytes,
            preview_chars: config.preview_chars,
        }
    }

    pub fn max_file_bytes(&self) -> usize {
        self.max_file_bytes
    }

    /// Read the `file` part out of a multipart body and process it
    pub async fn receive(&self, multipart: &mut Multipart) -> Result<UploadResponse, UploadError> {
        let incoming = self.read_file_field(multipart).await?;
        self.process(incoming).await
    }

    async fn read_file_field(&self, multipart: &mut Multipart) -> Result<IncomingFile, UploadError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| self.multipart_error(e))?
        {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(|e| self.multipart_error(e))?;
            return Ok(IncomingFile {
                filename,
                bytes: bytes.to_vec(),
            });
        }

        Err(UploadError::MissingFile)
    }

    fn multipart_error(&self, err: MultipartError) -> UploadError {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge {
                limit: self.max_file_bytes,
            }
        } else {
            UploadError::Multipart(err.body_text())
        }
    }

    /// Validate, store and extract one document
    pub async fn process(&self, file: IncomingFile) -> Result<UploadResponse, UploadError> {
        let kind = DocumentKind::from_filename(&file.filename).ok_or(UploadError::UnsupportedType)?;
        if file.bytes.len() > self.max_file_bytes {
            return Err(UploadError::TooLarge {
                limit: self.max_file_bytes,
            });
        }
        let filename =
            storage::sanitize_filename(&file.filename).ok_or(UploadError::InvalidFilename)?;

        let path = storage::store(&self.upload_dir, &filename, &file.bytes).await?;
        tracing::info!(
            "Stored {} ({} bytes) at {}",
            filename,
            file.bytes.len(),
            path.display()
        );

        let bytes = file.bytes;
        // Парсеры синхронные и могут паниковать на битых файлах
        let text = tokio::task::spawn_blocking(move || extractor_for(kind).extract_text(&bytes))
            .await
            .map_err(|e| UploadError::Processing(format!("extractor crashed: {}", e)))?
            .map_err(|e| UploadError::Processing(format!("{:#}", e)))?;

        let full_text_length = text.chars().count();
        tracing::info!("Extracted {} characters from {}", full_text_length, filename);

        Ok(UploadResponse {
            filename,
            message: MSG_FILE_STORED.to_string(),
            extracted_text_preview: Some(make_preview(&text, self.preview_chars)),
            full_text_length,
        })
    }
}

/// First `limit` characters of `text`, with an ellipsis when something was cut off
pub fn make_preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], PREVIEW_ELLIPSIS),
        None => text.to_string(),
    }
}
