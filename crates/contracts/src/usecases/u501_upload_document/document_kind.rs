use serde::{Deserialize, Serialize};

/// `accept` hint for the browser file picker
pub const ACCEPT_FILTER: &str = ".pdf,.docx";

/// Document formats the service can extract text from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detect the kind from the final extension of a file name, ignoring case.
    pub fn from_filename(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || stem.ends_with(|c: char| c == '/' || c == '\\') {
            // ".pdf" is a hidden file without extension
            return None;
        }
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Docx => ".docx",
        }
    }
}
