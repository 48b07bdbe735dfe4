//! Where uploaded documents end up on disk.

use std::path::{Path, PathBuf};

/// Keep only the final component of a client-supplied file name.
///
/// Browsers normally send a bare name, but some clients send a full path
/// (`C:\Users\me\quiz.pdf`, `../../etc/passwd`).
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(|c: char| c == '/' || c == '\\').next()?.trim();
    if name.is_empty() || name == "." || name == ".." || name.chars().any(char::is_control) {
        return None;
    }
    Some(name.to_string())
}

/// Write the document into `dir`, replacing an earlier upload of the same name
pub async fn store(dir: &Path, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("quiz.pdf").as_deref(), Some("quiz.pdf"));
        assert_eq!(
            sanitize_filename("C:\\Users\\me\\quiz.pdf").as_deref(),
            Some("quiz.pdf")
        );
        assert_eq!(
            sanitize_filename("../../etc/passwd.docx").as_deref(),
            Some("passwd.docx")
        );
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("dir/"), None);
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename("a\nb.pdf"), None);
    }

    #[tokio::test]
    async fn test_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");

        let path = store(&nested, "quiz.pdf", b"first").await.unwrap();
        store(&nested, "quiz.pdf", b"second").await.unwrap();

        assert_eq!(path, nested.join("quiz.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }
}
