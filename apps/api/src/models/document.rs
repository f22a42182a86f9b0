use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Declared format of an uploaded resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::PlainText => "plain-text",
        }
    }

    /// Parses an explicitly declared kind (`pdf` or `plain-text`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "plain-text" | "text" | "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    /// Detects the kind from the upload's content type, falling back to the file extension.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Option<Self> {
        let from_mime = content_type.and_then(|ct| {
            let essence = ct.split(';').next().unwrap_or_default().trim();
            match essence.to_ascii_lowercase().as_str() {
                "application/pdf" => Some(DocumentKind::Pdf),
                "text/plain" => Some(DocumentKind::PlainText),
                _ => None,
            }
        });

        from_mime.or_else(|| {
            let (_, extension) = file_name.rsplit_once('.')?;
            match extension.to_ascii_lowercase().as_str() {
                "pdf" => Some(DocumentKind::Pdf),
                "txt" => Some(DocumentKind::PlainText),
                _ => None,
            }
        })
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One uploaded resume: raw bytes plus the declared kind. Never mutated.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(file_name: impl Into<String>, kind: DocumentKind, bytes: impl Into<Bytes>) -> Self {
        Document {
            file_name: file_name.into(),
            kind,
            bytes: bytes.into(),
        }
    }
}
