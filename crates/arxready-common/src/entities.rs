//! Core value types shared by the upload widget, the evaluator client and the web layer.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Paper kind
// ---------------------------------------------------------------------------

/// The file formats the evaluation service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperKind {
    Pdf,
    PlainText,
}

impl PaperKind {
    pub const ALL: [PaperKind; 2] = [PaperKind::Pdf, PaperKind::PlainText];

    pub fn mime(&self) -> &'static str {
        match self {
            PaperKind::Pdf       => "application/pdf",
            PaperKind::PlainText => "text/plain",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            PaperKind::Pdf       => ".pdf",
            PaperKind::PlainText => ".txt",
        }
    }

    /// Match a declared content type, ignoring parameters such as `charset`.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.mime() == essence)
    }

    /// Match on the file name's extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| lower.ends_with(k.extension()))
    }

    /// Classify a candidate upload. The declared MIME type wins when it names an
    /// accepted kind; otherwise the extension decides.
    pub fn detect(name: &str, content_type: Option<&str>) -> Option<Self> {
        content_type
            .and_then(Self::from_mime)
            .or_else(|| Self::from_file_name(name))
    }
}

impl std::fmt::Display for PaperKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaperKind::Pdf       => f.write_str("PDF"),
            PaperKind::PlainText => f.write_str("TXT"),
        }
    }
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// A raw file handed to the upload widget, before any type check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, content_type: Option<&str>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.map(str::to_string),
            bytes: bytes.into(),
        }
    }

    /// Browsers submit an empty, nameless part when the file input is left blank.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.bytes.is_empty()
    }
}

/// A file accepted for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperFile {
    pub name: String,
    pub kind: PaperKind,
    pub bytes: Vec<u8>,
}

impl PaperFile {
    /// Accept a dropped file if its type is one the service understands.
    pub fn from_dropped(file: DroppedFile) -> Option<Self> {
        let kind = PaperKind::detect(&file.name, file.content_type.as_deref())?;
        Some(Self { name: file.name, kind, bytes: file.bytes })
    }

    pub fn mime(&self) -> &'static str {
        self.kind.mime()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// The readiness decision returned by the evaluation service.
/// Only `approved` is read; any other fields in the response are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub approved: bool,
}

impl Verdict {
    pub fn approved() -> Self {
        Self { approved: true }
    }

    pub fn rejected() -> Self {
        Self { approved: false }
    }
}
