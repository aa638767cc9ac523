use std::fmt;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Client-local identifier of an upload record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UploadId(String);

impl UploadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random 9-character base-36 identifier
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect::<String>();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    #[default]
    Uploading,
    Processing,
    Completed,
    /// Part of the record vocabulary only. The simulation has no failure
    /// path, so no transition ever produces this status.
    Error,
}

impl UploadStatus {
    pub fn caption(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "Uploading...",
            UploadStatus::Processing => "Processing with AI...",
            UploadStatus::Completed => "Completed",
            UploadStatus::Error => "Failed",
        }
    }
}

/// A file picked by the user, as probed from its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub id: UploadId,
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(id: UploadId, name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let media_type = media_type_for(Path::new(&name)).to_string();
        Self {
            id,
            name,
            size,
            media_type,
        }
    }
}

/// Simulated upload tracked by the upload panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: UploadId,
    pub name: String,
    pub size: u64,
    pub media_type: String,
    pub progress: f64,
    pub status: UploadStatus,
}

impl From<SelectedFile> for UploadRecord {
    fn from(file: SelectedFile) -> Self {
        Self {
            id: file.id,
            name: file.name,
            size: file.size,
            media_type: file.media_type,
            progress: 0.0,
            status: UploadStatus::Uploading,
        }
    }
}

impl UploadRecord {
    /// Apply a progress report. Progress is capped at 100 and never moves
    /// backwards; reaching 100 moves the record into processing.
    /// Returns whether the record changed.
    pub fn advance(&mut self, progress: f64) -> bool {
        if self.status != UploadStatus::Uploading || !progress.is_finite() {
            return false;
        }

        let next = progress.clamp(0.0, 100.0).max(self.progress);
        let changed = next != self.progress;
        self.progress = next;

        if self.progress >= 100.0 {
            self.status = UploadStatus::Processing;
            return true;
        }

        changed
    }

    /// Processing -> completed. Any other status is left untouched.
    pub fn complete(&mut self) -> bool {
        if self.status != UploadStatus::Processing {
            return false;
        }
        self.status = UploadStatus::Completed;
        true
    }

    pub fn is_completed(&self) -> bool {
        self.status == UploadStatus::Completed
    }

    pub fn percent(&self) -> u16 {
        self.progress.round().clamp(0.0, 100.0) as u16
    }
}

/// Human-readable byte size: `0 Bytes`, `1.5 KB`, `2 MB`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// MIME type guessed from the file extension
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        _ => "application/octet-stream",
    }
}
