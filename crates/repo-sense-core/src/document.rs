//! Analysis note loading.
//!
//! Reads the per-module analysis notes produced by the upstream analysis
//! pass. One `.md` file becomes one [`Document`]; content is lower-cased
//! at load time so all keyword matching is case-insensitive.

use std::fs;
use std::path::Path;

/// Note file extension recognized by the loader.
pub const NOTE_EXTENSION: &str = "md";

/// One analysis note, immutable once loaded.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source filename with the extension stripped, unique within a run.
    pub id: String,
    /// Lower-cased file content.
    pub content: String,
}

impl Document {
    pub fn new(id: impl Into<String>, content: &str) -> Self {
        Self {
            id: id.into(),
            content: content.to_lowercase(),
        }
    }
}

/// Load all note documents from `dir` (non-recursive).
///
/// Files that cannot be read are skipped and reported in the returned
/// warnings; an unreadable directory yields an empty list, not an error.
/// The caller decides whether an empty list is terminal. Documents are
/// sorted by id so repeated runs see the same order.
pub fn load_documents(dir: &Path) -> (Vec<Document>, Vec<String>) {
    let mut documents = Vec::new();
    let mut warnings = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warnings.push(format!("Cannot read directory {}: {}", dir.display(), e));
            return (documents, warnings);
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(NOTE_EXTENSION) {
            continue;
        }

        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match fs::read_to_string(&path) {
            Ok(content) => documents.push(Document::new(id, &content)),
            Err(e) => {
                warnings.push(format!("Skipping unreadable file {}: {}", path.display(), e));
            }
        }
    }

    documents.sort_by(|a, b| a.id.cmp(&b.id));

    (documents, warnings)
}
