//! Classification record assembly and persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Metrics, RepoType, Structure};
use crate::document::Document;
use crate::error::Result;
use crate::signal::score_documents;

/// The final classification record written for downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub detected_type: RepoType,
    pub confidence: f64,
    pub characteristics: Vec<String>,
    pub recommended_structure: Structure,
    pub metrics: Metrics,
    pub reasoning: String,
}

impl Classification {
    /// Run the full pipeline over an in-memory document set.
    ///
    /// Pure function of its input: no I/O, no timestamps, so an
    /// unchanged document set yields an identical record.
    pub fn from_documents(documents: &[Document]) -> Self {
        let scores = score_documents(documents);
        let metrics = Metrics::from_scores(&scores);
        let (detected_type, confidence) = classify(&metrics);
        let characteristics: Vec<String> =
            scores.characteristics().iter().map(|c| c.to_string()).collect();
        let reasoning = build_reasoning(&metrics, detected_type, confidence, &characteristics);

        Self {
            detected_type,
            confidence,
            characteristics,
            recommended_structure: detected_type.recommended_structure(),
            metrics,
            reasoning,
        }
    }

    /// Write the record as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)?;
        Ok(())
    }
}

/// Fixed-order human-readable report of all six scores plus the winner.
fn build_reasoning(
    metrics: &Metrics,
    detected_type: RepoType,
    confidence: f64,
    characteristics: &[String],
) -> String {
    format!(
        "Repo Type Detection Results:\n\
         - Frontend Score: {:.1}%\n\
         - Backend Score: {:.1}%\n\
         - Library Score: {:.1}%\n\
         - Monorepo Score: {:.1}%\n\
         - AI/ML Score: {:.1}%\n\
         - CLI Score: {:.1}%\n\
         \n\
         Primary Type: {} ({:.1}% confidence)\n\
         Characteristics: {}",
        metrics.frontend_score * 100.0,
        metrics.backend_score * 100.0,
        metrics.library_score * 100.0,
        metrics.monorepo_score * 100.0,
        metrics.ai_score * 100.0,
        metrics.cli_score * 100.0,
        detected_type,
        confidence * 100.0,
        characteristics.join(", "),
    )
}
