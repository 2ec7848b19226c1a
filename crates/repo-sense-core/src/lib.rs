pub mod classify;
pub mod document;
pub mod error;
pub mod report;
pub mod signal;

pub use classify::{classify, composite, Metrics, RepoType, Structure, HYPOTHESES, SATURATION};
pub use document::{load_documents, Document, NOTE_EXTENSION};
pub use error::{RepoSenseError, Result};
pub use report::Classification;
pub use signal::{score_documents, Category, SignalGroup, SignalScores, SIGNAL_GROUPS};
