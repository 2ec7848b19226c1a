//! Signal scoring: keyword tables and the scoring pass over documents.

pub mod builtin;
pub mod scorer;

pub use builtin::{Category, SignalGroup, SIGNAL_GROUPS};
pub use scorer::{score_documents, SignalScores};
