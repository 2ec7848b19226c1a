//! Signal Scorer
//!
//! ドキュメント集合をシグナルグループテーブルに照らして走査し、
//! カテゴリごとの生スコアと特徴ラベルを蓄積する。

use std::collections::HashSet;

use crate::document::Document;

use super::builtin::{Category, SIGNAL_GROUPS};

/// Accumulated raw scores plus matched characteristic labels.
#[derive(Debug, Clone, Default)]
pub struct SignalScores {
    raw: [u32; Category::COUNT],
    characteristics: Vec<&'static str>,
}

impl SignalScores {
    /// Raw integer score for one category.
    pub fn raw(&self, category: Category) -> u32 {
        self.raw[category.index()]
    }

    /// Matched characteristic labels, first-seen order, no duplicates.
    pub fn characteristics(&self) -> &[&'static str] {
        &self.characteristics
    }

    /// True when no keyword group matched any document.
    pub fn is_empty(&self) -> bool {
        self.raw.iter().all(|&s| s == 0)
    }
}

/// Score all documents against the builtin signal group table.
///
/// A group contributes its weight at most once per document; matches in
/// further documents accumulate independently. A group's label is
/// recorded the first time the group fires anywhere in the run.
pub fn score_documents(documents: &[Document]) -> SignalScores {
    let mut scores = SignalScores::default();
    let mut seen_labels: HashSet<&'static str> = HashSet::new();

    for document in documents {
        for group in SIGNAL_GROUPS {
            if !group.matches(&document.content) {
                continue;
            }

            scores.raw[group.category.index()] += group.weight;

            if let Some(label) = group.label {
                if seen_labels.insert(label) {
                    scores.characteristics.push(label);
                }
            }
        }
    }

    scores
}
