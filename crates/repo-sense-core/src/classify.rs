//! Composite classification over normalized category scores.
//!
//! Raw scores are normalized into `[0, 1]`, combined into one composite
//! score per repository-type hypothesis, and the best hypothesis is
//! selected in a fixed evaluation order (first computed value wins on
//! exact ties).

use serde::{Deserialize, Serialize};

use crate::signal::{Category, SignalScores};

/// Saturation constant for score normalization: `min(raw / 10, 1.0)`.
///
/// Raw scores grow with corpus size; dividing by a fixed constant keeps
/// composite scores and confidence inside a probability-like range.
pub const SATURATION: u32 = 10;

/// The six normalized category scores, as serialized in the output record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub frontend_score: f64,
    pub backend_score: f64,
    pub library_score: f64,
    pub monorepo_score: f64,
    pub ai_score: f64,
    pub cli_score: f64,
}

impl Metrics {
    /// Normalize accumulated raw scores.
    pub fn from_scores(scores: &SignalScores) -> Self {
        let normalize = |category: Category| (scores.raw(category) as f64 / SATURATION as f64).min(1.0);

        Self {
            frontend_score: normalize(Category::Frontend),
            backend_score: normalize(Category::Backend),
            library_score: normalize(Category::Library),
            monorepo_score: normalize(Category::Monorepo),
            ai_score: normalize(Category::AiMl),
            cli_score: normalize(Category::Cli),
        }
    }

    /// True when no category carries any signal.
    pub fn is_zero(&self) -> bool {
        self.frontend_score == 0.0
            && self.backend_score == 0.0
            && self.library_score == 0.0
            && self.monorepo_score == 0.0
            && self.ai_score == 0.0
            && self.cli_score == 0.0
    }
}

/// Repository-type hypotheses competing for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepoType {
    Fullstack,
    Frontend,
    Backend,
    Library,
    Monorepo,
    Cli,
    AiMl,
    DataPipeline,
    Framework,
}

impl RepoType {
    /// Wire/display name, as used in the output record.
    pub fn name(&self) -> &'static str {
        match self {
            RepoType::Fullstack => "fullstack",
            RepoType::Frontend => "frontend",
            RepoType::Backend => "backend",
            RepoType::Library => "library",
            RepoType::Monorepo => "monorepo",
            RepoType::Cli => "cli",
            RepoType::AiMl => "ai-ml",
            RepoType::DataPipeline => "data-pipeline",
            RepoType::Framework => "framework",
        }
    }

    /// Output-structuring strategy recommended for this type.
    pub fn recommended_structure(&self) -> Structure {
        match self {
            RepoType::AiMl => Structure::AiFocused,
            RepoType::Monorepo => Structure::Monorepo,
            RepoType::DataPipeline => Structure::DataFocused,
            RepoType::Library | RepoType::Framework => Structure::Modular,
            _ => Structure::Standard,
        }
    }
}

impl std::fmt::Display for RepoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Recommended output-structuring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Structure {
    Standard,
    Modular,
    AiFocused,
    DataFocused,
    Monorepo,
}

impl Structure {
    pub fn name(&self) -> &'static str {
        match self {
            Structure::Standard => "standard",
            Structure::Modular => "modular",
            Structure::AiFocused => "ai-focused",
            Structure::DataFocused => "data-focused",
            Structure::Monorepo => "monorepo",
        }
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Composite formulas, one per hypothesis, in evaluation order.
///
/// The order is part of the contract: selection keeps the first
/// hypothesis unless a strictly greater score appears later, so exact
/// ties resolve to the earlier entry. The `min`/`max` split in the
/// fullstack formula requires BOTH signals to be strong; the `(1 - x)`
/// terms penalize single-category hypotheses when the opposing signal
/// is present.
pub const HYPOTHESES: &[(RepoType, fn(&Metrics) -> f64)] = &[
    (RepoType::Fullstack, |m| {
        m.frontend_score.min(m.backend_score) * 0.8 + m.frontend_score.max(m.backend_score) * 0.2
    }),
    (RepoType::Frontend, |m| {
        m.frontend_score * 0.7 + (1.0 - m.backend_score) * 0.3
    }),
    (RepoType::Backend, |m| {
        m.backend_score * 0.7 + (1.0 - m.frontend_score) * 0.3
    }),
    (RepoType::Library, |m| {
        m.library_score * 0.8 + (1.0 - m.frontend_score) * 0.2
    }),
    (RepoType::Monorepo, |m| m.monorepo_score),
    (RepoType::Cli, |m| m.cli_score),
    (RepoType::AiMl, |m| m.ai_score),
    (RepoType::DataPipeline, |m| {
        m.backend_score * 0.6 + m.library_score * 0.4
    }),
    (RepoType::Framework, |m| {
        m.backend_score * 0.5 + m.library_score * 0.3 + m.monorepo_score * 0.2
    }),
];

/// Composite score of one hypothesis for the given metrics.
pub fn composite(repo_type: RepoType, metrics: &Metrics) -> f64 {
    HYPOTHESES
        .iter()
        .find(|(t, _)| *t == repo_type)
        .map(|(_, formula)| formula(metrics))
        .unwrap_or(0.0)
}

/// Select the winning hypothesis and its composite score.
///
/// Zero signal everywhere resolves to `fullstack` at confidence 0.0;
/// the short-circuit keeps the `(1 - x)` baselines from handing the
/// all-zero case to `frontend` at 0.3.
pub fn classify(metrics: &Metrics) -> (RepoType, f64) {
    if metrics.is_zero() {
        return (RepoType::Fullstack, 0.0);
    }

    let (mut best_type, first_formula) = HYPOTHESES[0];
    let mut best_score = first_formula(metrics);

    for (repo_type, formula) in &HYPOTHESES[1..] {
        let score = formula(metrics);
        if score > best_score {
            best_score = score;
            best_type = *repo_type;
        }
    }

    (best_type, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::signal::score_documents;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "expected {}, got {}", b, a);
    }

    fn metrics_for(texts: &[&str]) -> Metrics {
        let docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc-{}", i), t))
            .collect();
        Metrics::from_scores(&score_documents(&docs))
    }

    #[test]
    fn test_normalized_scores_bounded() {
        // 20 documents all matching the +3 frontend group: raw 60 caps at 1.0.
        let texts: Vec<String> = (0..20).map(|i| format!("react module {}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        let m = metrics_for(&refs);
        assert_eq!(m.frontend_score, 1.0);
        for score in [
            m.frontend_score,
            m.backend_score,
            m.library_score,
            m.monorepo_score,
            m.ai_score,
            m.cli_score,
        ] {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_all_zero_resolves_to_fullstack_at_zero() {
        let (repo_type, confidence) = classify(&Metrics::default());
        assert_eq!(repo_type, RepoType::Fullstack);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_library_scenario() {
        // "public api" (+2) and "utility" (+2) -> raw 4 -> 0.4 normalized.
        let m = metrics_for(&["this module exposes a public api and is a reusable utility library, no ui"]);
        approx(m.library_score, 0.4);

        let (repo_type, confidence) = classify(&m);
        assert_eq!(repo_type, RepoType::Library);
        approx(confidence, 0.4 * 0.8 + 1.0 * 0.2);
        assert_eq!(repo_type.recommended_structure(), Structure::Modular);
    }

    #[test]
    fn test_balanced_signals_scenario() {
        // One backend note, one frontend note, raw 3 each -> 0.3 each.
        let m = metrics_for(&["express route api endpoint", "react component jsx"]);
        approx(m.frontend_score, 0.3);
        approx(m.backend_score, 0.3);

        // fullstack = min*0.8 + max*0.2 = 0.3, but the frontend formula
        // reaches 0.3*0.7 + 0.7*0.3 = 0.42 and wins; backend ties at 0.42
        // and loses to the earlier entry.
        approx(composite(RepoType::Fullstack, &m), 0.3);
        approx(composite(RepoType::Frontend, &m), 0.42);
        approx(composite(RepoType::Backend, &m), 0.42);

        let (repo_type, confidence) = classify(&m);
        assert_eq!(repo_type, RepoType::Frontend);
        approx(confidence, 0.42);
    }

    #[test]
    fn test_confidence_matches_recomputed_composite() {
        let cases: &[&[&str]] = &[
            &["react redux tailwind"],
            &["express postgres graphql", "react jsx"],
            &["pytorch training dataset neural"],
            &["monorepo workspace shared packages"],
            &["cli arguments stdin stdout"],
            &["database orm library export helper"],
        ];

        for texts in cases {
            let m = metrics_for(texts);
            let (repo_type, confidence) = classify(&m);
            approx(confidence, composite(repo_type, &m));
        }
    }

    #[test]
    fn test_winner_beats_every_other_hypothesis() {
        let m = metrics_for(&["pytorch tensorflow training dataset neural tensor model"]);
        let (winner, confidence) = classify(&m);
        for (repo_type, formula) in HYPOTHESES {
            if *repo_type != winner {
                assert!(formula(&m) <= confidence);
            }
        }
    }

    #[test]
    fn test_tie_break_keeps_first_hypothesis() {
        // monorepo and cli share the identity formula; equal raw scores tie
        // exactly and monorepo comes first in evaluation order.
        let m = Metrics {
            monorepo_score: 0.9,
            cli_score: 0.9,
            ..Metrics::default()
        };
        let (repo_type, confidence) = classify(&m);
        assert_eq!(repo_type, RepoType::Monorepo);
        approx(confidence, 0.9);
    }

    #[test]
    fn test_strong_single_signal_cannot_masquerade_as_fullstack() {
        let m = Metrics {
            frontend_score: 1.0,
            ..Metrics::default()
        };
        // min(1.0, 0.0)*0.8 + max(1.0, 0.0)*0.2 = 0.2 only.
        approx(composite(RepoType::Fullstack, &m), 0.2);
        let (repo_type, _) = classify(&m);
        assert_eq!(repo_type, RepoType::Frontend);
    }

    #[test]
    fn test_structure_lookup() {
        assert_eq!(RepoType::AiMl.recommended_structure(), Structure::AiFocused);
        assert_eq!(RepoType::Monorepo.recommended_structure(), Structure::Monorepo);
        assert_eq!(
            RepoType::DataPipeline.recommended_structure(),
            Structure::DataFocused
        );
        assert_eq!(RepoType::Library.recommended_structure(), Structure::Modular);
        assert_eq!(RepoType::Framework.recommended_structure(), Structure::Modular);
        assert_eq!(RepoType::Fullstack.recommended_structure(), Structure::Standard);
        assert_eq!(RepoType::Frontend.recommended_structure(), Structure::Standard);
        assert_eq!(RepoType::Backend.recommended_structure(), Structure::Standard);
        assert_eq!(RepoType::Cli.recommended_structure(), Structure::Standard);
    }

    #[test]
    fn test_wire_names_roundtrip_through_serde() {
        for (repo_type, _) in HYPOTHESES {
            let json = serde_json::to_string(repo_type).unwrap();
            assert_eq!(json, format!("\"{}\"", repo_type.name()));
            let back: RepoType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *repo_type);
        }
    }
}
