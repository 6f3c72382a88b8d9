/*
 * Sentiment Chatbot CLI - Base Scorer Contract
 * Copyright (c) 2024 Sentiment Chatbot Contributors
 *
 * This work is licensed under the Creative Commons Attribution-NonCommercial 4.0 International License.
 * To view a copy of this license, visit http://creativecommons.org/licenses/by-nc/4.0/
 *
 * You are free to share and adapt this work for non-commercial purposes with attribution.
 * Commercial use is prohibited without explicit written permission.
 *
 * For commercial licensing inquiries, please contact the project maintainers.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lexicon::LexiconScorer;
use super::vader::VaderScorer;
use crate::types::{ScorerError, SentimentLabel, SentimentResult};

/// Interchangeable base scorer.
///
/// Each implementation owns its own score -> label thresholds; callers that
/// rewrite a score must go back through `label_for` so the label stays
/// consistent with the active scorer.
pub trait SentimentScorer: Send + Sync {
    fn name(&self) -> &str;

    /// Score one message. Blank text yields `SentimentResult::neutral()`.
    fn analyze(&self, text: &str) -> Result<SentimentResult, ScorerError>;

    fn label_for(&self, score: f64) -> SentimentLabel;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    Vader,
    Lexicon,
}

impl Default for ScorerKind {
    fn default() -> Self {
        ScorerKind::Vader
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerKind::Vader => write!(f, "vader"),
            ScorerKind::Lexicon => write!(f, "lexicon"),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vader" => Ok(ScorerKind::Vader),
            "lexicon" | "textblob" => Ok(ScorerKind::Lexicon),
            other => Err(format!("unknown analyzer type: {}", other)),
        }
    }
}

impl ScorerKind {
    /// Parse an analyzer name, falling back to VADER for unknown names.
    pub fn parse_or_default(name: &str) -> Self {
        match name.parse() {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!("Unknown analyzer type: {}. Defaulting to VADER.", name);
                ScorerKind::Vader
            }
        }
    }

    pub fn build(&self) -> Box<dyn SentimentScorer> {
        match self {
            ScorerKind::Vader => Box::new(VaderScorer::new()),
            ScorerKind::Lexicon => Box::new(LexiconScorer::new()),
        }
    }
}

/// Reject NaN/infinite or out-of-range raw scores coming out of a backend.
pub(crate) fn validate_score(score: f64) -> Result<f64, ScorerError> {
    if score.is_finite() && (-1.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(ScorerError::InvalidScore(score))
    }
}
