/*
 * Sentiment Chatbot CLI - VADER Scorer
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

//! VADER (Valence Aware Dictionary and sEntiment Reasoner) base scorer.
//!
//! The compound score is used as the polarity; labels use the usual VADER
//! cut-offs of +/-0.05 (inclusive).

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use vader_sentiment::SentimentIntensityAnalyzer;

use super::scorer::{validate_score, SentimentScorer};
use crate::types::{ScorerError, SentimentLabel, SentimentResult};

const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        tracing::info!("VADER analyzer initialized successfully");
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn name(&self) -> &str {
        "vader"
    }

    fn analyze(&self, text: &str) -> Result<SentimentResult, ScorerError> {
        if text.trim().is_empty() {
            return Ok(SentimentResult::neutral());
        }

        // The lexicon walker is third-party code; a panic in it must not take
        // the conversation down with it.
        let raw = panic::catch_unwind(AssertUnwindSafe(|| {
            let scores = self.analyzer.polarity_scores(text);
            let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
            (get("compound"), get("pos"), get("neu"), get("neg"))
        }))
        .map_err(|_| ScorerError::Backend("VADER polarity scoring panicked".to_string()))?;

        let (compound, positive, neutral, negative) = raw;
        let compound = validate_score(compound)?;

        let mut components = BTreeMap::new();
        components.insert("compound".to_string(), compound);
        components.insert("positive".to_string(), positive);
        components.insert("neutral".to_string(), neutral);
        components.insert("negative".to_string(), negative);

        Ok(SentimentResult {
            score: compound,
            label: self.label_for(compound),
            confidence: compound.abs(),
            adjusted_for_comparison: false,
            components,
            emotion: None,
        })
    }

    fn label_for(&self, score: f64) -> SentimentLabel {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}
