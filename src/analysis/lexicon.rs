/*
 * Sentiment Chatbot CLI - Lexicon Scorer
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

//! Weighted word-list scorer.
//!
//! Each known word carries a polarity; a negator right before it flips and
//! halves it, an intensifier boosts it by 30%. The message score is the mean
//! polarity of the matched words. Labels use strict +/-0.1 cut-offs.

use std::collections::BTreeMap;

use super::scorer::{validate_score, SentimentScorer};
use crate::types::{ScorerError, SentimentLabel, SentimentResult};

const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

const NEGATION_FACTOR: f64 = -0.5;
const INTENSIFIER_FACTOR: f64 = 1.3;

const POLARITY_WORDS: &[(&str, f64)] = &[
    // Positive
    ("love", 0.5),
    ("loved", 0.7),
    ("like", 0.2),
    ("great", 0.8),
    ("good", 0.7),
    ("better", 0.5),
    ("best", 1.0),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("brilliant", 0.9),
    ("outstanding", 0.5),
    ("perfect", 1.0),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("satisfied", 0.5),
    ("delighted", 0.8),
    ("beautiful", 0.85),
    ("interesting", 0.5),
    ("enjoyable", 0.4),
    ("helpful", 0.4),
    ("fine", 0.4),
    ("thanks", 0.2),
    ("fun", 0.3),
    ("easy", 0.4),
    ("fast", 0.2),
    // Negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("hate", -0.8),
    ("hated", -0.9),
    ("poor", -0.4),
    ("sad", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("annoyed", -0.5),
    ("frustrated", -0.7),
    ("frustrating", -0.7),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("boring", -1.0),
    ("broken", -0.4),
    ("useless", -0.5),
    ("slow", -0.3),
    ("ugly", -0.7),
    ("stupid", -0.8),
    ("rubbish", -0.7),
    ("pathetic", -1.0),
    ("wrong", -0.5),
    ("difficult", -0.5),
    ("expensive", -0.5),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt",
    "isn't", "isnt", "wasn't", "wasnt", "aren't", "arent", "weren't", "werent",
    "can't", "cant", "cannot", "won't", "wont", "hardly",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "so", "super", "absolutely", "incredibly", "truly",
];

pub struct LexiconScorer {
    words: BTreeMap<&'static str, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        tracing::info!("Lexicon analyzer initialized with {} words", POLARITY_WORDS.len());
        Self {
            words: POLARITY_WORDS.iter().copied().collect(),
        }
    }

    fn words_of(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
            .filter(|word| !word.is_empty())
            .map(|word| word.replace('’', "'"))
            .collect()
    }

    /// Polarity of the word at `index` after applying the modifiers before it.
    fn modified_polarity(&self, words: &[String], index: usize, polarity: f64) -> f64 {
        let mut polarity = polarity;
        let mut cursor = index;

        if cursor > 0 && INTENSIFIERS.contains(&words[cursor - 1].as_str()) {
            polarity *= INTENSIFIER_FACTOR;
            cursor -= 1;
        }
        if cursor > 0 && NEGATORS.contains(&words[cursor - 1].as_str()) {
            polarity *= NEGATION_FACTOR;
        }

        polarity
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn analyze(&self, text: &str) -> Result<SentimentResult, ScorerError> {
        if text.trim().is_empty() {
            return Ok(SentimentResult::neutral());
        }

        let words = Self::words_of(text);
        let matched: Vec<f64> = words
            .iter()
            .enumerate()
            .filter_map(|(i, word)| {
                self.words
                    .get(word.as_str())
                    .map(|polarity| self.modified_polarity(&words, i, *polarity))
            })
            .collect();

        let polarity = if matched.is_empty() {
            0.0
        } else {
            (matched.iter().sum::<f64>() / matched.len() as f64).clamp(-1.0, 1.0)
        };
        let polarity = validate_score(polarity)?;
        let subjectivity = if words.is_empty() {
            0.0
        } else {
            matched.len() as f64 / words.len() as f64
        };

        let mut components = BTreeMap::new();
        components.insert("polarity".to_string(), polarity);
        components.insert("subjectivity".to_string(), subjectivity);

        Ok(SentimentResult {
            score: polarity,
            label: self.label_for(polarity),
            confidence: polarity.abs(),
            adjusted_for_comparison: false,
            components,
            emotion: None,
        })
    }

    fn label_for(&self, score: f64) -> SentimentLabel {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}
