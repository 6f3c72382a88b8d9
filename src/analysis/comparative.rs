/*
 * Sentiment Chatbot CLI - Comparative Adjuster
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

//! Score correction for comparative and negated phrasing.
//!
//! Word-level scorers read "the last one was better than this" as praise.
//! The rules below are a priority cascade: negative cues are tried first, in
//! table order, and the first hit decides the adjustment; positive cues are
//! only consulted when no negative cue matched. At most one adjustment is
//! applied per message.

use lazy_static::lazy_static;
use regex::Regex;

use super::scorer::SentimentScorer;
use crate::types::SentimentResult;

/// Vocabulary that pins the score to `PEJORATIVE_SCORE`.
const PEJORATIVE_TERMS: &[&str] = &[
    "rubbish", "nonsense", "garbage", "trash", "crap", "stupid", "idiotic",
];

const NON_PREFERENCE_PHRASES: &[&str] = &[
    "didn't find", "don't find", "not find", "didnt find", "dont find",
];

const PREFERENCE_ADJECTIVES: &[&str] = &[
    "interesting", "good", "great", "enjoyable", "engaging",
];

const PEJORATIVE_SCORE: f64 = -0.7;
const NON_PREFERENCE_WITH_ADJECTIVE_SCORE: f64 = -0.6;
const NON_PREFERENCE_SCORE: f64 = -0.4;
const NEGATIVE_PENALTY: f64 = 0.4;
const POSITIVE_BONUS: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueClass {
    /// Something else is better than the current state
    Negative,
    /// The current state is an improvement
    Positive,
}

pub struct ComparativeRule {
    pub name: &'static str,
    pub class: CueClass,
    pattern: Regex,
}

impl ComparativeRule {
    fn new(name: &'static str, class: CueClass, pattern: &str) -> Self {
        Self {
            name,
            class,
            pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

lazy_static! {
    /// Ordered rule table. Order is priority; do not merge into one pattern.
    static ref RULES: Vec<ComparativeRule> = vec![
        ComparativeRule::new(
            "better_than_current",
            CueClass::Negative,
            r"\b(better|good|great|excellent|superior|improved)\s+than\s+(this|that|current|now|today|this\s+one|that\s+one)",
        ),
        ComparativeRule::new(
            "better_than_it_is",
            CueClass::Negative,
            r"\b(better|good|great|excellent|superior|improved)\s+than\s+(it|they|we|you)\s+(is|are|was|were|now)",
        ),
        ComparativeRule::new(
            "previous_was_better_than",
            CueClass::Negative,
            r"\b(last|previous|earlier|before)\s+(experience|time|one|service|product)\s+(was|were)\s+(better|good|great|excellent)\s+than",
        ),
        ComparativeRule::new(
            "previous_was_better",
            CueClass::Negative,
            r"\b(previous|last|earlier|before)\s+(time|experience)\s+was\s+better",
        ),
        ComparativeRule::new(
            "not_as_good_as_before",
            CueClass::Negative,
            r"\b(not|isn't|aren't|wasn't|weren't)\s+(as|so)\s+(good|great|excellent|nice|well)\s+as\s+(before|previously|earlier|last|it|they)",
        ),
        ComparativeRule::new(
            "is_not_as_good",
            CueClass::Negative,
            r"\b(this|that|it|they)\s+(is|are|was|were)\s+not\s+(as|so)\s+(good|great|excellent|nice|well)",
        ),
        ComparativeRule::new(
            "worse_than_before",
            CueClass::Negative,
            r"\b(worse|worsened|declined|deteriorated)\s+than\s+(before|previously|earlier|last)",
        ),
        ComparativeRule::new(
            "used_to_be_better",
            CueClass::Negative,
            r"\b(used\s+to\s+be)\s+(better|good|great)",
        ),
        ComparativeRule::new(
            "did_not_find_appealing",
            CueClass::Negative,
            r"\b(didn't|don't|doesn't|didnt|dont|doesnt|did\s+not|do\s+not|does\s+not)\s+find.*?(interesting|good|great|excellent|nice|enjoyable|engaging)",
        ),
        ComparativeRule::new(
            "not_appealing",
            CueClass::Negative,
            r"\b(not|isn't|aren't|wasn't|weren't)\s+(interesting|good|great|excellent|nice|enjoyable|engaging|worthwhile)",
        ),
        ComparativeRule::new(
            "pejorative",
            CueClass::Negative,
            r"\b(rubbish|nonsense|stupid|idiotic|ridiculous|terrible|awful|horrible|disgusting|pathetic)",
        ),
        ComparativeRule::new(
            "dismissive_talk",
            CueClass::Negative,
            r"\b(don't|do\s+not)\s+talk\s+(rubbish|nonsense|garbage|trash|crap)",
        ),
        ComparativeRule::new(
            "better_than_before",
            CueClass::Positive,
            r"\b(better|good|great|excellent|improved)\s+than\s+(before|previously|earlier|last)",
        ),
        ComparativeRule::new(
            "improved_from_before",
            CueClass::Positive,
            r"\b(improved|improving|better)\s+(than|from)\s+(before|previously|earlier|last)",
        ),
    ];
}

/// Deterministic correction layer applied on top of a base scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparativeAdjuster;

impl ComparativeAdjuster {
    pub fn new() -> Self {
        Self
    }

    pub fn rules(&self) -> &'static [ComparativeRule] {
        RULES.as_slice()
    }

    /// The rule that decides the adjustment for `text`, if any.
    pub fn detect(&self, text: &str) -> Option<&'static ComparativeRule> {
        self.first_match(text, CueClass::Negative)
            .or_else(|| self.first_match(text, CueClass::Positive))
    }

    fn first_match(&self, text: &str, class: CueClass) -> Option<&'static ComparativeRule> {
        RULES
            .iter()
            .filter(|rule| rule.class == class)
            .find(|rule| rule.is_match(text))
    }

    /// Return a corrected copy of `base`, or an unchanged copy when no cue
    /// matches. Results already marked as adjusted are passed through.
    pub fn adjust(
        &self,
        text: &str,
        base: &SentimentResult,
        scorer: &dyn SentimentScorer,
    ) -> SentimentResult {
        if base.adjusted_for_comparison {
            return base.clone();
        }

        let Some(rule) = self.detect(text) else {
            return base.clone();
        };

        let original = base.score;
        let adjusted = match rule.class {
            CueClass::Negative => negative_adjustment(&text.to_lowercase(), original),
            CueClass::Positive => positive_adjustment(original),
        };
        let result = rebuild(base, adjusted, scorer);

        tracing::debug!(
            "Adjusted sentiment via '{}' rule: {}... (score: {:.2} -> {:.2})",
            rule.name,
            text.chars().take(50).collect::<String>(),
            original,
            result.score
        );

        result
    }
}

fn negative_adjustment(text_lower: &str, original: f64) -> f64 {
    if PEJORATIVE_TERMS.iter().any(|term| text_lower.contains(term)) {
        PEJORATIVE_SCORE
    } else if NON_PREFERENCE_PHRASES
        .iter()
        .any(|phrase| text_lower.contains(phrase))
    {
        if PREFERENCE_ADJECTIVES
            .iter()
            .any(|adjective| text_lower.contains(adjective))
        {
            NON_PREFERENCE_WITH_ADJECTIVE_SCORE
        } else {
            NON_PREFERENCE_SCORE
        }
    } else if original > 0.0 {
        -original.abs() - NEGATIVE_PENALTY
    } else {
        original - NEGATIVE_PENALTY
    }
}

fn positive_adjustment(original: f64) -> f64 {
    if original < 0.0 {
        original.abs() + POSITIVE_BONUS
    } else {
        original + POSITIVE_BONUS
    }
}

fn rebuild(base: &SentimentResult, adjusted: f64, scorer: &dyn SentimentScorer) -> SentimentResult {
    let score = adjusted.clamp(-1.0, 1.0);
    let mut components = base.components.clone();
    for key in ["compound", "polarity"] {
        if let Some(value) = components.get_mut(key) {
            *value = score;
        }
    }

    SentimentResult {
        score,
        label: scorer.label_for(score),
        confidence: score.abs(),
        adjusted_for_comparison: true,
        components,
        emotion: base.emotion.clone(),
    }
}
