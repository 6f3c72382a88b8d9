/*
 * Sentiment Chatbot CLI - Sentiment Engine
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

use super::aggregator;
use super::comparative::ComparativeAdjuster;
use super::emotion::EmotionDetector;
use super::scorer::{ScorerKind, SentimentScorer};
use crate::types::{ConversationSummary, MessageSentiment, SentimentResult};

/// Base scorer plus comparative correction. Scorer failures never escape
/// this boundary; they degrade to a neutral result.
pub struct SentimentEngine {
    scorer: Box<dyn SentimentScorer>,
    adjuster: ComparativeAdjuster,
}

impl SentimentEngine {
    pub fn new(kind: ScorerKind) -> Self {
        Self::with_scorer(kind.build())
    }

    pub fn with_scorer(scorer: Box<dyn SentimentScorer>) -> Self {
        tracing::info!("SentimentEngine initialized with {} analyzer", scorer.name());
        Self {
            scorer,
            adjuster: ComparativeAdjuster::new(),
        }
    }

    pub fn analyzer_name(&self) -> &str {
        self.scorer.name()
    }

    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }

    pub fn analyze_text(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::neutral();
        }

        let base = match self.scorer.analyze(text) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Error analyzing sentiment with {}: {}", self.scorer.name(), e);
                return SentimentResult::neutral();
            }
        };

        self.adjuster.adjust(text, &base, self.scorer.as_ref())
    }

    /// Sentiment with the emotion attached, using the adjusted score as the
    /// emotion hint.
    pub fn analyze_with_emotion(&self, text: &str, detector: &EmotionDetector) -> SentimentResult {
        let result = self.analyze_text(text);
        let emotion = detector.detect(text, Some(result.score));
        result.with_emotion(emotion)
    }

    /// Score every message and aggregate. Texts are user messages in
    /// chronological order.
    pub fn analyze_conversation<S: AsRef<str>>(&self, messages: &[S]) -> ConversationSummary {
        let sentiments: Vec<MessageSentiment> = messages
            .iter()
            .map(|text| MessageSentiment::from(&self.analyze_text(text.as_ref())))
            .collect();
        aggregator::summarize(&sentiments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scorer::test_support::FixedScorer;
    use crate::types::{ScorerError, SentimentLabel};
    use proptest::prelude::*;

    struct FailingScorer;

    impl SentimentScorer for FailingScorer {
        fn name(&self) -> &str {
            "failing"
        }

        fn analyze(&self, _text: &str) -> Result<SentimentResult, ScorerError> {
            Err(ScorerError::Backend("model unavailable".to_string()))
        }

        fn label_for(&self, _score: f64) -> SentimentLabel {
            SentimentLabel::Positive
        }
    }

    #[test]
    fn comparative_praise_is_negative() {
        let engine = SentimentEngine::with_scorer(Box::new(FixedScorer(0.44)));
        let result = engine.analyze_text("This is better than this one.");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.adjusted_for_comparison);

        let vader = SentimentEngine::new(ScorerKind::Vader);
        assert_eq!(
            vader.analyze_text("This is better than this one.").label,
            SentimentLabel::Negative
        );
    }

    #[test]
    fn scorer_failure_degrades_to_neutral() {
        let engine = SentimentEngine::with_scorer(Box::new(FailingScorer));
        let result = engine.analyze_text("I didn't find it interesting");
        assert_eq!(result, SentimentResult::neutral());
    }

    #[test]
    fn blank_text_skips_the_scorer() {
        let engine = SentimentEngine::with_scorer(Box::new(FixedScorer(0.9)));
        assert_eq!(engine.analyze_text("   "), SentimentResult::neutral());
    }

    #[test]
    fn positive_conversation() {
        let engine = SentimentEngine::new(ScorerKind::Vader);
        let summary =
            engine.analyze_conversation(&["I love this!", "This is great!", "Amazing product!"]);
        assert_eq!(summary.overall_sentiment, SentimentLabel::Positive);
        assert_eq!(summary.total_messages, 3);
    }

    #[test]
    fn emotion_is_attached_and_serialized() {
        let engine = SentimentEngine::with_scorer(Box::new(FixedScorer(0.7)));
        let result = engine.analyze_with_emotion("I am so happy and excited", &EmotionDetector::new());

        assert_eq!(result.label, SentimentLabel::Positive);
        let emotion = result.emotion.as_ref().unwrap();
        assert_eq!(emotion.primary_emotion, crate::types::Emotion::Joy);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["label"], "Positive");
        assert_eq!(json["emotion"]["primary_emotion"], "joy");
        assert_eq!(json["adjusted_for_comparison"], false);
    }

    #[test]
    fn empty_conversation() {
        let engine = SentimentEngine::new(ScorerKind::Lexicon);
        let summary = engine.analyze_conversation::<&str>(&[]);
        assert_eq!(summary.overall_sentiment, SentimentLabel::Neutral);
        assert_eq!(summary.total_messages, 0);
    }

    #[test]
    fn accepts_owned_strings() {
        let engine = SentimentEngine::with_scorer(Box::new(FixedScorer(-0.6)));
        let texts = vec!["one".to_string(), "two".to_string()];
        let summary = engine.analyze_conversation(&texts);
        assert_eq!(summary.overall_sentiment, SentimentLabel::Negative);
        assert_eq!(engine.analyzer_name(), "fixed");
    }

    proptest! {
        #[test]
        fn label_always_matches_score(base in -1.0f64..=1.0, text in "[a-z ]{0,40}( better than this| used to be great| worse than before| improved from before)?") {
            let engine = SentimentEngine::with_scorer(Box::new(FixedScorer(base)));
            let result = engine.analyze_text(&text);
            prop_assert!((-1.0..=1.0).contains(&result.score));
            prop_assert_eq!(result.label, engine.scorer().label_for(result.score));
        }

        #[test]
        fn adjustment_is_idempotent(base in -1.0f64..=1.0, text in "(it )?(used to be better|didn't find it good|don't talk rubbish|better than before|fine)") {
            let scorer = FixedScorer(base);
            let adjuster = ComparativeAdjuster::new();
            let raw = scorer.analyze(&text).unwrap();
            let once = adjuster.adjust(&text, &raw, &scorer);
            let twice = adjuster.adjust(&text, &once, &scorer);
            prop_assert_eq!(once, twice);
        }
    }
}
