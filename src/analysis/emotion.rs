/*
 * Sentiment Chatbot CLI - Emotion Detector
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

use std::collections::BTreeMap;

use crate::types::{ConversationEmotions, Emotion, EmotionResult};

/// Keyword sets in tie-break order.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy", "joy", "delighted", "excited", "thrilled", "ecstatic", "wonderful", "amazing",
            "fantastic", "great", "love", "adore",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad", "depressed", "unhappy", "miserable", "disappointed", "upset", "down", "sorrow",
            "grief", "melancholy",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry", "mad", "furious", "rage", "annoyed", "irritated", "frustrated", "outraged",
            "livid", "hate",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "afraid", "scared", "fearful", "worried", "anxious", "nervous", "terrified", "panic",
            "dread", "concerned",
        ],
    ),
    (
        Emotion::Surprise,
        &[
            "surprised", "shocked", "amazed", "astonished", "wow", "unexpected", "incredible",
            "unbelievable",
        ],
    ),
    (
        Emotion::Disgust,
        &["disgusted", "revolted", "sickened", "repulsed", "nauseated"],
    ),
];

const BOOST_THRESHOLD: f64 = 0.3;
const BOOST_FACTOR: f64 = 1.5;

/// One message as seen by the conversation-level tally.
#[derive(Debug, Clone, Copy)]
pub struct EmotionSample<'a> {
    pub text: &'a str,
    /// The message's sentiment score; treated as 0.0 when absent
    pub score: Option<f64>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionDetector;

impl EmotionDetector {
    pub fn new() -> Self {
        tracing::info!("Emotion detector initialized");
        Self
    }

    /// Keyword-based emotion scores, optionally refined by a sentiment score.
    pub fn detect(&self, text: &str, sentiment_score: Option<f64>) -> EmotionResult {
        if text.trim().is_empty() {
            return EmotionResult::default();
        }

        let lower = text.to_lowercase();
        // Vec keeps category order for the tie-break below
        let mut scores: Vec<(Emotion, f64)> = EMOTION_KEYWORDS
            .iter()
            .filter_map(|(emotion, keywords)| {
                let hits = keywords.iter().filter(|k| lower.contains(*k)).count();
                (hits > 0).then(|| (*emotion, hits as f64 / keywords.len() as f64))
            })
            .collect();

        if let Some(score) = sentiment_score {
            if score > BOOST_THRESHOLD {
                boost(&mut scores, Emotion::Joy);
            } else if score < -BOOST_THRESHOLD && !boost(&mut scores, Emotion::Anger) {
                boost(&mut scores, Emotion::Sadness);
            }
        }

        let mut primary: Option<(Emotion, f64)> = None;
        for (emotion, score) in &scores {
            if primary.map_or(true, |(_, best)| *score > best) {
                primary = Some((*emotion, *score));
            }
        }

        match primary {
            Some((primary_emotion, confidence)) => EmotionResult {
                primary_emotion,
                emotions: scores.into_iter().collect(),
                confidence: confidence.min(1.0),
            },
            None => EmotionResult::default(),
        }
    }

    /// Tally primary emotions across a conversation's user messages.
    pub fn analyze_conversation(&self, samples: &[EmotionSample<'_>]) -> ConversationEmotions {
        let mut distribution: BTreeMap<Emotion, usize> = BTreeMap::new();
        let mut confidences: BTreeMap<Emotion, Vec<f64>> = BTreeMap::new();
        let mut first_seen: Vec<Emotion> = Vec::new();

        for sample in samples {
            let result = self.detect(sample.text, Some(sample.score.unwrap_or(0.0)));
            let primary = result.primary_emotion;

            *distribution.entry(primary).or_insert(0) += 1;
            confidences.entry(primary).or_default().push(result.confidence);
            if !first_seen.contains(&primary) {
                first_seen.push(primary);
            }
        }

        let average_confidence = confidences
            .into_iter()
            .map(|(emotion, values)| (emotion, values.iter().sum::<f64>() / values.len() as f64))
            .collect();

        // Mode; ties go to whichever emotion appeared first in the conversation
        let mut dominant = Emotion::Neutral;
        let mut best = 0;
        for emotion in &first_seen {
            let count = distribution.get(emotion).copied().unwrap_or(0);
            if count > best {
                best = count;
                dominant = *emotion;
            }
        }

        ConversationEmotions {
            total_emotions_detected: distribution.len(),
            emotion_distribution: distribution,
            dominant_emotion: dominant,
            average_confidence,
        }
    }
}

/// Multiply an emotion's score in place; false when it has no hits.
fn boost(scores: &mut [(Emotion, f64)], target: Emotion) -> bool {
    match scores.iter_mut().find(|(emotion, _)| *emotion == target) {
        Some((_, score)) => {
            *score *= BOOST_FACTOR;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        let detector = EmotionDetector::new();
        for text in ["", "   "] {
            let result = detector.detect(text, Some(0.9));
            assert_eq!(result.primary_emotion, Emotion::Neutral);
            assert!(result.emotions.is_empty());
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn no_keywords_is_neutral() {
        let result = EmotionDetector::new().detect("The invoice is attached", None);
        assert_eq!(result, EmotionResult::default());
    }

    #[test]
    fn scores_are_normalized_by_list_size() {
        let result = EmotionDetector::new().detect("I am so worried and anxious", None);
        assert_eq!(result.primary_emotion, Emotion::Fear);
        assert!((result.confidence - 0.2).abs() < 1e-9);
        assert_eq!(result.emotions.len(), 1);
    }

    #[test]
    fn positive_score_boosts_joy() {
        let detector = EmotionDetector::new();
        let result = detector.detect("I love it", Some(0.6));
        assert_eq!(result.primary_emotion, Emotion::Joy);
        assert!((result.emotions[&Emotion::Joy] - 1.5 / 12.0).abs() < 1e-9);

        let unboosted = detector.detect("I love it", Some(0.3));
        assert!((unboosted.emotions[&Emotion::Joy] - 1.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn negative_score_boosts_anger_before_sadness() {
        let detector = EmotionDetector::new();
        // sadness 1/10, anger 1/10: tie without a boost goes to sadness
        let text = "I am sad and annoyed";
        assert_eq!(detector.detect(text, None).primary_emotion, Emotion::Sadness);

        let result = detector.detect(text, Some(-0.5));
        assert_eq!(result.primary_emotion, Emotion::Anger);
        assert!((result.emotions[&Emotion::Sadness] - 0.1).abs() < 1e-9);

        let result = detector.detect("so sad and scared", Some(-0.5));
        assert_eq!(result.primary_emotion, Emotion::Sadness);
        assert!((result.confidence - 0.15).abs() < 1e-9);
    }

    #[test]
    fn ties_break_by_category_order() {
        // joy 1/12 vs disgust 1/5: disgust wins on score
        let result = EmotionDetector::new().detect("happy but disgusted", None);
        assert_eq!(result.primary_emotion, Emotion::Disgust);

        // fear 1/10 vs sadness 1/10: sadness comes first
        let result = EmotionDetector::new().detect("upset and nervous", None);
        assert_eq!(result.primary_emotion, Emotion::Sadness);
    }

    #[test]
    fn conversation_tally_uses_first_seen_mode() {
        let detector = EmotionDetector::new();
        let samples = [
            EmotionSample { text: "I'm worried", score: Some(-0.2) },
            EmotionSample { text: "This is great", score: Some(0.6) },
            EmotionSample { text: "hello", score: None },
            EmotionSample { text: "still worried", score: None },
            EmotionSample { text: "love it", score: Some(0.5) },
        ];
        let emotions = detector.analyze_conversation(&samples);

        assert_eq!(emotions.emotion_distribution[&Emotion::Fear], 2);
        assert_eq!(emotions.emotion_distribution[&Emotion::Joy], 2);
        assert_eq!(emotions.emotion_distribution[&Emotion::Neutral], 1);
        assert_eq!(emotions.dominant_emotion, Emotion::Fear);
        assert_eq!(emotions.total_emotions_detected, 3);
        assert_eq!(emotions.average_confidence[&Emotion::Neutral], 0.0);
    }

    #[test]
    fn empty_conversation_is_neutral() {
        let emotions = EmotionDetector::new().analyze_conversation(&[]);
        assert_eq!(emotions.dominant_emotion, Emotion::Neutral);
        assert!(emotions.emotion_distribution.is_empty());
        assert_eq!(emotions.total_emotions_detected, 0);
    }

    #[test]
    fn serializes_lowercase_emotions() {
        let result = EmotionDetector::new().detect("wow", None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["primary_emotion"], "surprise");
        assert!(json["emotions"]["surprise"].is_number());
    }
}
