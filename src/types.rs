/*
 * Sentiment Chatbot CLI - Rust Edition
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
use std::collections::BTreeMap;
use std::fmt;

/// Coarse three-way sentiment bucket derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => f.pad("Positive"),
            SentimentLabel::Negative => f.pad("Negative"),
            SentimentLabel::Neutral => f.pad("Neutral"),
        }
    }
}

impl Default for SentimentLabel {
    fn default() -> Self {
        SentimentLabel::Neutral
    }
}

/// Per-message analysis output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Signed polarity in [-1.0, 1.0]
    pub score: f64,
    pub label: SentimentLabel,
    pub confidence: f64,
    #[serde(default)]
    pub adjusted_for_comparison: bool,
    /// Scorer-native breakdown (VADER compound/pos/neu/neg, lexicon polarity/subjectivity)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionResult>,
}

impl SentimentResult {
    /// The neutral default used for blank text and for absorbed scorer failures.
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            adjusted_for_comparison: false,
            components: BTreeMap::new(),
            emotion: None,
        }
    }

    pub fn with_emotion(mut self, emotion: EmotionResult) -> Self {
        self.emotion = Some(emotion);
        self
    }
}

/// The `{score, label}` shape the aggregator and trend analyzer consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MessageSentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

impl MessageSentiment {
    pub fn new(score: f64, label: SentimentLabel) -> Self {
        Self { score, label }
    }
}

impl From<&SentimentResult> for MessageSentiment {
    fn from(result: &SentimentResult) -> Self {
        Self {
            score: result.score,
            label: result.label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Joy => "😊",
            Emotion::Sadness => "😢",
            Emotion::Anger => "😠",
            Emotion::Fear => "😨",
            Emotion::Surprise => "😲",
            Emotion::Disgust => "🤢",
            Emotion::Neutral => "😐",
        }
    }

    /// Capitalized name for display ("Joy", "Sadness", ...)
    pub fn title(&self) -> &'static str {
        match self {
            Emotion::Joy => "Joy",
            Emotion::Sadness => "Sadness",
            Emotion::Anger => "Anger",
            Emotion::Fear => "Fear",
            Emotion::Surprise => "Surprise",
            Emotion::Disgust => "Disgust",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emotion::Joy => f.pad("joy"),
            Emotion::Sadness => f.pad("sadness"),
            Emotion::Anger => f.pad("anger"),
            Emotion::Fear => f.pad("fear"),
            Emotion::Surprise => f.pad("surprise"),
            Emotion::Disgust => f.pad("disgust"),
            Emotion::Neutral => f.pad("neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub primary_emotion: Emotion,
    /// Only emotions with at least one keyword hit are present
    pub emotions: BTreeMap<Emotion, f64>,
    pub confidence: f64,
}

impl Default for EmotionResult {
    fn default() -> Self {
        Self {
            primary_emotion: Emotion::Neutral,
            emotions: BTreeMap::new(),
            confidence: 0.0,
        }
    }
}

/// Conversation-level emotion tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEmotions {
    pub emotion_distribution: BTreeMap<Emotion, usize>,
    pub dominant_emotion: Emotion,
    pub average_confidence: BTreeMap<Emotion, f64>,
    pub total_emotions_detected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improving => f.pad("improving"),
            Trend::Declining => f.pad("declining"),
            Trend::Stable => f.pad("stable"),
            Trend::InsufficientData => f.pad("insufficient_data"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    /// 1-based position of the message in the conversation
    #[serde(alias = "index")]
    pub message_index: usize,
    pub score: f64,
    pub label: SentimentLabel,
    pub cumulative_avg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Positive,
    Negative,
}

/// A message flagged for a sharp score change or an extreme absolute score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyMoment {
    SignificantShift {
        message_index: usize,
        direction: ShiftDirection,
        magnitude: f64,
        from_score: f64,
        to_score: f64,
        from_label: SentimentLabel,
        to_label: SentimentLabel,
    },
    ExtremeSentiment {
        message_index: usize,
        sentiment: SentimentLabel,
        score: f64,
    },
}

impl KeyMoment {
    pub fn message_index(&self) -> usize {
        match self {
            KeyMoment::SignificantShift { message_index, .. } => *message_index,
            KeyMoment::ExtremeSentiment { message_index, .. } => *message_index,
        }
    }

    pub fn is_significant_shift(&self) -> bool {
        matches!(self, KeyMoment::SignificantShift { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTrend {
    pub trend: Trend,
    pub description: String,
    pub first_half_avg: f64,
    pub second_half_avg: f64,
    pub progression: Vec<ProgressionPoint>,
    pub key_moments: Vec<KeyMoment>,
    pub volatility: f64,
}

impl ConversationTrend {
    pub fn insufficient_data() -> Self {
        Self {
            trend: Trend::InsufficientData,
            description: "Not enough messages to analyze trend".to_string(),
            first_half_avg: 0.0,
            second_half_avg: 0.0,
            progression: Vec::new(),
            key_moments: Vec::new(),
            volatility: 0.0,
        }
    }

    pub fn significant_shift_count(&self) -> usize {
        self.key_moments
            .iter()
            .filter(|moment| moment.is_significant_shift())
            .count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDistribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl LabelDistribution {
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a SentimentLabel>) -> Self {
        let mut distribution = Self::default();
        for label in labels {
            distribution.record(*label);
        }
        distribution
    }

    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Aggregated view of one conversation's user messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub overall_sentiment: SentimentLabel,
    pub average_score: f64,
    pub total_messages: usize,
    pub label_distribution: LabelDistribution,
    pub reasoning: String,
    #[serde(default)]
    pub scores: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<SentimentLabel>,
}

impl ConversationSummary {
    pub fn empty() -> Self {
        Self {
            overall_sentiment: SentimentLabel::Neutral,
            average_score: 0.0,
            total_messages: 0,
            label_distribution: LabelDistribution::default(),
            reasoning: "No messages to analyze".to_string(),
            scores: Vec::new(),
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    #[error("Scorer produced an invalid score: {0}")]
    InvalidScore(f64),

    #[error("Scorer backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Conversation not found: {0}")]
    NotFound(String),
}
