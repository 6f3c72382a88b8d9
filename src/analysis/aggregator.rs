/*
 * Sentiment Chatbot CLI - Conversation Aggregator
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

use crate::types::{ConversationSummary, LabelDistribution, MessageSentiment, SentimentLabel};

/// A single message this far below zero can tip a tied conversation negative.
const STRONG_NEGATIVE: f64 = -0.3;
const STRONG_POSITIVE: f64 = 0.3;
const AVERAGE_THRESHOLD: f64 = 0.1;
/// Positive majority needs a wider margin than negative majority.
const POSITIVE_MARGIN: usize = 2;
const NEGATIVE_MARGIN: usize = 1;

/// Overall verdict for one conversation's user messages, in chronological order.
pub fn summarize(messages: &[MessageSentiment]) -> ConversationSummary {
    if messages.is_empty() {
        return ConversationSummary::empty();
    }

    let scores: Vec<f64> = messages.iter().map(|m| m.score).collect();
    let labels: Vec<SentimentLabel> = messages.iter().map(|m| m.label).collect();
    let distribution = LabelDistribution::from_labels(&labels);
    let total = messages.len();
    let average = scores.iter().sum::<f64>() / total as f64;

    let overall = overall_sentiment(&scores, &distribution, average);
    let reasoning = reasoning(overall, &distribution, total, average);

    ConversationSummary {
        overall_sentiment: overall,
        average_score: average,
        total_messages: total,
        label_distribution: distribution,
        reasoning,
        scores,
        labels,
    }
}

fn overall_sentiment(scores: &[f64], distribution: &LabelDistribution, average: f64) -> SentimentLabel {
    let positive = distribution.positive;
    let negative = distribution.negative;
    let has_strong_negative = scores.iter().any(|s| *s < STRONG_NEGATIVE);
    let has_strong_positive = scores.iter().any(|s| *s > STRONG_POSITIVE);

    if negative > positive && (negative - positive >= NEGATIVE_MARGIN || has_strong_negative) {
        SentimentLabel::Negative
    } else if positive > negative && positive - negative >= POSITIVE_MARGIN {
        SentimentLabel::Positive
    } else if has_strong_negative && negative >= positive {
        SentimentLabel::Negative
    } else if has_strong_positive && positive > negative {
        SentimentLabel::Positive
    } else if average < -AVERAGE_THRESHOLD {
        SentimentLabel::Negative
    } else if average > AVERAGE_THRESHOLD {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Neutral
    }
}

fn reasoning(
    overall: SentimentLabel,
    distribution: &LabelDistribution,
    total: usize,
    average: f64,
) -> String {
    let positive = distribution.positive;
    let negative = distribution.negative;

    match overall {
        SentimentLabel::Negative if negative > positive => format!(
            "Generally negative conversation with {}/{} negative messages. \
             User expressed dissatisfaction or concerns.",
            negative, total
        ),
        SentimentLabel::Negative if negative == positive => format!(
            "Mixed conversation with negative tone. Equal negative and positive messages \
             ({} each), but overall sentiment is negative.",
            negative
        ),
        SentimentLabel::Negative => format!(
            "Conversation with negative overall tone despite {} positive messages. \
             Strong negative statements influenced the assessment.",
            positive
        ),
        SentimentLabel::Positive if positive > negative => format!(
            "Generally positive conversation with {}/{} positive messages. \
             User expressed satisfaction or positive feedback.",
            positive, total
        ),
        SentimentLabel::Positive if positive == negative => format!(
            "Mixed conversation with positive tone. Equal positive and negative messages \
             ({} each), but overall sentiment is positive.",
            positive
        ),
        SentimentLabel::Positive => format!(
            "Conversation with positive overall tone. Average sentiment score of {:.3} \
             indicates positive engagement.",
            average
        ),
        SentimentLabel::Neutral => format!(
            "Neutral conversation with balanced sentiment. Distribution: {} positive, \
             {} negative, {} neutral messages.",
            positive, negative, distribution.neutral
        ),
    }
}
