/*
 * Sentiment Chatbot CLI - Insight Summarizer
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

use crate::types::{ConversationSummary, ConversationTrend, Trend};

const HIGH_VOLATILITY: f64 = 0.3;
const LOW_VOLATILITY: f64 = 0.1;

/// Short natural-language observations about a finished conversation.
pub fn summarize_insights(trend: &ConversationTrend, summary: &ConversationSummary) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(
        match trend.trend {
            Trend::Improving => "Conversation mood improved over time",
            Trend::Declining => "Conversation mood declined over time",
            _ => "Sentiment remained relatively consistent",
        }
        .to_string(),
    );

    let shifts = trend.significant_shift_count();
    if shifts > 0 {
        insights.push(format!("Detected {} significant sentiment shift(s)", shifts));
    }

    let distribution = &summary.label_distribution;
    let total = distribution.total();
    if total > 0 {
        insights.push(if distribution.positive > distribution.negative {
            format!("Predominantly positive messages ({}/{})", distribution.positive, total)
        } else if distribution.negative > distribution.positive {
            format!("Predominantly negative messages ({}/{})", distribution.negative, total)
        } else {
            "Balanced mix of positive and negative messages".to_string()
        });
    }

    if trend.volatility > HIGH_VOLATILITY {
        insights.push("High sentiment volatility - mood changed frequently".to_string());
    } else if trend.volatility < LOW_VOLATILITY {
        insights.push("Low sentiment volatility - consistent emotional tone".to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{aggregator, trend};
    use crate::types::{MessageSentiment, SentimentLabel};

    fn analyze(scores: &[f64], labels: &[SentimentLabel]) -> Vec<String> {
        let messages: Vec<MessageSentiment> = scores
            .iter()
            .zip(labels)
            .map(|(s, l)| MessageSentiment::new(*s, *l))
            .collect();
        summarize_insights(&trend::analyze(scores, labels), &aggregator::summarize(&messages))
    }

    #[test]
    fn volatile_improving_conversation() {
        use SentimentLabel::*;
        let insights = analyze(&[-0.6, -0.4, 0.5, 0.7], &[Negative, Negative, Positive, Positive]);
        assert_eq!(
            insights,
            vec![
                "Conversation mood improved over time",
                "Detected 1 significant sentiment shift(s)",
                "Balanced mix of positive and negative messages",
                "High sentiment volatility - mood changed frequently",
            ]
        );
    }

    #[test]
    fn calm_positive_conversation() {
        use SentimentLabel::*;
        let insights = analyze(&[0.3, 0.35, 0.3], &[Positive, Positive, Positive]);
        assert_eq!(
            insights,
            vec![
                "Sentiment remained relatively consistent",
                "Predominantly positive messages (3/3)",
                "Low sentiment volatility - consistent emotional tone",
            ]
        );
    }

    #[test]
    fn medium_volatility_adds_nothing() {
        use SentimentLabel::*;
        let insights = analyze(&[0.2, -0.2, 0.2, -0.2], &[Positive, Negative, Positive, Negative]);
        // volatility is exactly 0.2
        assert_eq!(insights.len(), 3);
        assert!(insights.iter().all(|i| !i.contains("volatility")));
        assert!(insights.contains(&"Detected 3 significant sentiment shift(s)".to_string()));
    }

    #[test]
    fn empty_summary_skips_distribution() {
        let insights = summarize_insights(
            &ConversationTrend::insufficient_data(),
            &ConversationSummary::empty(),
        );
        assert_eq!(
            insights,
            vec![
                "Sentiment remained relatively consistent",
                "Low sentiment volatility - consistent emotional tone",
            ]
        );
    }
}
