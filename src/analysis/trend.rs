/*
 * Sentiment Chatbot CLI - Trend Analyzer
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

//! Halves-comparison trend detection, cumulative progression, key moments
//! and volatility over one conversation's score sequence.

use crate::types::{
    ConversationTrend, KeyMoment, ProgressionPoint, SentimentLabel, ShiftDirection, Trend,
};

const TREND_THRESHOLD: f64 = 0.1;
const SHIFT_THRESHOLD: f64 = 0.3;
const EXTREME_THRESHOLD: f64 = 0.7;

/// Analyze chronological per-message scores and labels.
///
/// Mismatched lengths are zipped; trailing elements of the longer sequence
/// are ignored.
pub fn analyze(scores: &[f64], labels: &[SentimentLabel]) -> ConversationTrend {
    let len = scores.len().min(labels.len());
    let (scores, labels) = (&scores[..len], &labels[..len]);

    if len < 2 {
        return ConversationTrend::insufficient_data();
    }

    let mid = len / 2;
    let first_half_avg = mean(&scores[..mid]);
    let second_half_avg = mean(&scores[mid..]);

    let trend = if second_half_avg - first_half_avg > TREND_THRESHOLD {
        Trend::Improving
    } else if first_half_avg - second_half_avg > TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    };

    ConversationTrend {
        trend,
        description: describe(trend, first_half_avg, second_half_avg),
        first_half_avg,
        second_half_avg,
        progression: progression(scores, labels),
        key_moments: key_moments(scores, labels),
        volatility: volatility(scores),
    }
}

fn describe(trend: Trend, first: f64, second: f64) -> String {
    match trend {
        Trend::Improving if first < -TREND_THRESHOLD => format!(
            "Started negative → Shifted positive (improved from {:.2} to {:.2})",
            first, second
        ),
        Trend::Improving => format!(
            "Became increasingly positive (improved from {:.2} to {:.2})",
            first, second
        ),
        Trend::Declining if second < -TREND_THRESHOLD => format!(
            "Started positive/neutral → Shifted negative (declined from {:.2} to {:.2})",
            first, second
        ),
        Trend::Declining => format!(
            "Became less positive (declined from {:.2} to {:.2})",
            first, second
        ),
        Trend::Stable => format!("Remained relatively stable (around {:.2})", first),
        Trend::InsufficientData => "Not enough messages to analyze trend".to_string(),
    }
}

fn progression(scores: &[f64], labels: &[SentimentLabel]) -> Vec<ProgressionPoint> {
    let mut running = 0.0;
    scores
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (score, label))| {
            running += score;
            ProgressionPoint {
                message_index: i + 1,
                score: *score,
                label: *label,
                cumulative_avg: running / (i + 1) as f64,
            }
        })
        .collect()
}

/// Sharp shifts between adjacent messages and extreme single messages.
/// The first message is never a key moment.
pub fn key_moments(scores: &[f64], labels: &[SentimentLabel]) -> Vec<KeyMoment> {
    let mut moments = Vec::new();

    for i in 1..scores.len().min(labels.len()) {
        let (prev, current) = (scores[i - 1], scores[i]);
        let change = current - prev;

        if change.abs() > SHIFT_THRESHOLD {
            moments.push(KeyMoment::SignificantShift {
                message_index: i + 1,
                direction: if change > 0.0 {
                    ShiftDirection::Positive
                } else {
                    ShiftDirection::Negative
                },
                magnitude: change.abs(),
                from_score: prev,
                to_score: current,
                from_label: labels[i - 1],
                to_label: labels[i],
            });
        }

        if current.abs() > EXTREME_THRESHOLD {
            moments.push(KeyMoment::ExtremeSentiment {
                message_index: i + 1,
                sentiment: labels[i],
                score: current,
            });
        }
    }

    moments
}

/// Population standard deviation; 0.0 for fewer than two scores.
pub fn volatility(scores: &[f64]) -> f64 {
    if scores.len() < 2 {
        return 0.0;
    }
    let avg = mean(scores);
    let variance = scores.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / scores.len() as f64;
    variance.sqrt()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use SentimentLabel::{Negative, Neutral, Positive};

    fn labels_for(scores: &[f64]) -> Vec<SentimentLabel> {
        scores
            .iter()
            .map(|s| {
                if *s >= 0.05 {
                    Positive
                } else if *s <= -0.05 {
                    Negative
                } else {
                    Neutral
                }
            })
            .collect()
    }

    fn trend_of(scores: &[f64]) -> ConversationTrend {
        analyze(scores, &labels_for(scores))
    }

    #[test]
    fn improving_from_negative_start() {
        let trend = trend_of(&[-0.5, -0.3, 0.1, 0.3, 0.5]);
        assert_eq!(trend.trend, Trend::Improving);
        assert!(trend.first_half_avg < trend.second_half_avg);
        assert!((trend.first_half_avg + 0.4).abs() < 1e-9);
        assert_eq!(
            trend.description,
            "Started negative → Shifted positive (improved from -0.40 to 0.30)"
        );
    }

    #[test]
    fn improving_from_neutral_start() {
        let trend = trend_of(&[0.0, 0.0, 0.5, 0.5]);
        assert_eq!(trend.trend, Trend::Improving);
        assert_eq!(
            trend.description,
            "Became increasingly positive (improved from 0.00 to 0.50)"
        );
    }

    #[test]
    fn declining_descriptions() {
        let trend = trend_of(&[0.6, 0.4, -0.3, -0.5]);
        assert_eq!(trend.trend, Trend::Declining);
        assert_eq!(
            trend.description,
            "Started positive/neutral → Shifted negative (declined from 0.50 to -0.40)"
        );

        let trend = trend_of(&[0.8, 0.2]);
        assert_eq!(trend.trend, Trend::Declining);
        assert_eq!(trend.description, "Became less positive (declined from 0.80 to 0.20)");
    }

    #[test]
    fn stable_within_threshold() {
        let trend = trend_of(&[0.2, 0.3, 0.2, 0.25]);
        assert_eq!(trend.trend, Trend::Stable);
        assert_eq!(trend.description, "Remained relatively stable (around 0.25)");
    }

    #[test]
    fn fewer_than_two_scores_is_insufficient() {
        for scores in [vec![], vec![0.4]] {
            let trend = trend_of(&scores);
            assert_eq!(trend.trend, Trend::InsufficientData);
            assert_eq!(trend.description, "Not enough messages to analyze trend");
            assert!(trend.progression.is_empty());
            assert!(trend.key_moments.is_empty());
            assert_eq!(trend.volatility, 0.0);
        }
    }

    #[test]
    fn odd_length_puts_middle_in_second_half() {
        let trend = trend_of(&[0.0, 0.3, 0.3]);
        assert_eq!(trend.first_half_avg, 0.0);
        assert!((trend.second_half_avg - 0.3).abs() < 1e-9);
    }

    #[test]
    fn progression_tracks_cumulative_average() {
        let trend = trend_of(&[0.2, 0.4, -0.3]);
        let averages: Vec<f64> = trend.progression.iter().map(|p| p.cumulative_avg).collect();
        assert!((averages[0] - 0.2).abs() < 1e-9);
        assert!((averages[1] - 0.3).abs() < 1e-9);
        assert!((averages[2] - 0.1).abs() < 1e-9);
        assert_eq!(trend.progression[2].message_index, 3);
        assert_eq!(trend.progression[2].label, Negative);
    }

    #[test]
    fn key_moments_are_flagged_in_order() {
        let trend = trend_of(&[0.1, 0.2, -0.6, 0.3, 0.8]);
        let indices: Vec<usize> = trend.key_moments.iter().map(|m| m.message_index()).collect();
        assert_eq!(indices, vec![3, 4, 5, 5]);

        match &trend.key_moments[0] {
            KeyMoment::SignificantShift { direction, from_label, to_label, magnitude, .. } => {
                assert_eq!(*direction, ShiftDirection::Negative);
                assert_eq!(*from_label, Positive);
                assert_eq!(*to_label, Negative);
                assert!((magnitude - 0.8).abs() < 1e-9);
            }
            other => panic!("unexpected moment {:?}", other),
        }
        assert!(trend.key_moments[2].is_significant_shift());
        assert!(matches!(
            trend.key_moments[3],
            KeyMoment::ExtremeSentiment { message_index: 5, sentiment: Positive, .. }
        ));
        assert_eq!(trend.significant_shift_count(), 3);
    }

    #[test]
    fn extreme_first_message_is_not_a_moment() {
        let moments = key_moments(&[0.9, 0.85], &[Positive, Positive]);
        assert_eq!(moments.len(), 1);
        assert_eq!(moments[0].message_index(), 2);
    }

    #[test]
    fn mismatched_lengths_are_zipped() {
        let trend = analyze(&[0.1, 0.2, 0.3], &[Positive, Positive]);
        assert_eq!(trend.progression.len(), 2);
        assert!((trend.second_half_avg - 0.2).abs() < 1e-9);
    }

    #[test]
    fn volatility_orders_sequences() {
        assert_eq!(volatility(&[0.4; 5]), 0.0);
        assert_eq!(volatility(&[0.4]), 0.0);
        assert!(
            volatility(&[0.8, -0.7, 0.6, -0.5, 0.4]) > volatility(&[0.1, 0.0, 0.1, 0.0, 0.1])
        );
        assert!((volatility(&[1.0, -1.0]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_moments_with_type_tag() {
        let trend = trend_of(&[0.0, 0.9]);
        let json = serde_json::to_value(&trend).unwrap();
        assert_eq!(json["trend"], "improving");
        assert_eq!(json["key_moments"][0]["type"], "significant_shift");
        assert_eq!(json["key_moments"][0]["direction"], "positive");
        assert_eq!(json["key_moments"][1]["type"], "extreme_sentiment");
        assert_eq!(json["progression"][1]["message_index"], 2);
    }

    proptest! {
        #[test]
        fn constant_sequences_have_zero_volatility(value in -1.0f64..=1.0, len in 2usize..20) {
            let scores = vec![value; len];
            prop_assert!(volatility(&scores).abs() < 1e-9);
        }

        #[test]
        fn progression_covers_every_message(scores in proptest::collection::vec(-1.0f64..=1.0, 2..30)) {
            let trend = trend_of(&scores);
            prop_assert_eq!(trend.progression.len(), scores.len());
            prop_assert!(trend.volatility >= 0.0);
            prop_assert!(trend.key_moments.iter().all(|m| m.message_index() >= 2));
        }
    }
}
