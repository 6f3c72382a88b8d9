/*
 * Sentiment Chatbot CLI - Transcript Analyzer
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

//! Offline analysis of a plain-text transcript, one user message per line.

use anyhow::{Context, Result};
use std::path::PathBuf;

use sentiment_chatbot::analysis::{summarize_insights, trend, EmotionDetector, EmotionSample};
use sentiment_chatbot::{MessageSentiment, ScorerKind, SentimentEngine};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let transcript = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("❌ No transcript file specified");
            eprintln!("Usage: cargo run --bin analyze_transcript <transcript.txt> [analyzer]");
            eprintln!();
            eprintln!("Each non-empty line is treated as one user message, oldest first.");
            std::process::exit(1);
        }
    };

    if !transcript.exists() {
        eprintln!("❌ Transcript file not found: {:?}", transcript);
        std::process::exit(1);
    }

    let kind = std::env::args()
        .nth(2)
        .map(|name| ScorerKind::parse_or_default(&name))
        .unwrap_or_default();

    let content = std::fs::read_to_string(&transcript)
        .with_context(|| format!("Failed to read {}", transcript.display()))?;
    let messages: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    println!("📁 File: {:?}", transcript);
    println!("🔎 Analyzer: {}", kind);
    println!();

    let engine = SentimentEngine::new(kind);
    let detector = EmotionDetector::new();
    let results: Vec<_> = messages.iter().map(|text| engine.analyze_text(text)).collect();

    for (i, (text, result)) in messages.iter().zip(&results).enumerate() {
        let marker = if result.adjusted_for_comparison { " (adjusted)" } else { "" };
        println!("  [{}] {:+.3} {:<8}{} {}", i + 1, result.score, result.label, marker, text);
    }
    println!();

    let sentiments: Vec<MessageSentiment> = results.iter().map(MessageSentiment::from).collect();
    let summary = sentiment_chatbot::analysis::aggregator::summarize(&sentiments);
    println!("⚖️  Overall: {} (average {:.3})", summary.overall_sentiment, summary.average_score);
    println!("   {}", summary.reasoning);

    let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
    let labels: Vec<_> = results.iter().map(|r| r.label).collect();
    let conversation_trend = trend::analyze(&scores, &labels);
    println!("📈 Trend: {}", conversation_trend.description);
    println!("   Volatility: {:.3}", conversation_trend.volatility);
    for moment in &conversation_trend.key_moments {
        println!("   Key moment at message {}: {}", moment.message_index(), serde_json::to_string(moment)?);
    }

    let samples: Vec<EmotionSample> = messages
        .iter()
        .zip(&results)
        .map(|(text, result)| EmotionSample {
            text: *text,
            score: Some(result.score),
        })
        .collect();
    let emotions = detector.analyze_conversation(&samples);
    println!(
        "😊 Dominant emotion: {} {}",
        emotions.dominant_emotion.title(),
        emotions.dominant_emotion.emoji()
    );

    if messages.len() > 1 {
        println!();
        println!("🔍 Insights:");
        for insight in summarize_insights(&conversation_trend, &summary) {
            println!("   - {}", insight);
        }
    }

    Ok(())
}
