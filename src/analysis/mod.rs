/*
 * Sentiment Chatbot CLI - Analysis Pipeline
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

//! Sentiment, emotion and conversation-trend analysis
//!
//! text -> base scorer -> comparative adjuster -> per-message result, which is
//! then fed into the emotion detector per message and into the aggregator,
//! trend analyzer and insight summarizer per conversation. Everything here is
//! synchronous and works on snapshots; nothing holds conversation state.

pub mod aggregator;
pub mod comparative;
pub mod emotion;
pub mod engine;
pub mod insights;
pub mod lexicon;
pub mod scorer;
pub mod trend;
pub mod vader;

pub use comparative::ComparativeAdjuster;
pub use emotion::{EmotionDetector, EmotionSample};
pub use engine::SentimentEngine;
pub use insights::summarize_insights;
pub use lexicon::LexiconScorer;
pub use scorer::{ScorerKind, SentimentScorer};
pub use vader::VaderScorer;
