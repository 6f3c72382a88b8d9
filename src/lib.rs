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

pub mod analysis;
pub mod chatbot;
pub mod config;
pub mod conversation;
pub mod report;
pub mod session;
pub mod store;
pub mod types;
pub mod ui;
pub mod utils;

pub use analysis::{EmotionDetector, ScorerKind, SentimentEngine, SentimentScorer};
pub use config::Config;
pub use conversation::{Conversation, Message, Sender};
pub use report::{ConversationReport, ReportOptions};
pub use session::{ChatSession, ChatTurn, SessionOptions, TurnError};
pub use store::{ConversationStore, InMemoryConversationStore};
pub use types::*;
