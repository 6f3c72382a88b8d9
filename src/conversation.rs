/*
 * Sentiment Chatbot CLI - Conversation Model
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

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::analysis::EmotionSample;
use crate::types::{MessageSentiment, SentimentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub sentiment: Option<SentimentResult>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            sentiment: None,
        }
    }

    pub fn user(text: impl Into<String>, sentiment: Option<SentimentResult>) -> Self {
        Self {
            sentiment,
            ..Self::new(text, Sender::User)
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// On-disk form; derived counters are written for readers but ignored on load.
#[derive(Serialize)]
struct SavedConversation<'a> {
    #[serde(flatten)]
    conversation: &'a Conversation,
    duration_seconds: f64,
    message_count: usize,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_id(generate_id())
    }

    pub fn with_id(conversation_id: impl Into<String>) -> Self {
        let conversation_id = conversation_id.into();
        tracing::info!("Conversation {} initialized", conversation_id);
        Self {
            conversation_id,
            start_time: Utc::now(),
            end_time: None,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: Message) {
        tracing::debug!(
            "Added {} message: {}...",
            message.sender,
            message.text.chars().take(50).collect::<String>()
        );
        self.messages.push(message);
    }

    pub fn user_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.sender == Sender::User)
    }

    pub fn bot_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.sender == Sender::Bot)
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn user_message_count(&self) -> usize {
        self.user_messages().count()
    }

    pub fn end_conversation(&mut self) {
        self.end_time = Some(Utc::now());
        tracing::info!("Conversation {} ended", self.conversation_id);
    }

    pub fn is_ended(&self) -> bool {
        self.end_time.is_some()
    }

    /// Seconds from start to end, or to now while the conversation is open.
    pub fn duration_seconds(&self) -> f64 {
        let end = self.end_time.unwrap_or_else(Utc::now);
        (end - self.start_time).num_milliseconds() as f64 / 1000.0
    }

    /// `{score, label}` per scored user message, chronological.
    pub fn sentiment_payload(&self) -> Vec<MessageSentiment> {
        self.user_messages()
            .filter_map(|m| m.sentiment.as_ref().map(MessageSentiment::from))
            .collect()
    }

    /// Scored user messages as emotion samples.
    pub fn emotion_payload(&self) -> Vec<EmotionSample<'_>> {
        self.user_messages()
            .filter_map(|m| {
                m.sentiment.as_ref().map(|s| EmotionSample {
                    text: &m.text,
                    score: Some(s.score),
                })
            })
            .collect()
    }

    pub fn user_texts(&self) -> Vec<&str> {
        self.user_messages().map(|m| m.text.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        let saved = SavedConversation {
            conversation: self,
            duration_seconds: self.duration_seconds(),
            message_count: self.message_count(),
        };
        serde_json::to_string_pretty(&saved).context("Failed to serialize conversation")
    }

    /// Write the conversation as pretty JSON, creating parent directories.
    /// Without an explicit path the file lands in `data_dir/<id>.json`.
    pub fn save_to_json(&self, path: Option<&Path>, data_dir: &Path) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => data_dir.join(format!("{}.json", self.conversation_id)),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write conversation to {}", path.display()))?;

        tracing::info!("Conversation saved to {}", path.display());
        Ok(path)
    }

    pub fn load_from_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read conversation file {}", path.display()))?;
        let conversation: Conversation = serde_json::from_str(&content)
            .with_context(|| format!("Invalid conversation JSON in {}", path.display()))?;

        tracing::info!("Conversation loaded from {}", path.display());
        Ok(conversation)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// `chat_YYYYmmdd_HHMMSS_<8 hex>`
pub fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("chat_{}_{}", Local::now().format("%Y%m%d_%H%M%S"), &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;
    use tempfile::TempDir;

    fn scored(score: f64, label: SentimentLabel) -> SentimentResult {
        SentimentResult {
            score,
            label,
            confidence: score.abs(),
            ..SentimentResult::neutral()
        }
    }

    #[test]
    fn id_format() {
        let id = generate_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "chat");
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 6);
        assert_eq!(parts[3].len(), 8);
        assert!(parts[3].chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(generate_id(), id);
    }

    #[test]
    fn payloads_skip_bot_and_unscored_messages() {
        let mut conversation = Conversation::with_id("chat_test");
        conversation.add_message(Message::user("great", Some(scored(0.6, SentimentLabel::Positive))));
        conversation.add_message(Message::bot("Glad to hear it"));
        conversation.add_message(Message::user("hmm", None));
        conversation.add_message(Message::user("awful", Some(scored(-0.7, SentimentLabel::Negative))));

        assert_eq!(conversation.message_count(), 4);
        assert_eq!(conversation.user_message_count(), 3);
        assert_eq!(conversation.bot_messages().count(), 1);

        let payload = conversation.sentiment_payload();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[1].label, SentimentLabel::Negative);

        let samples = conversation.emotion_payload();
        assert_eq!(samples[0].text, "great");
        assert_eq!(samples[1].score, Some(-0.7));
        assert_eq!(conversation.user_texts(), vec!["great", "hmm", "awful"]);
    }

    #[test]
    fn duration_uses_end_time() {
        let mut conversation = Conversation::with_id("chat_test");
        conversation.end_conversation();
        conversation.end_time = Some(conversation.start_time + chrono::Duration::seconds(90));
        assert!(conversation.is_ended());
        assert_eq!(conversation.duration_seconds(), 90.0);
    }

    #[test]
    fn json_round_trip_through_data_dir() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("nested").join("data");

        let mut conversation = Conversation::new();
        conversation.add_message(Message::user("I love this", Some(scored(0.64, SentimentLabel::Positive))));
        conversation.add_message(Message::bot("Wonderful!"));
        conversation.end_conversation();

        let path = conversation.save_to_json(None, &data_dir).unwrap();
        assert_eq!(path, data_dir.join(format!("{}.json", conversation.conversation_id)));

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["message_count"], 2);
        assert!(raw["duration_seconds"].is_number());
        assert_eq!(raw["messages"][0]["sender"], "user");
        assert_eq!(raw["messages"][0]["sentiment"]["label"], "Positive");

        let loaded = Conversation::load_from_json(&path).unwrap();
        assert_eq!(loaded, conversation);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Conversation::load_from_json(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read conversation file"));
    }
}
