/*
 * Sentiment Chatbot CLI - Chat Session
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

use std::sync::Arc;

use crate::analysis::{EmotionDetector, SentimentEngine};
use crate::chatbot::{is_exit_command, Chatbot};
use crate::config::Config;
use crate::conversation::{Conversation, Message};
use crate::report::{ConversationReport, ReportOptions};
use crate::store::ConversationStore;
use crate::types::{SentimentResult, StoreError};
use crate::utils::{sanitize_text, validate_text};

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub real_time_sentiment: bool,
    pub emotion_detection: bool,
    pub trend_analysis: bool,
    pub max_message_length: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            real_time_sentiment: true,
            emotion_detection: true,
            trend_analysis: true,
            max_message_length: 10000,
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            real_time_sentiment: config.analysis.real_time_sentiment,
            emotion_detection: config.analysis.emotion_detection,
            trend_analysis: config.analysis.trend_analysis,
            max_message_length: config.chatbot.max_message_length,
        }
    }
}

/// Outcome of one user line.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// The sanitized text that was stored
    pub text: String,
    pub sentiment: Option<SentimentResult>,
    /// `None` when the user ended the conversation
    pub reply: Option<String>,
}

impl ChatTurn {
    pub fn is_exit(&self) -> bool {
        self.reply.is_none()
    }
}

/// One live conversation: scores each user line, records it in the store
/// and answers through the persona.
pub struct ChatSession {
    conversation_id: String,
    store: Arc<dyn ConversationStore>,
    engine: Arc<SentimentEngine>,
    detector: EmotionDetector,
    chatbot: Chatbot,
    options: SessionOptions,
}

impl ChatSession {
    pub async fn start(
        store: Arc<dyn ConversationStore>,
        engine: Arc<SentimentEngine>,
        chatbot: Chatbot,
        options: SessionOptions,
    ) -> Self {
        let conversation = Conversation::new();
        let conversation_id = conversation.conversation_id.clone();
        store.put(conversation).await;

        Self {
            conversation_id,
            store,
            engine,
            detector: EmotionDetector::new(),
            chatbot,
            options,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn bot_name(&self) -> &str {
        &self.chatbot.name
    }

    pub async fn handle_user_message(&mut self, raw: &str) -> Result<ChatTurn, TurnError> {
        let trimmed = raw.trim();
        validate_text(trimmed, self.options.max_message_length).map_err(TurnError::InvalidInput)?;
        let text = sanitize_text(trimmed);
        if text.is_empty() {
            return Err(TurnError::InvalidInput(
                "Text contains no printable characters".to_string(),
            ));
        }

        let sentiment = self.options.real_time_sentiment.then(|| {
            if self.options.emotion_detection {
                self.engine.analyze_with_emotion(&text, &self.detector)
            } else {
                self.engine.analyze_text(&text)
            }
        });

        self.store
            .append_message(&self.conversation_id, Message::user(text.clone(), sentiment.clone()))
            .await?;

        if is_exit_command(&text) {
            tracing::info!("Exit command received in {}", self.conversation_id);
            return Ok(ChatTurn {
                text,
                sentiment,
                reply: None,
            });
        }

        let reply = self.chatbot.respond(&text, sentiment.as_ref());
        self.store
            .append_message(&self.conversation_id, Message::bot(reply.clone()))
            .await?;

        Ok(ChatTurn {
            text,
            sentiment,
            reply: Some(reply),
        })
    }

    /// End the conversation and analyze the final snapshot.
    pub async fn finish(&self) -> Result<(Conversation, ConversationReport), StoreError> {
        self.store.end_conversation(&self.conversation_id).await?;
        let conversation = self
            .store
            .get(&self.conversation_id)
            .await
            .ok_or_else(|| StoreError::NotFound(self.conversation_id.clone()))?;

        let options = ReportOptions {
            trend_analysis: self.options.trend_analysis,
            emotion_detection: self.options.emotion_detection,
        };
        let report = ConversationReport::build(&conversation, &self.engine, &self.detector, options);
        Ok((conversation, report))
    }
}
