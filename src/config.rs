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

use anyhow::{Context, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::analysis::ScorerKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub analyzer: ScorerKind,
    pub real_time_sentiment: bool,
    pub trend_analysis: bool,
    pub emotion_detection: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    pub name: String,
    pub personality: String,
    pub max_message_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub use_colors: bool,
    pub show_scores: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub save_conversations: bool,
    pub export_reports: bool,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub chatbot: ChatbotConfig,
    pub display: DisplayConfig,
    pub storage: StorageConfig,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok()).context("Invalid configuration in environment")
    }

    /// Build a config from any key lookup; `load` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, default: bool| -> Result<bool, ConfigError> {
            match lookup(key) {
                Some(value) => parse_bool(key, &value),
                None => Ok(default),
            }
        };

        // Analysis configuration
        let analyzer = ScorerKind::parse_or_default(
            &lookup("SENTIMENT_ANALYZER").unwrap_or_else(|| "vader".to_string()),
        );

        let analysis = AnalysisConfig {
            analyzer,
            real_time_sentiment: flag("REAL_TIME_SENTIMENT", true)?,
            trend_analysis: flag("TREND_ANALYSIS", true)?,
            emotion_detection: flag("EMOTION_DETECTION", true)?,
        };

        // Chatbot persona
        let max_message_length = lookup("MAX_MESSAGE_LENGTH")
            .unwrap_or_else(|| "10000".to_string())
            .parse::<usize>()
            .unwrap_or(10000);

        let chatbot = ChatbotConfig {
            name: lookup("BOT_NAME").unwrap_or_else(|| "Assistant".to_string()),
            personality: lookup("BOT_PERSONALITY").unwrap_or_else(|| "helpful".to_string()),
            max_message_length,
        };

        let display = DisplayConfig {
            use_colors: flag("USE_COLORS", true)?,
            show_scores: flag("SHOW_SCORES", true)?,
        };

        // Storage locations
        let base_dir = home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".sentiment-chatbot");

        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join("data"));

        let log_dir = lookup("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join("logs"));

        let storage = StorageConfig {
            save_conversations: flag("SAVE_CONVERSATIONS", true)?,
            export_reports: flag("EXPORT_REPORTS", false)?,
            data_dir,
            log_dir,
        };

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase();

        Ok(Config {
            analysis,
            chatbot,
            display,
            storage,
            log_level,
        })
    }

    pub fn conversation_file(&self, conversation_id: &str) -> PathBuf {
        self.storage.data_dir.join(format!("{}.json", conversation_id))
    }

    pub fn report_file(&self, conversation_id: &str) -> PathBuf {
        self.storage.data_dir.join(format!("report_{}.txt", conversation_id))
    }
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected true/false, 1/0, yes/no or on/off".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.analysis.analyzer, ScorerKind::Vader);
        assert!(config.analysis.real_time_sentiment);
        assert!(config.analysis.trend_analysis);
        assert!(config.analysis.emotion_detection);
        assert_eq!(config.chatbot.name, "Assistant");
        assert_eq!(config.chatbot.personality, "helpful");
        assert_eq!(config.chatbot.max_message_length, 10000);
        assert!(config.display.use_colors);
        assert!(config.storage.save_conversations);
        assert!(!config.storage.export_reports);
        assert!(config.storage.data_dir.ends_with(".sentiment-chatbot/data"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn output_files_live_in_data_dir() {
        let config = config_from(&[("DATA_DIR", "/tmp/chats")]).unwrap();
        assert_eq!(
            config.conversation_file("chat_20240101_120000_deadbeef"),
            PathBuf::from("/tmp/chats/chat_20240101_120000_deadbeef.json")
        );
        assert_eq!(
            config.report_file("chat_20240101_120000_deadbeef"),
            PathBuf::from("/tmp/chats/report_chat_20240101_120000_deadbeef.txt")
        );
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("SENTIMENT_ANALYZER", "textblob"),
            ("BOT_NAME", "Sunny"),
            ("EMOTION_DETECTION", "off"),
            ("EXPORT_REPORTS", "YES"),
            ("DATA_DIR", "/var/lib/chatbot"),
            ("MAX_MESSAGE_LENGTH", "500"),
        ])
        .unwrap();
        assert_eq!(config.analysis.analyzer, ScorerKind::Lexicon);
        assert_eq!(config.chatbot.name, "Sunny");
        assert!(!config.analysis.emotion_detection);
        assert!(config.storage.export_reports);
        assert_eq!(
            config.report_file("chat_1"),
            PathBuf::from("/var/lib/chatbot/report_chat_1.txt")
        );
        assert_eq!(config.chatbot.max_message_length, 500);
    }

    #[test]
    fn unknown_analyzer_falls_back() {
        let config = config_from(&[("SENTIMENT_ANALYZER", "transformer")]).unwrap();
        assert_eq!(config.analysis.analyzer, ScorerKind::Vader);
    }

    #[test]
    fn bad_boolean_is_an_error() {
        let err = config_from(&[("USE_COLORS", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("USE_COLORS"));
    }

    #[test]
    fn bad_number_uses_default() {
        let config = config_from(&[("MAX_MESSAGE_LENGTH", "lots")]).unwrap();
        assert_eq!(config.chatbot.max_message_length, 10000);
    }
}
