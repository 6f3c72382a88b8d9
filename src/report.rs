/*
 * Sentiment Chatbot CLI - Conversation Report
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
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::analysis::{summarize_insights, trend, EmotionDetector, SentimentEngine};
use crate::config::AnalysisConfig;
use crate::conversation::Conversation;
use crate::types::{ConversationEmotions, ConversationSummary, ConversationTrend, SentimentLabel};
use crate::utils::format_duration;

/// Which optional sections a report carries.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub trend_analysis: bool,
    pub emotion_detection: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            trend_analysis: true,
            emotion_detection: true,
        }
    }
}

impl From<&AnalysisConfig> for ReportOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            trend_analysis: config.trend_analysis,
            emotion_detection: config.emotion_detection,
        }
    }
}

/// End-of-conversation analysis, recomputed from a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationReport {
    pub conversation_id: String,
    /// User messages only
    pub total_messages: usize,
    pub duration_seconds: f64,
    pub summary: ConversationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<ConversationTrend>,
    pub insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<ConversationEmotions>,
}

impl ConversationReport {
    pub fn build(
        conversation: &Conversation,
        engine: &SentimentEngine,
        detector: &EmotionDetector,
        options: ReportOptions,
    ) -> Self {
        let user_count = conversation.user_message_count();
        let summary = engine.analyze_conversation(&conversation.user_texts());

        // Trend works on the scores recorded during the chat, not a re-score
        let payload = conversation.sentiment_payload();
        let trend = (options.trend_analysis && user_count > 1 && !payload.is_empty()).then(|| {
            let scores: Vec<f64> = payload.iter().map(|m| m.score).collect();
            let labels: Vec<SentimentLabel> = payload.iter().map(|m| m.label).collect();
            trend::analyze(&scores, &labels)
        });

        let insights = trend
            .as_ref()
            .map(|t| summarize_insights(t, &summary))
            .unwrap_or_default();

        let samples = conversation.emotion_payload();
        let emotions = (options.emotion_detection && !samples.is_empty())
            .then(|| detector.analyze_conversation(&samples));

        tracing::info!(
            "Built report for {}: {} ({} user messages)",
            conversation.conversation_id,
            summary.overall_sentiment,
            user_count
        );

        Self {
            conversation_id: conversation.conversation_id.clone(),
            total_messages: user_count,
            duration_seconds: conversation.duration_seconds(),
            summary,
            trend,
            insights,
            emotions,
        }
    }

    pub fn duration(&self) -> String {
        format_duration(self.duration_seconds)
    }

    /// Plain-text report with per-message details.
    pub fn render_text(&self, conversation: &Conversation) -> Result<String> {
        let mut out = String::new();
        self.write_text(&mut out, conversation)
            .context("Failed to render report text")?;
        Ok(out)
    }

    fn write_text(&self, out: &mut impl fmt::Write, conversation: &Conversation) -> fmt::Result {
        let rule = "=".repeat(60);
        let thin = "-".repeat(60);

        writeln!(out, "{}", rule)?;
        writeln!(out, "CONVERSATION SENTIMENT ANALYSIS REPORT")?;
        writeln!(out, "{}\n", rule)?;

        writeln!(out, "Conversation ID: {}", conversation.conversation_id)?;
        writeln!(out, "Start Time: {}", conversation.start_time.to_rfc3339())?;
        writeln!(
            out,
            "End Time: {}",
            conversation
                .end_time
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "N/A".to_string())
        )?;
        writeln!(out, "Duration: {}", self.duration())?;
        writeln!(out, "Total Messages: {}\n", conversation.message_count())?;

        writeln!(out, "OVERALL SENTIMENT ANALYSIS")?;
        writeln!(out, "{}", thin)?;
        writeln!(out, "Overall Sentiment: {}", self.summary.overall_sentiment)?;
        writeln!(out, "Average Score: {:.3}", self.summary.average_score)?;
        writeln!(out, "Reasoning: {}\n", self.summary.reasoning)?;

        if let Some(trend) = &self.trend {
            writeln!(out, "TREND ANALYSIS")?;
            writeln!(out, "{}", thin)?;
            writeln!(out, "Trend: {}", trend.trend)?;
            writeln!(out, "Description: {}", trend.description)?;
            writeln!(out, "Volatility: {:.3}\n", trend.volatility)?;
        }

        writeln!(out, "MESSAGE DETAILS")?;
        writeln!(out, "{}", thin)?;
        for (i, message) in conversation.messages.iter().enumerate() {
            writeln!(
                out,
                "\n[{}] {}: {}",
                i + 1,
                message.sender.to_string().to_uppercase(),
                message.text
            )?;
            if let Some(sentiment) = &message.sentiment {
                writeln!(out, "    Sentiment: {} ({:+.3})", sentiment.label, sentiment.score)?;
            }
        }

        Ok(())
    }

    pub fn export_text(&self, conversation: &Conversation, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        std::fs::write(path, self.render_text(conversation)?)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;

        tracing::info!("Report exported to {}", path.display());
        Ok(path.to_path_buf())
    }
}
