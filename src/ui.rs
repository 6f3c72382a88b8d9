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

use colored::*;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::report::ConversationReport;
use crate::types::{Emotion, SentimentLabel, SentimentResult};

pub struct TerminalUI {
    show_scores: bool,
}

impl TerminalUI {
    pub fn new(config: &Config) -> Self {
        // colored reads this globally
        colored::control::set_override(config.display.use_colors);
        Self {
            show_scores: config.display.show_scores,
        }
    }

    pub fn print_welcome(&self, bot_name: &str) {
        println!("{}", "=".repeat(60).cyan());
        println!("{}", "=== Sentiment Analysis Chatbot ===".cyan().bold());
        println!("{}", "=".repeat(60).cyan());
        println!();
        println!(
            "{}",
            format!("Bot: Hello! I'm {}. I'm here to chat with you.", bot_name).green()
        );
        println!(
            "{}",
            "     Type 'quit', 'exit', or 'bye' to end the conversation.".yellow()
        );
        println!();
    }

    pub fn print_prompt(&self) {
        print!("{}", "You: ".blue());
        let _ = std::io::stdout().flush();
    }

    pub fn print_sentiment(&self, sentiment: &SentimentResult) {
        let line = sentiment_indicator(sentiment, self.show_scores);
        println!("{}", line.color(label_color(sentiment.label)));
    }

    pub fn print_bot_reply(&self, reply: &str) {
        println!("{}", format!("Bot: {}", reply).green());
        println!();
    }

    pub fn print_error(&self, message: &str) {
        println!("{}", format!("Error: {}", message).red());
    }

    pub fn print_saved(&self, what: &str, path: &Path) {
        println!("{}", format!("💾 {} saved to: {}", what, path.display()).cyan());
    }

    pub fn print_report(&self, report: &ConversationReport) {
        println!();
        println!("{}", "=".repeat(60).cyan());
        println!("{}", "=== Conversation Analysis ===".cyan().bold());
        println!("{}", "=".repeat(60).cyan());
        println!();

        if report.total_messages == 0 {
            println!("{}", "No messages to analyze.".yellow());
            return;
        }

        println!("{}", format!("📊 Total Messages: {}", report.total_messages).cyan());
        println!("{}", format!("⏱️  Duration: {}", report.duration()).cyan());
        println!();

        if let Some(trend) = &report.trend {
            println!("{}", format!("📈 Sentiment Trend: {}", trend.description).magenta());
            println!();
        }

        let overall = report.summary.overall_sentiment;
        println!(
            "{}",
            format!("⚖️  Overall Sentiment: {}", overall)
                .color(label_color(overall))
                .bold()
        );
        println!("{}", format!("   {}", report.summary.reasoning).white());
        println!();

        if let Some(emotions) = &report.emotions {
            println!("{}", "😊 Emotion Analysis:".magenta());
            println!(
                "{}",
                format!(
                    "   Dominant Emotion: {} {}",
                    emotions.dominant_emotion.title(),
                    emotions.dominant_emotion.emoji()
                )
                .white()
            );
            if !emotions.emotion_distribution.is_empty() {
                let distribution: Vec<String> = emotions
                    .emotion_distribution
                    .iter()
                    .filter(|(_, count)| **count > 0)
                    .map(|(emotion, count)| format!("{}: {}", emotion.title(), count))
                    .collect();
                println!("{}", format!("   Distribution: {}", distribution.join(", ")).white());
            }
            println!();
        }

        if !report.insights.is_empty() {
            println!("{}", "🔍 Key Insights:".cyan());
            for insight in &report.insights {
                println!("{}", format!("   - {}", insight).white());
            }
            println!();
        }
    }

    pub fn print_status(&self, config: &Config) {
        println!("{}", "🧭 Sentiment Chatbot Status".cyan().bold());
        println!("{}", "=".repeat(40).bright_black());
        println!("{} {}", "Analyzer:".blue(), config.analysis.analyzer);
        println!(
            "{} {} ({})",
            "Bot:".blue(),
            config.chatbot.name,
            config.chatbot.personality
        );
        println!("{} {}", "Real-time sentiment:".blue(), on_off(config.analysis.real_time_sentiment));
        println!("{} {}", "Trend analysis:".blue(), on_off(config.analysis.trend_analysis));
        println!("{} {}", "Emotion detection:".blue(), on_off(config.analysis.emotion_detection));
        println!("{} {}", "Save conversations:".blue(), on_off(config.storage.save_conversations));
        println!("{} {}", "Export reports:".blue(), on_off(config.storage.export_reports));
        println!("{} {}", "Data directory:".blue(), config.storage.data_dir.display());
        println!("{} {}", "Log directory:".blue(), config.storage.log_dir.display());
        println!("{} {}", "Log level:".blue(), config.log_level);
    }

    pub fn print_shutdown(&self) {
        println!("{}", "Thank you for using Sentiment Chatbot! 👋".cyan().bold());
    }
}

fn on_off(enabled: bool) -> ColoredString {
    if enabled {
        "enabled".green()
    } else {
        "disabled".bright_black()
    }
}

fn label_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::Yellow,
    }
}

/// "💭 Sentiment: Positive +0.64 | Emotion: 😊 Joy", uncolored.
pub fn sentiment_indicator(sentiment: &SentimentResult, show_scores: bool) -> String {
    let mut line = format!("💭 Sentiment: {}", sentiment.label);

    if show_scores {
        line.push_str(&format!(" {:+.2}", sentiment.score));
    }

    if let Some(emotion) = &sentiment.emotion {
        if emotion.primary_emotion != Emotion::Neutral {
            line.push_str(&format!(
                " | Emotion: {} {}",
                emotion.primary_emotion.emoji(),
                emotion.primary_emotion.title()
            ));
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmotionResult;

    #[test]
    fn indicator_with_score_and_emotion() {
        let sentiment = SentimentResult {
            score: 0.64,
            label: SentimentLabel::Positive,
            confidence: 0.64,
            ..SentimentResult::neutral()
        }
        .with_emotion(EmotionResult {
            primary_emotion: Emotion::Joy,
            emotions: [(Emotion::Joy, 0.125)].into_iter().collect(),
            confidence: 0.125,
        });

        assert_eq!(
            sentiment_indicator(&sentiment, true),
            "💭 Sentiment: Positive +0.64 | Emotion: 😊 Joy"
        );
    }

    #[test]
    fn indicator_hides_scores_and_neutral_emotion() {
        let sentiment = SentimentResult::neutral().with_emotion(EmotionResult::default());
        assert_eq!(sentiment_indicator(&sentiment, false), "💭 Sentiment: Neutral");
    }
}
