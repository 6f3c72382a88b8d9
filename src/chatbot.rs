/*
 * Sentiment Chatbot CLI - Chat Persona
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

use rand::seq::SliceRandom;
use std::collections::VecDeque;

use crate::types::{SentimentLabel, SentimentResult};

const CONTEXT_SIZE: usize = 10;
const EXIT_COMMANDS: &[&str] = &["quit", "exit", "bye", "goodbye", "end", "stop"];

const EXIT_REPLIES: &[&str] = &[
    "Thank you for chatting! Have a great day!",
    "It was nice talking with you. Goodbye!",
    "Thanks for the conversation. Take care!",
    "Goodbye! Feel free to come back anytime.",
];

const VERY_NEGATIVE_REPLIES: &[&str] = &[
    "I'm really sorry to hear that. I understand this is frustrating. Can you tell me more about what went wrong?",
    "I sense you're quite upset about this. I want to help resolve this. What can I do?",
    "I apologize for the negative experience. Let's work together to fix this. What happened?",
    "I'm sorry this has been disappointing. Your feedback is important to us. Can you share more details?",
];

const NEGATIVE_REPLIES: &[&str] = &[
    "I understand your concern. Let me help address this issue.",
    "I'm sorry to hear that. Can you provide more details so I can assist you better?",
    "I appreciate you sharing this. Let's work on finding a solution together.",
    "Thank you for your feedback. I'll make sure this is addressed properly.",
];

const VERY_POSITIVE_REPLIES: &[&str] = &[
    "I'm so glad to hear that! It makes me happy to know you're satisfied.",
    "That's wonderful! I'm thrilled that you're having a positive experience.",
    "Great to hear! I'm delighted that things are working well for you.",
    "That's fantastic! Thank you for the positive feedback.",
];

const POSITIVE_REPLIES: &[&str] = &[
    "I'm glad to hear that! Is there anything else I can help with?",
    "That's good to know! How else can I assist you today?",
    "Great! I'm happy to help. What would you like to know more about?",
    "Wonderful! Feel free to ask if you need anything else.",
];

const QUESTION_REPLIES: &[&str] = &[
    "That's an interesting question. Let me help you with that.",
    "I'd be happy to help answer that. Can you provide a bit more context?",
    "Good question! Let me think about how best to assist you.",
    "I understand you're asking about that. Here's what I can tell you...",
];

const GENERIC_REPLIES: &[&str] = &[
    "I understand. Can you tell me more about that?",
    "That's interesting. How can I help you with this?",
    "I see. What would you like to know more about?",
    "Got it. Is there something specific you'd like me to help with?",
    "I'm here to help. What can I do for you?",
    "Thanks for sharing. How can I assist you further?",
];

const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const THANKS_WORDS: &[&str] = &["thank", "thanks", "appreciate"];

const GREETING_REPLY: &str = "Hello! I'm here to help. How can I assist you today?";
const THANKS_REPLY: &str = "You're welcome! I'm here if you need anything else.";

pub fn is_exit_command(message: &str) -> bool {
    let normalized = message.trim().to_lowercase();
    EXIT_COMMANDS.contains(&normalized.as_str())
}

/// Canned-reply persona that acknowledges the user's sentiment.
pub struct Chatbot {
    pub name: String,
    pub personality: String,
    context: VecDeque<String>,
}

impl Chatbot {
    pub fn new(name: impl Into<String>, personality: impl Into<String>) -> Self {
        let name = name.into();
        let personality = personality.into();
        tracing::info!("Chatbot {} initialized with {} personality", name, personality);
        Self {
            name,
            personality,
            context: VecDeque::with_capacity(CONTEXT_SIZE),
        }
    }

    pub fn respond(&mut self, message: &str, sentiment: Option<&SentimentResult>) -> String {
        self.context.push_back(message.to_string());
        while self.context.len() > CONTEXT_SIZE {
            self.context.pop_front();
        }

        if is_exit_command(message) {
            return pick(EXIT_REPLIES);
        }

        match sentiment {
            Some(result) => self.empathetic_reply(message, result),
            None => default_reply(message),
        }
    }

    fn empathetic_reply(&self, message: &str, sentiment: &SentimentResult) -> String {
        match sentiment.label {
            SentimentLabel::Negative if sentiment.score < -0.5 => pick(VERY_NEGATIVE_REPLIES),
            SentimentLabel::Negative => pick(NEGATIVE_REPLIES),
            SentimentLabel::Positive if sentiment.score > 0.5 => pick(VERY_POSITIVE_REPLIES),
            SentimentLabel::Positive => pick(POSITIVE_REPLIES),
            SentimentLabel::Neutral => default_reply(message),
        }
    }

    /// Most recent user messages, oldest first.
    pub fn context(&self) -> impl Iterator<Item = &str> {
        self.context.iter().map(String::as_str)
    }

    pub fn reset_context(&mut self) {
        self.context.clear();
        tracing::debug!("Chatbot context reset");
    }
}

fn default_reply(message: &str) -> String {
    let lower = message.to_lowercase();

    if GREETING_WORDS.iter().any(|word| lower.contains(word)) {
        GREETING_REPLY.to_string()
    } else if message.contains('?') {
        pick(QUESTION_REPLIES)
    } else if THANKS_WORDS.iter().any(|word| lower.contains(word)) {
        THANKS_REPLY.to_string()
    } else {
        pick(GENERIC_REPLIES)
    }
}

fn pick(replies: &[&str]) -> String {
    replies
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("I see.")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(score: f64, label: SentimentLabel) -> SentimentResult {
        SentimentResult {
            score,
            label,
            confidence: score.abs(),
            ..SentimentResult::neutral()
        }
    }

    #[test]
    fn exit_commands_are_trimmed_and_case_insensitive() {
        assert!(is_exit_command("  QUIT "));
        assert!(is_exit_command("bye"));
        assert!(!is_exit_command("bye bye"));
        assert!(!is_exit_command("please stop that"));
    }

    #[test]
    fn replies_follow_sentiment_buckets() {
        let mut bot = Chatbot::new("Assistant", "helpful");

        let reply = bot.respond("awful", Some(&sentiment(-0.8, SentimentLabel::Negative)));
        assert!(VERY_NEGATIVE_REPLIES.contains(&reply.as_str()));

        let reply = bot.respond("meh", Some(&sentiment(-0.2, SentimentLabel::Negative)));
        assert!(NEGATIVE_REPLIES.contains(&reply.as_str()));

        let reply = bot.respond("superb", Some(&sentiment(0.9, SentimentLabel::Positive)));
        assert!(VERY_POSITIVE_REPLIES.contains(&reply.as_str()));

        let reply = bot.respond("ok good", Some(&sentiment(0.3, SentimentLabel::Positive)));
        assert!(POSITIVE_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn neutral_falls_back_to_defaults() {
        let mut bot = Chatbot::new("Assistant", "helpful");
        let neutral = sentiment(0.0, SentimentLabel::Neutral);

        assert_eq!(bot.respond("Hello there", Some(&neutral)), GREETING_REPLY);
        assert!(QUESTION_REPLIES.contains(&bot.respond("Where is it?", Some(&neutral)).as_str()));
        assert_eq!(bot.respond("I appreciate it", None), THANKS_REPLY);
        assert!(GENERIC_REPLIES.contains(&bot.respond("The order number is 42", None).as_str()));
    }

    #[test]
    fn exit_reply_wins_over_sentiment() {
        let mut bot = Chatbot::new("Assistant", "helpful");
        let reply = bot.respond("goodbye", Some(&sentiment(0.9, SentimentLabel::Positive)));
        assert!(EXIT_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn context_keeps_last_ten_messages() {
        let mut bot = Chatbot::new("Assistant", "helpful");
        for i in 0..15 {
            bot.respond(&format!("message {}", i), None);
        }
        let context: Vec<&str> = bot.context().collect();
        assert_eq!(context.len(), 10);
        assert_eq!(context[0], "message 5");
        assert_eq!(context[9], "message 14");

        bot.reset_context();
        assert_eq!(bot.context().count(), 0);
    }
}
