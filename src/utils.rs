/*
 * Sentiment Chatbot CLI - Input Utilities
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

/// Check user input before it is scored. Length is counted in characters.
pub fn validate_text(text: &str, max_length: usize) -> Result<(), String> {
    if text.is_empty() {
        return Err("Text cannot be empty".to_string());
    }

    if text.chars().count() > max_length {
        return Err(format!(
            "Text exceeds maximum length of {} characters",
            max_length
        ));
    }

    if text.trim().is_empty() {
        return Err("Text cannot be only whitespace".to_string());
    }

    Ok(())
}

/// Collapse whitespace runs to single spaces and drop control characters.
pub fn sanitize_text(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.1} seconds", seconds)
    } else if seconds < 3600.0 {
        format!("{:.1} minutes", seconds / 60.0)
    } else {
        format!("{:.1} hours", seconds / 3600.0)
    }
}
