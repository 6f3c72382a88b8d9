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
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use sentiment_chatbot::chatbot::Chatbot;
use sentiment_chatbot::config::Config;
use sentiment_chatbot::ui::TerminalUI;
use sentiment_chatbot::{
    ChatSession, Conversation, ConversationReport, ConversationStore, EmotionDetector,
    InMemoryConversationStore, ReportOptions, ScorerKind, SentimentEngine, SessionOptions,
    TurnError,
};

/// Sentiment Chatbot CLI - chat with sentiment, emotion and trend analysis
#[derive(Parser)]
#[command(name = "sentiment-chatbot")]
#[command(version = "1.0.0")]
#[command(about = "Terminal chatbot with rule-augmented sentiment and conversation-trend analysis")]
#[command(long_about = "
Sentiment Chatbot CLI - Rust Edition

Every message you type is scored (VADER or a weighted word list), corrected
for comparative phrasing such as \"the last one was better than this\", and
tagged with an emotion. When the conversation ends you get:
• Overall sentiment with reasoning
• Mood trend, key moments and volatility
• Dominant emotion and emotion distribution
• Short insights

Type 'quit', 'exit' or 'bye' to end a chat.
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the configured analyzer (vader, lexicon/textblob)
    #[arg(long, global = true)]
    analyzer: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat (default)
    Chat,
    /// Score a single message
    Analyze {
        /// Message text; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze a saved conversation JSON file
    Report {
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(name) = &cli.analyzer {
        config.analysis.analyzer = ScorerKind::parse_or_default(name);
    }

    setup_logging(&config, cli.verbose)?;

    match cli.command {
        Some(Commands::Analyze { text, json }) => analyze_message(&config, &text.join(" "), json),
        Some(Commands::Report { file, json }) => report_file(&config, &file, json),
        Some(Commands::Status) => {
            TerminalUI::new(&config).print_status(&config);
            Ok(())
        }
        Some(Commands::Chat) | None => run_chat(&config).await,
    }
}

async fn run_chat(config: &Config) -> Result<()> {
    let ui = TerminalUI::new(config);
    println!(
        "📝 Logs are being saved to: {}",
        config.storage.log_dir.join("sentiment-chatbot.log").display()
    );
    println!();

    let store: Arc<dyn ConversationStore> = Arc::new(InMemoryConversationStore::new());
    let engine = Arc::new(SentimentEngine::new(config.analysis.analyzer));
    let chatbot = Chatbot::new(&config.chatbot.name, &config.chatbot.personality);
    let mut session =
        ChatSession::start(store, engine, chatbot, SessionOptions::from(config)).await;

    ui.print_welcome(session.bot_name());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        ui.print_prompt();

        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read from stdin")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            println!();
            break;
        };

        match session.handle_user_message(&line).await {
            Ok(turn) => {
                if let Some(sentiment) = &turn.sentiment {
                    ui.print_sentiment(sentiment);
                }
                match &turn.reply {
                    Some(reply) => ui.print_bot_reply(reply),
                    None => break,
                }
            }
            Err(TurnError::InvalidInput(message)) => ui.print_error(&message),
            Err(e) => {
                tracing::error!("Error in chat loop: {}", e);
                return Err(e.into());
            }
        }
    }

    let (conversation, report) = session.finish().await?;
    ui.print_report(&report);

    if report.total_messages > 0 {
        if config.storage.save_conversations {
            let target = config.conversation_file(&conversation.conversation_id);
            let path = conversation.save_to_json(Some(target.as_path()), &config.storage.data_dir)?;
            ui.print_saved("Conversation", &path);
        }
        if config.storage.export_reports {
            let path = report.export_text(
                &conversation,
                &config.report_file(&conversation.conversation_id),
            )?;
            ui.print_saved("Detailed report", &path);
        }
    }

    ui.print_shutdown();
    Ok(())
}

fn analyze_message(config: &Config, text: &str, json: bool) -> Result<()> {
    let engine = SentimentEngine::new(config.analysis.analyzer);
    let result = if config.analysis.emotion_detection {
        engine.analyze_with_emotion(text, &EmotionDetector::new())
    } else {
        engine.analyze_text(text)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let ui = TerminalUI::new(config);
    ui.print_sentiment(&result);
    println!("   Analyzer: {}", engine.analyzer_name());
    println!("   Confidence: {:.3}", result.confidence);
    if result.adjusted_for_comparison {
        println!("   Adjusted for comparative phrasing");
    }
    for (name, value) in &result.components {
        println!("   {}: {:.3}", name, value);
    }
    Ok(())
}

fn report_file(config: &Config, file: &Path, json: bool) -> Result<()> {
    let conversation = Conversation::load_from_json(file)?;
    let engine = SentimentEngine::new(config.analysis.analyzer);
    let report = ConversationReport::build(
        &conversation,
        &engine,
        &EmotionDetector::new(),
        ReportOptions::from(&config.analysis),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        TerminalUI::new(config).print_report(&report);
    }
    Ok(())
}

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    std::fs::create_dir_all(&config.storage.log_dir).context("Failed to create log directory")?;

    // Create rolling file appender (daily rotation)
    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &config.storage.log_dir, "sentiment-chatbot.log");

    // - File: configured level for this crate
    // - Stderr: warnings only, unless --verbose
    let stderr_level = if verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_filter(
                    EnvFilter::from_default_env()
                        .add_directive(format!("sentiment_chatbot={}", config.log_level).parse()?),
                ),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.display.use_colors)
                .with_target(false)
                .compact()
                .with_filter(
                    EnvFilter::from_default_env()
                        .add_directive(format!("sentiment_chatbot={}", stderr_level).parse()?)
                        .add_directive(stderr_level.parse()?),
                ),
        );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::info!("Logging system initialized");
    Ok(())
}
