use banter_ai::config::{DEFAULT_MODEL, DEFAULT_SYSTEM_INSTRUCTION};
use clap::Parser;

/// banter — a minimal terminal chat client for hosted LLMs.
#[derive(Parser, Debug)]
#[command(name = "banter", version, about)]
pub struct Args {
    /// Prompt to send once; without it an interactive loop starts.
    pub prompt: Option<String>,

    /// Model identifier to request completions from.
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// System instruction seeded as the first turn of the conversation.
    #[arg(short = 's', long, default_value = DEFAULT_SYSTEM_INSTRUCTION)]
    pub system: String,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
