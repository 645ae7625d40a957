mod cli;
mod render;
mod repl;

use banter_ai::{ChatConfig, CompletionClient, Session};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root — two levels up from crates/banter-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("banter=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "banter=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("banter v{} starting", env!("CARGO_PKG_VERSION"));

    // Missing credential aborts startup; everything later is recoverable.
    let config = match ChatConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("error: {e}").red());
            std::process::exit(1);
        }
    };

    let client = CompletionClient::new(config);
    let mut session = Session::new(&args.model).with_system_instruction(&args.system);
    tracing::info!("session ready (model: {})", args.model);

    // One-shot mode: send the positional prompt and exit.
    if let Some(prompt) = args.prompt {
        let prompt = prompt.trim().to_string();
        if prompt.is_empty() {
            eprintln!("{}", "error: prompt is empty".red());
            std::process::exit(1);
        }
        match session.submit(&client, prompt).await {
            Ok(reply) => render::print_markdown(&reply),
            Err(e) => {
                eprintln!("{}", format!("error: {e}").red());
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Chatting with {} (type `exit` to quit)", args.model);
    let mut repl = repl::Repl::new(session, client);
    if let Err(e) = repl.run().await {
        tracing::error!("stdin read failed: {e}");
    }
    tracing::info!("session ended ({} turns)", repl.session().turns().len());
}
