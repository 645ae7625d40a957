//! Interactive read-eval-print loop over a conversation session.
//!
//! One blocking iteration per user line: read, submit, render. Errors are
//! printed and the loop continues; only the exit keyword or EOF ends it.

use std::io::{BufRead, Write};

use banter_ai::{ChatError, CompletionTransport, Session};
use colored::Colorize;

use crate::render;

const EXIT_KEYWORD: &str = "exit";

pub struct Repl<T: CompletionTransport> {
    session: Session,
    transport: T,
}

impl<T: CompletionTransport> Repl<T> {
    pub fn new(session: Session, transport: T) -> Self {
        Self { session, transport }
    }

    /// Run the loop against stdin until the exit keyword or EOF.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let stdin = std::io::stdin();
        self.run_from(stdin.lock()).await
    }

    /// Run the loop against any line source. Split out from `run` so the
    /// loop can be driven from a buffer in tests.
    pub async fn run_from<R: BufRead>(&mut self, mut input: R) -> std::io::Result<()> {
        loop {
            print!("{} ", "you >".bold());
            std::io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF
                break;
            }
            let line = line.trim();

            if line.eq_ignore_ascii_case(EXIT_KEYWORD) {
                break;
            }
            if line.is_empty() {
                println!("{}", "(say something, or `exit` to quit)".dimmed());
                continue;
            }

            match self.session.submit(&self.transport, line).await {
                Ok(reply) => render::print_markdown(&reply),
                Err(ChatError::EmptyReply) => {
                    println!("{}", "(empty reply, ask again)".dimmed());
                }
                Err(e) => eprintln!("{}", format!("error: {e}").red()),
            }
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
