// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Admin commands read from stdin while the server runs.

use std::io::BufRead;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::engine::Pipeline;
use crate::observability::messages::server::ConsoleCommand;
use crate::observability::messages::StructuredLog;

const HELP: &str = concat!(
    "Commands:\n",
    "  status  show pipeline counters\n",
    "  help    show this list\n",
    "  exit    shut the server down (alias: quit)\n",
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    Status,
    Help,
    Exit,
    Unknown(String),
}

impl AdminCommand {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let command = line.trim();
        if command.is_empty() {
            return None;
        }
        Some(match command.to_ascii_lowercase().as_str() {
            "status" => AdminCommand::Status,
            "help" => AdminCommand::Help,
            "exit" | "quit" => AdminCommand::Exit,
            _ => AdminCommand::Unknown(command.to_string()),
        })
    }
}

/// Text to print for `command`.
pub fn render(command: &AdminCommand, pipeline: &Pipeline) -> String {
    match command {
        AdminCommand::Status => match serde_json::to_string_pretty(&pipeline.stats()) {
            Ok(json) => format!("{}\n", json),
            Err(err) => format!("status unavailable: {}\n", err),
        },
        AdminCommand::Help => HELP.to_string(),
        AdminCommand::Exit => "Shutting down...\n".to_string(),
        AdminCommand::Unknown(other) => format!("Unknown command '{}'. Type 'help'.\n", other),
    }
}

/// Reads stdin on a plain thread so a pending read never holds up runtime
/// shutdown. The thread ends with the process.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (sender, receiver) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Serves console commands until `exit`, end of input or cancellation.
/// `exit` cancels `shutdown` so the accept loop stops too.
pub async fn run_console(pipeline: Arc<Pipeline>, shutdown: CancellationToken) {
    let mut lines = spawn_stdin_reader();
    loop {
        let line = tokio::select! {
            _ = shutdown.cancelled() => break,
            line = lines.recv() => line,
        };
        let Some(line) = line else { break };
        let Some(command) = AdminCommand::parse(&line) else { continue };

        ConsoleCommand { command: line.trim() }.log();
        print!("{}", render(&command, &pipeline));

        if command == AdminCommand::Exit {
            shutdown.cancel();
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(AdminCommand::parse("status\n"), Some(AdminCommand::Status));
        assert_eq!(AdminCommand::parse("  HELP "), Some(AdminCommand::Help));
        assert_eq!(AdminCommand::parse("exit"), Some(AdminCommand::Exit));
        assert_eq!(AdminCommand::parse("quit"), Some(AdminCommand::Exit));
        assert_eq!(AdminCommand::parse("   "), None);
        assert_eq!(
            AdminCommand::parse("reboot"),
            Some(AdminCommand::Unknown("reboot".to_string()))
        );
    }

    #[test]
    fn test_status_renders_pipeline_stats() {
        let pipeline = Pipeline::new();
        let output = render(&AdminCommand::Status, &pipeline);
        assert!(output.contains("\"submitted\": 0"), "{}", output);
        assert!(output.contains("\"running\": true"));

        pipeline.shutdown();
        assert!(render(&AdminCommand::Status, &pipeline).contains("\"running\": false"));
    }

    #[test]
    fn test_help_and_unknown() {
        let pipeline = Pipeline::new();
        assert!(render(&AdminCommand::Help, &pipeline).contains("status"));
        assert_eq!(
            render(&AdminCommand::Unknown("x".to_string()), &pipeline),
            "Unknown command 'x'. Type 'help'.\n"
        );
    }
}
