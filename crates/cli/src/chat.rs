//! Interactive chat with one agent.

use anyhow::{bail, Context, Result};
use ar_core::Runtime;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Read prompts from stdin and print the agent's replies until EOF or
/// `exit`.
pub async fn run(runtime: &Runtime, agent_id: &str) -> Result<()> {
    let manager = runtime.manager();
    if !manager.agent_exists(agent_id).await {
        let mut ids = manager.list_agent_ids().await;
        ids.sort();
        bail!(
            "agent '{agent_id}' is not configured (available: {})",
            if ids.is_empty() { "none".to_string() } else { ids.join(", ") }
        );
    }

    println!(
        "{} {} {}",
        "Chatting with".dimmed(),
        agent_id.bold(),
        "(type 'exit' to quit)".dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "you>".green().bold());
        std::io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            println!();
            break;
        };
        let line = line.trim();
        if EXIT_COMMANDS.contains(&line) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let reply = manager.send_message(agent_id, line).await?;
        println!("{} {}", format!("{agent_id}>").cyan().bold(), reply);
    }

    runtime.shutdown().await;
    Ok(())
}
