// ABOUTME: Interactive chat loop with the wellness assistant
// ABOUTME: Reads one message per stdin line until EOF or `exit`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use you360::adapters::Presentation;
use you360::session::DashboardSession;

use crate::helpers::display::print_failure;

fn prompt() -> Result<()> {
    print!("you> ");
    std::io::stdout().flush()?;
    Ok(())
}

pub async fn run(session: &DashboardSession) -> Result<()> {
    println!("Chatting with the You360 assistant. Type `exit` to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if matches!(message, "exit" | "quit") {
            break;
        }
        if !message.is_empty() {
            match Presentation::from_result(session.send_chat(message).await) {
                Presentation::Ready { data } => println!("ai> {}", data.reply.text),
                Presentation::Failed { message } => print_failure(&message),
            }
        }
        prompt()?;
    }
    Ok(())
}
