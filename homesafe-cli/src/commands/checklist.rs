//! Preparedness checklist action

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Select};

use homesafe_core::services::{LogEvent, LoggingService};

use super::session::Session;
use crate::output;

pub fn run(session: &mut Session, logger: &Option<LoggingService>) -> Result<()> {
    println!("{}", "Preparedness Checklist".bold());

    let labels: Vec<String> = session
        .user()?
        .checklist
        .iter()
        .map(|item| {
            let mark = if item.completed { "[x]" } else { "[ ]" };
            format!("{} {}", mark, item.description)
        })
        .collect();

    for (i, label) in labels.iter().enumerate() {
        println!("  {}. {}", i + 1, label);
    }

    let toggle = Confirm::new()
        .with_prompt("Check or uncheck an item?")
        .default(false)
        .interact()?;
    if !toggle {
        return Ok(());
    }

    let index = Select::new()
        .with_prompt("Which item?")
        .items(&labels)
        .default(0)
        .interact()?;

    let user = session.user_mut()?;
    let item = &mut user.checklist[index];
    item.completed = !item.completed;
    let message = format!(
        "\"{}\" is now {}.",
        item.description,
        if item.completed { "checked" } else { "unchecked" }
    );

    match session.ctx.store.save() {
        Ok(()) => output::success(&message),
        Err(e) => {
            output::error(&format!("Checklist change could not be saved: {}", e));
            super::log_event(
                logger,
                LogEvent::new("save_failed")
                    .with_command("checklist")
                    .with_error(e.to_string()),
            );
        }
    }

    Ok(())
}
