//! Backup actions - create, list, restore, clear

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Select};

use homesafe_core::services::{LogEvent, LoggingService};
use homesafe_core::HomesafeContext;

use crate::output;

/// How many backup archives to keep around
const MAX_BACKUPS: usize = 10;

pub fn run(ctx: &mut HomesafeContext, logger: &Option<LoggingService>) -> Result<()> {
    let choice = Select::new()
        .with_prompt("Backups")
        .items(&[
            "Create backup",
            "List backups",
            "Restore backup",
            "Delete all backups",
            "Back",
        ])
        .default(0)
        .interact()?;

    match choice {
        0 => create(ctx, logger),
        1 => list(ctx),
        2 => restore(ctx, logger),
        3 => clear(ctx),
        _ => Ok(()),
    }
}

fn create(ctx: &HomesafeContext, logger: &Option<LoggingService>) -> Result<()> {
    match ctx.backup_service.create(Some(MAX_BACKUPS)) {
        Ok(meta) => {
            output::success(&format!(
                "Backup created: {} ({})",
                meta.name,
                meta.size_display()
            ));
        }
        Err(e) => {
            output::error(&format!("Backup failed: {}", e));
            super::log_event(
                logger,
                LogEvent::new("backup_failed")
                    .with_command("backup")
                    .with_error(e.to_string()),
            );
        }
    }
    Ok(())
}

fn list(ctx: &HomesafeContext) -> Result<()> {
    let backups = ctx.backup_service.list()?;

    if backups.is_empty() {
        output::info("No backups yet.");
        return Ok(());
    }

    println!("{}", "Backups".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Name", "Created", "Size"]);
    for backup in &backups {
        table.add_row(vec![
            backup.name.clone(),
            backup.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            backup.size_display(),
        ]);
    }

    println!("{}", table);
    Ok(())
}

fn clear(ctx: &HomesafeContext) -> Result<()> {
    let backups = ctx.backup_service.list()?;
    if backups.is_empty() {
        output::info("No backups yet.");
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete all {} backups?", backups.len()))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    let result = ctx.backup_service.clear()?;
    output::success(&format!("Deleted {} backups.", result.deleted));
    Ok(())
}

fn restore(ctx: &mut HomesafeContext, logger: &Option<LoggingService>) -> Result<()> {
    let backups = ctx.backup_service.list()?;

    if backups.is_empty() {
        output::info("No backups yet.");
        return Ok(());
    }

    let names: Vec<&str> = backups.iter().map(|b| b.name.as_str()).collect();
    let index = Select::new()
        .with_prompt("Restore which backup?")
        .items(&names)
        .default(0)
        .interact()?;

    let confirmed = Confirm::new()
        .with_prompt("Replace the current data with this backup?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    match ctx.backup_service.restore(names[index]) {
        Ok(()) => {
            // Bring the in-memory store in line with the restored snapshot
            if let Err(e) = ctx.store.load() {
                output::warning(&format!("Restored snapshot could not be read: {}", e));
            } else {
                output::success("Backup restored.");
            }
        }
        Err(e) => {
            output::error(&format!("Restore failed: {}", e));
            super::log_event(
                logger,
                LogEvent::new("restore_failed")
                    .with_command("backup")
                    .with_error(e.to_string()),
            );
        }
    }

    Ok(())
}
