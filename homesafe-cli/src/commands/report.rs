//! Report actions - grouped report, risk level, prevention tips

use anyhow::Result;
use colored::Colorize;

use homesafe_core::services::{grouped_report, personalized_tips, risk_level};
use homesafe_core::RiskLevel;

use super::session::Session;
use crate::output;

/// Show incident counts grouped by normalized type, most frequent first
pub fn run_report(session: &Session) -> Result<()> {
    let user = session.user()?;
    let report = grouped_report(&user.incidents);

    if report.is_empty() {
        output::info("No incidents logged yet.");
        return Ok(());
    }

    println!("{}", "Incident Report".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Type", "Occurrences"]);
    for entry in &report {
        table.add_row(vec![entry.label.clone(), entry.count.to_string()]);
    }

    println!("{}", table);
    Ok(())
}

/// Show the three-tier risk classification for the current user
pub fn run_risk(session: &Session) -> Result<()> {
    let user = session.user()?;

    let level = risk_level(&user.incidents);
    let label = match level {
        RiskLevel::Low => level.to_string().green(),
        RiskLevel::Moderate => level.to_string().yellow(),
        RiskLevel::High => level.to_string().red(),
    };

    println!("Your current risk level is: {}", label.bold());
    Ok(())
}

/// Show prevention tips matched to the user's incident types
pub fn run_tips(session: &Session) -> Result<()> {
    let user = session.user()?;
    let tips = personalized_tips(&user.incidents);

    if tips.is_empty() {
        output::info("No specific tips for your incident history.");
        return Ok(());
    }

    println!("{}", "Prevention Tips".bold());
    for tip in tips {
        println!("  • {}", tip);
    }

    Ok(())
}
