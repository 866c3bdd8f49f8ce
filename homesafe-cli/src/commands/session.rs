//! Interactive session - the authentication loop and main menu
//!
//! Holds the current username explicitly and passes it into every action;
//! there is no ambient "logged-in user" state anywhere else.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Input, Password, Select};

use homesafe_core::services::MIN_PASSWORD_LEN;
use homesafe_core::{HomesafeContext, RegistrationError, User};

use super::{backup, checklist, incident, report};
use crate::output;

/// The authenticated session: store access plus the current username
pub struct Session<'a> {
    pub ctx: &'a mut HomesafeContext,
    pub username: String,
}

impl Session<'_> {
    pub fn user(&self) -> Result<&User> {
        self.ctx
            .store
            .users()
            .iter()
            .find(|user| user.username == self.username)
            .context("Current user is no longer in the store")
    }

    pub fn user_mut(&mut self) -> Result<&mut User> {
        self.ctx
            .store
            .user_mut(&self.username)
            .context("Current user is no longer in the store")
    }
}

pub fn run(data_dir_flag: Option<PathBuf>) -> Result<()> {
    let data_dir = super::get_data_dir(data_dir_flag);
    let logger = super::get_logger(&data_dir);
    if let Some(l) = &logger {
        let _ = l.log_command("session");
    }

    let mut ctx = super::get_context(&data_dir)?;

    println!("{}", "Welcome to HomeSafe!".bold());
    println!();

    if let Err(e) = ctx.store.load() {
        output::warning("Saved user data could not be read; starting with an empty store.");
        if let Some(l) = &logger {
            let _ = l.log_error("load_failed", &e.to_string(), None);
        }
    }

    let username = authenticate(&mut ctx)?;
    let mut session = Session {
        ctx: &mut ctx,
        username,
    };

    loop {
        println!();
        println!("{}", format!("Signed in as {}", session.username).bold());

        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&[
                "Log an incident",
                "Incident report",
                "Risk level",
                "Prevention tips",
                "Preparedness checklist",
                "Back up data",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => incident::run(&mut session, &logger)?,
            1 => report::run_report(&session)?,
            2 => report::run_risk(&session)?,
            3 => report::run_tips(&session)?,
            4 => checklist::run(&mut session, &logger)?,
            5 => backup::run(session.ctx, &logger)?,
            _ => break,
        }

        // A restore can drop the signed-in user from the store
        if session.user().is_err() {
            output::warning("The signed-in user is not present in the restored data. Please sign in again.");
            break;
        }
    }

    if let Err(e) = session.ctx.store.save() {
        output::error(&format!("Failed to save on exit: {}", e));
        if let Some(l) = &logger {
            let _ = l.log_error("save_failed", &e.to_string(), Some("exit"));
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Prompt for login or registration until a user is obtained
///
/// Retries are caller-driven: a failed attempt reports and loops back to
/// the prompt, never recursing into itself.
fn authenticate(ctx: &mut HomesafeContext) -> Result<String> {
    loop {
        let choice = Select::new()
            .with_prompt("Sign in")
            .items(&["Log in", "Create account"])
            .default(0)
            .interact()?;

        let username: String = Input::new()
            .with_prompt("Username")
            .validate_with(super::required)
            .interact_text()?;
        let username = username.trim().to_string();

        if choice == 0 {
            let password = Password::new().with_prompt("Password").interact()?;

            match ctx.store.authenticate(&username, &password) {
                Some(user) => {
                    let username = user.username.clone();
                    output::success("Signed in.");
                    return Ok(username);
                }
                None => output::error("Invalid username or password."),
            }
        } else {
            let password = Password::new()
                .with_prompt(format!("Password (at least {} characters)", MIN_PASSWORD_LEN))
                .interact()?;

            match ctx.store.register(&username, &password) {
                Ok(user) => {
                    let username = user.username.clone();
                    output::success("Account created.");
                    return Ok(username);
                }
                Err(RegistrationError::Save(e)) => {
                    output::error(&format!("Could not save the new account: {}", e));
                }
                Err(e) => output::error(&e.to_string()),
            }
        }
    }
}
