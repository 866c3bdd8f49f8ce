//! Log-incident action

use anyhow::Result;
use dialoguer::Input;

use homesafe_core::services::{LogEvent, LoggingService};
use homesafe_core::Incident;

use super::session::Session;
use crate::output;

pub fn run(session: &mut Session, logger: &Option<LoggingService>) -> Result<()> {
    let kind: String = Input::new()
        .with_prompt("Incident type (Fall/Fire/Other)")
        .validate_with(super::required)
        .interact_text()?;

    let description: String = Input::new()
        .with_prompt("Description")
        .validate_with(super::required)
        .interact_text()?;

    let user = session.user_mut()?;
    user.incidents
        .push(Incident::new(kind.trim(), description.trim()));

    match session.ctx.store.save() {
        Ok(()) => output::success("Incident logged."),
        Err(e) => {
            // The incident stays for this session; only the snapshot write failed
            output::error(&format!("Incident could not be saved: {}", e));
            super::log_event(
                logger,
                LogEvent::new("save_failed")
                    .with_command("incident")
                    .with_error(e.to_string()),
            );
        }
    }

    Ok(())
}
