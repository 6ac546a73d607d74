use std::path::Path;

use anyhow::{bail, Result};

use crate::client::{ActivitiesClient, ApiOutcome};
use crate::config;
use crate::models::Activity;

/// Resolve the API base URL from the CLI flag or the config file
pub fn resolve_base_url(api_url_flag: &Option<String>, config_path: &Path) -> Result<String> {
    match api_url_flag {
        Some(url) => Ok(url.clone()),
        None => {
            let cfg = config::load_config(config_path)?;
            Ok(cfg.api.base_url)
        }
    }
}

fn print_activity(name: &str, info: &Activity) {
    println!(
        "{} ({}/{})",
        name,
        info.participants.len(),
        info.max_participants
    );
    println!("  {}", info.description);
    println!("  Schedule: {}", info.schedule);
    if info.participants.is_empty() {
        println!("  No participants yet");
    } else {
        for email in &info.participants {
            println!("  - {}", email);
        }
    }
}

pub async fn run_list(base_url: &str, verbose: bool) -> Result<()> {
    let client = ActivitiesClient::new(base_url)?;
    let activities = client.get_activities().await?;

    if verbose {
        println!("{}", serde_json::to_string_pretty(&activities)?);
        return Ok(());
    }

    if activities.is_empty() {
        println!("No activities available.");
        return Ok(());
    }

    for (i, (name, info)) in activities.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_activity(name, info);
    }

    Ok(())
}

pub async fn run_signup(base_url: &str, activity: &str, email: &str) -> Result<()> {
    let activity = activity.trim();
    let email = email.trim();
    if activity.is_empty() {
        bail!("No activity given");
    }
    if email.is_empty() {
        bail!("No email given");
    }

    let client = ActivitiesClient::new(base_url)?;
    match client.sign_up(activity, email).await? {
        ApiOutcome::Accepted { message } => {
            println!(
                "{}",
                message.as_deref().unwrap_or("Signed up successfully!")
            );
            Ok(())
        }
        ApiOutcome::Rejected { detail } => {
            bail!("{}", detail.as_deref().unwrap_or("Failed to sign up."))
        }
    }
}

pub async fn run_remove(base_url: &str, activity: &str, email: &str) -> Result<()> {
    let activity = activity.trim();
    let email = email.trim();
    if activity.is_empty() {
        bail!("No activity given");
    }
    if email.is_empty() {
        bail!("No email given");
    }

    let client = ActivitiesClient::new(base_url)?;
    match client.remove_participant(activity, email).await? {
        ApiOutcome::Accepted { message } => {
            println!("{}", message.as_deref().unwrap_or("Participant removed"));
            Ok(())
        }
        ApiOutcome::Rejected { detail } => {
            bail!(
                "{}",
                detail.as_deref().unwrap_or("Failed to remove participant.")
            )
        }
    }
}
