use anyhow::{bail, Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::models::Activities;

/// Result of a sign-up or removal call. A non-2xx status is not a transport
/// failure — the server answers those with a JSON `detail` the UI shows
/// verbatim — so both branches come back as `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Accepted { message: Option<String> },
    Rejected { detail: Option<String> },
}

pub struct ActivitiesClient {
    client: Client,
    base_url: String,
}

impl ActivitiesClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full activity set
    pub async fn get_activities(&self) -> Result<Activities> {
        let url = format!("{}/activities", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch activities")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .context("Failed to read activities response")?;
        debug!("Activities response (status {}): {}", status, text);

        if !status.is_success() {
            bail!("Activities request failed (status {status})");
        }

        let activities: Activities = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse activities (status {status}): {text}"))?;

        debug!("Fetched {} activities", activities.len());
        Ok(activities)
    }

    /// Register an email for an activity
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<ApiOutcome> {
        let url = format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email),
        );

        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to send sign-up request")?;

        Self::outcome(resp, "sign-up").await
    }

    /// Remove an email from an activity's participant list
    pub async fn remove_participant(&self, activity: &str, email: &str) -> Result<ApiOutcome> {
        let url = format!(
            "{}/activities/{}/participants?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email),
        );

        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to send removal request")?;

        Self::outcome(resp, "removal").await
    }

    async fn outcome(resp: reqwest::Response, what: &str) -> Result<ApiOutcome> {
        let status = resp.status();
        let text = resp
            .text()
            .await
            .with_context(|| format!("Failed to read {what} response"))?;
        debug!("{} response (status {}): {}", what, status, text);

        // Malformed bodies are tolerated: fall back to an empty value and let
        // the caller substitute its generic text.
        let body: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();

        if status.is_success() {
            Ok(ApiOutcome::Accepted {
                message: json_field(&body, "message"),
            })
        } else {
            Ok(ApiOutcome::Rejected {
                detail: json_field(&body, "detail"),
            })
        }
    }
}

fn json_field(body: &serde_json::Value, key: &str) -> Option<String> {
    body.get(key).and_then(|v| v.as_str()).map(String::from)
}
