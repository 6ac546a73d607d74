use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Full activity set as returned by `GET /activities`: activity name → details.
/// A sorted map so the board renders in a stable order regardless of how the
/// server happens to serialize the object.
pub type Activities = BTreeMap<String, Activity>;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Capacity as advertised by the server. Informational only — the server
    /// enforces it, the client never does.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
}
