// Vacancy-provider module.
// Defines the capability trait and query types for remote search adapters.

pub mod headhunter;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

/// Connection settings for a vacancy-search provider.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "https://api.hh.ru".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// One-page search parameters. Only present fields become query parameters;
/// `area` wins over `location` when both are set.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub location: Option<String>,
    pub salary_from: Option<u32>,
    pub salary_to: Option<u32>,
    /// Provider experience id, e.g. `between1And3`.
    pub experience: Option<String>,
    /// Numeric area id as the provider emits it.
    pub area: Option<String>,
    pub per_page: u32,
    pub page: u32,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery {
            text: text.into(),
            location: None,
            salary_from: None,
            salary_to: None,
            experience: None,
            area: None,
            per_page: 100,
            page: 0,
        }
    }
}

/// Trait that all vacancy-provider adapters must implement. Every method is
/// fail-soft: transport failures degrade to a safe default plus a diagnostic
/// and never propagate to callers.
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Probe the service root; records and returns connectivity.
    async fn connect(&mut self) -> bool;

    /// Fetch one page of raw search items; empty on any failure.
    async fn search(&mut self, query: &SearchQuery) -> Vec<Value>;

    /// Single-vacancy lookup by id; empty JSON object on any failure.
    async fn fetch_details(&mut self, id: &str) -> Value;
}
