use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::{ApiConfig, JobApi, SearchQuery};
use crate::error::AppError;

/// Adapter for the HeadHunter public API. Owns its own `reqwest::Client`
/// with the configured per-request timeout; no shared session state.
pub struct HeadHunterApi {
    config: ApiConfig,
    client: reqwest::Client,
    connected: bool,
    last_request_time: Option<DateTime<Utc>>,
}

impl HeadHunterApi {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(HeadHunterApi {
            config,
            client,
            connected: false,
            last_request_time: None,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Wall-clock time of the last successful request, if any.
    pub fn last_request_time(&self) -> Option<DateTime<Utc>> {
        self.last_request_time
    }

    async fn try_search(
        &mut self,
        query: &SearchQuery,
        area: Option<String>,
    ) -> Result<Vec<Value>, AppError> {
        let per_page = query.per_page.min(100);

        let mut params: Vec<(&str, String)> = vec![("text", query.text.trim().to_string())];
        if let Some(area) = area {
            params.push(("area", area));
        }
        if let Some(from) = query.salary_from {
            params.push(("salary", from.to_string()));
        }
        if query.salary_from.is_some() || query.salary_to.is_some() {
            params.push(("only_with_salary", "true".to_string()));
        }
        if let Some(experience) = &query.experience {
            params.push(("experience", experience.clone()));
        }
        params.push(("per_page", per_page.to_string()));
        params.push(("page", query.page.to_string()));
        params.push(("search_field", "name".to_string()));
        params.push(("search_field", "description".to_string()));

        let resp = self
            .client
            .get(format!("{}/vacancies", self.config.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        self.last_request_time = Some(Utc::now());

        let data: Value = resp.json().await?;
        let items = data
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(apply_result_filters(items, query, per_page))
    }

    /// Resolve a free-text location to an area id: first region whose name
    /// contains the text, otherwise the first matching city within each
    /// region. First match wins, not best match.
    async fn lookup_area_id(&self, location: &str) -> Option<String> {
        let resp = self
            .client
            .get(format!("{}/areas", self.config.base_url))
            .query(&[("text", location)])
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;
        let areas: Value = resp.json().await.ok()?;
        match_area_id(areas.as_array()?, location)
    }

    async fn try_fetch_details(&mut self, id: &str) -> Result<Value, AppError> {
        let resp = self
            .client
            .get(format!("{}/vacancies/{id}", self.config.base_url))
            .send()
            .await?
            .error_for_status()?;
        self.last_request_time = Some(Utc::now());
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl JobApi for HeadHunterApi {
    async fn connect(&mut self) -> bool {
        match self
            .client
            .get(format!("{}/vacancies", self.config.base_url))
            .send()
            .await
        {
            Ok(resp) => {
                self.connected = resp.status().is_success();
            }
            Err(e) => {
                tracing::warn!("connectivity probe failed: {e}");
                self.connected = false;
            }
        }
        self.connected
    }

    async fn search(&mut self, query: &SearchQuery) -> Vec<Value> {
        let area = match &query.area {
            Some(id) => Some(id.clone()),
            None => match &query.location {
                Some(location) => self.lookup_area_id(location).await,
                None => None,
            },
        };
        match self.try_search(query, area).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("vacancy search failed: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_details(&mut self, id: &str) -> Value {
        match self.try_fetch_details(id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!("vacancy {id} detail fetch failed: {e}");
                Value::Object(serde_json::Map::new())
            }
        }
    }
}

/// Re-check the response against the requested criteria: the remote query
/// parameters do not guarantee any of this. Items failing an active check
/// are dropped; the result is capped at `per_page`.
fn apply_result_filters(items: Vec<Value>, query: &SearchQuery, per_page: u32) -> Vec<Value> {
    let needle = query.text.to_lowercase();
    let mut kept = Vec::new();
    for item in items {
        if kept.len() >= per_page as usize {
            break;
        }
        if !text_matches(&item, &needle) {
            continue;
        }
        if !salary_matches(&item, query.salary_from, query.salary_to) {
            continue;
        }
        if let Some(experience) = &query.experience {
            let item_experience = item
                .get("experience")
                .and_then(|e| e.get("id"))
                .and_then(Value::as_str);
            if item_experience != Some(experience.as_str()) {
                continue;
            }
        }
        kept.push(item);
    }
    kept
}

/// Search text must appear in name, description, or the snippet's
/// requirement/responsibility (case-insensitive substring).
fn text_matches(item: &Value, needle: &str) -> bool {
    let lower = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or("").to_lowercase();
    let snippet = item.get("snippet");

    lower(item.get("name")).contains(needle)
        || lower(item.get("description")).contains(needle)
        || lower(snippet.and_then(|s| s.get("requirement"))).contains(needle)
        || lower(snippet.and_then(|s| s.get("responsibility"))).contains(needle)
}

/// Requested bounds are re-checked against the item's own salary sub-object.
/// Items without one pass: `only_with_salary` was already requested upstream.
fn salary_matches(item: &Value, salary_from: Option<u32>, salary_to: Option<u32>) -> bool {
    let Some(salary) = item.get("salary").filter(|v| !v.is_null()) else {
        return true;
    };
    if let Some(lo) = salary_from {
        match salary.get("from").and_then(Value::as_u64) {
            Some(from) if from >= u64::from(lo) => {}
            _ => return false,
        }
    }
    if let Some(hi) = salary_to {
        match salary.get("to").and_then(Value::as_u64) {
            Some(to) if to <= u64::from(hi) => {}
            _ => return false,
        }
    }
    true
}

fn match_area_id(areas: &[Value], location: &str) -> Option<String> {
    let needle = location.to_lowercase();
    let name_matches = |v: &Value| {
        v.get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    };
    for area in areas {
        if name_matches(area) {
            return area_id(area);
        }
        if let Some(cities) = area.get("areas").and_then(Value::as_array) {
            for city in cities {
                if name_matches(city) {
                    return area_id(city);
                }
            }
        }
    }
    None
}

fn area_id(area: &Value) -> Option<String> {
    match area.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
