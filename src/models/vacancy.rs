use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::salary::Salary;

/// A single job listing, either mapped from a raw API item or reconstructed
/// from the storage file. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub salary: Salary,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub employment: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Vacancy {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        salary: Option<Salary>,
        description: impl Into<String>,
        company_name: impl Into<String>,
        url: impl Into<String>,
        requirements: impl Into<String>,
        experience: impl Into<String>,
        employment: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Vacancy {
            id: id.into(),
            title: title.into(),
            salary: salary.unwrap_or_default(),
            description: description.into(),
            company_name: company_name.into(),
            url: url.into(),
            requirements: requirements.into(),
            experience: experience.into(),
            employment: employment.into(),
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Map a batch of raw search items into typed records. Missing scalars
    /// default to the empty string; an unparseable timestamp defaults to now.
    pub fn from_api_batch(items: &[Value]) -> Vec<Vacancy> {
        items.iter().map(Vacancy::from_api_item).collect()
    }

    fn from_api_item(raw: &Value) -> Vacancy {
        Vacancy {
            id: str_field(raw, "id"),
            title: str_field(raw, "name"),
            salary: Salary::from_api(raw.get("salary")),
            description: str_field(raw, "description"),
            company_name: nested_str(raw, "employer", "name"),
            url: str_field(raw, "alternate_url"),
            requirements: nested_str(raw, "snippet", "requirement"),
            experience: nested_str(raw, "experience", "name"),
            employment: nested_str(raw, "employment", "name"),
            created_at: parse_timestamp(raw),
        }
    }

    /// True iff every keyword appears, case-insensitively, in at least one of
    /// title, description or requirements. An empty list is vacuously true.
    pub fn contains_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        let title = self.title.to_lowercase();
        let description = self.description.to_lowercase();
        let requirements = self.requirements.to_lowercase();
        keywords.iter().all(|keyword| {
            let keyword = keyword.as_ref().to_lowercase();
            title.contains(&keyword)
                || description.contains(&keyword)
                || requirements.contains(&keyword)
        })
    }

    /// Parse a `"MIN-MAX"` range and test the salary against it. Malformed
    /// input yields `false` rather than an error.
    pub fn salary_in_range(&self, range: &str) -> bool {
        let cleaned: String = range.chars().filter(|c| !c.is_whitespace()).collect();
        let Some((lo, hi)) = cleaned.split_once('-') else {
            return false;
        };
        match (lo.parse::<u32>(), hi.parse::<u32>()) {
            (Ok(lo), Ok(hi)) => self.salary.in_range(lo, hi),
            _ => false,
        }
    }
}

fn str_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn nested_str(raw: &Value, outer: &str, inner: &str) -> String {
    raw.get(outer)
        .and_then(|v| v.get(inner))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// `created_at` with `published_at` as fallback; RFC 3339 with a trailing
/// `Z` or an explicit offset. Anything else falls back to now.
fn parse_timestamp(raw: &Value) -> DateTime<Utc> {
    raw.get("created_at")
        .or_else(|| raw.get("published_at"))
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Вакансия: {}\nКомпания: {}\nЗарплата: {}\nОпыт: {}\nТип занятости: {}\nURL: {}",
            self.title, self.company_name, self.salary, self.experience, self.employment, self.url
        )
    }
}
