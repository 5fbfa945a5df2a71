mod api;
mod config;
mod error;
mod models;
mod pipeline;
mod storage;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::api::headhunter::HeadHunterApi;
use crate::api::{ApiConfig, JobApi, SearchQuery};
use crate::config::{Command, Config};
use crate::models::vacancy::Vacancy;
use crate::storage::VacancyStorage;
use crate::storage::json_file::JsonFileStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hhscout=info")),
        )
        .init();

    let config = Config::parse();
    let storage = JsonFileStorage::new(&config.storage_path)?;

    match config.command {
        Command::Search {
            text,
            location,
            salary_from,
            salary_to,
            experience,
            area,
            per_page,
            page,
            keyword,
            salary_range,
            top,
            save,
        } => {
            let mut api = HeadHunterApi::new(ApiConfig {
                base_url: config.base_url,
                timeout: Duration::from_secs(config.timeout_secs),
            })?;

            if !api.connect().await {
                tracing::warn!("API did not answer the connectivity probe; trying anyway");
            }

            let mut query = SearchQuery::new(text);
            query.location = location;
            query.salary_from = salary_from;
            query.salary_to = salary_to;
            query.experience = experience;
            query.area = area;
            query.per_page = per_page;
            query.page = page;

            let items = api.search(&query).await;
            let mut vacancies = Vacancy::from_api_batch(&items);
            tracing::info!("fetched {} vacancies", vacancies.len());

            if save {
                for vacancy in &vacancies {
                    storage.add_or_update(vacancy);
                }
            }

            if !keyword.is_empty() {
                vacancies = pipeline::filter_by_keywords(vacancies, &keyword);
            }
            if let Some(range) = &salary_range {
                vacancies = pipeline::filter_by_salary_range(vacancies, range);
            }
            vacancies = pipeline::sort_by_salary_desc(vacancies);
            if let Some(n) = top {
                vacancies = pipeline::top_n(vacancies, n);
            }

            print_vacancies(&vacancies);
        }
        Command::Saved { keyword } => {
            print_vacancies(&storage.list(keyword.as_deref()));
        }
        Command::Remove { id } => {
            storage.remove(&id);
        }
        Command::Clear => {
            storage.clear();
        }
    }

    Ok(())
}

fn print_vacancies(vacancies: &[Vacancy]) {
    if vacancies.is_empty() {
        println!("Вакансии не найдены");
        return;
    }
    let rule = "-".repeat(50);
    for (i, vacancy) in vacancies.iter().enumerate() {
        println!("\n{rule}\n{}. {vacancy}\n{rule}", i + 1);
    }
}
