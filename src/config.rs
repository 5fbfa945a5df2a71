use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "hhscout", about = "Personal HeadHunter vacancy search utility")]
pub struct Config {
    /// Vacancy API base URL
    #[arg(long, env = "HH_BASE_URL", default_value = "https://api.hh.ru")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "HH_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    /// Path to the JSON storage file
    #[arg(long, env = "HH_STORAGE_PATH", default_value = "data/vacancies.json")]
    pub storage_path: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Search vacancies on the remote API and run the query pipeline
    Search {
        /// Search text
        text: String,

        /// Free-text location, resolved to an area id
        #[arg(long)]
        location: Option<String>,

        /// Minimum salary to request
        #[arg(long)]
        salary_from: Option<u32>,

        /// Maximum salary to request
        #[arg(long)]
        salary_to: Option<u32>,

        /// Experience id as the API defines it (e.g. between1And3)
        #[arg(long)]
        experience: Option<String>,

        /// Numeric area id; overrides --location
        #[arg(long)]
        area: Option<String>,

        /// Page size, capped at 100 by the API
        #[arg(long, default_value = "100")]
        per_page: u32,

        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: u32,

        /// Keyword every result must contain; repeatable
        #[arg(long)]
        keyword: Vec<String>,

        /// Client-side salary range filter, MIN-MAX
        #[arg(long)]
        salary_range: Option<String>,

        /// Keep only the top N results by salary
        #[arg(long)]
        top: Option<usize>,

        /// Persist the fetched vacancies to local storage
        #[arg(long)]
        save: bool,
    },
    /// List vacancies saved in local storage
    Saved {
        /// Keyword to narrow by title or description
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Remove one saved vacancy by id
    Remove {
        /// Vacancy id
        id: String,
    },
    /// Empty the storage file
    Clear,
}
