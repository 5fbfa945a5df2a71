use std::fs;
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::storage::VacancyStorage;

/// Store backed by a single JSON array file. Every operation reads the whole
/// file and rewrites it; there is no locking, so this is single-process,
/// single-threaded use only.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create parent directories and seed the file with an empty array when
    /// it does not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            fs::write(&path, "[]")?;
        }
        Ok(JsonFileStorage { path })
    }

    fn read_all(&self) -> Result<Vec<Vacancy>, AppError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_all(&self, vacancies: &[Vacancy]) -> Result<(), AppError> {
        fs::write(&self.path, serde_json::to_string_pretty(vacancies)?)?;
        Ok(())
    }

    /// Corrupt JSON or an I/O failure reads as an empty collection.
    fn load(&self) -> Vec<Vacancy> {
        match self.read_all() {
            Ok(vacancies) => vacancies,
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Write failures are reported and swallowed; no partial-write recovery.
    fn store(&self, vacancies: &[Vacancy]) {
        if let Err(e) = self.write_all(vacancies) {
            tracing::warn!("failed to write {}: {e}", self.path.display());
        }
    }
}

impl VacancyStorage for JsonFileStorage {
    fn add_or_update(&self, vacancy: &Vacancy) {
        let mut all = self.load();
        match all.iter_mut().find(|v| v.id == vacancy.id) {
            Some(slot) => *slot = vacancy.clone(),
            None => all.push(vacancy.clone()),
        }
        self.store(&all);
    }

    fn list(&self, keyword: Option<&str>) -> Vec<Vacancy> {
        let all = self.load();
        match keyword {
            None => all,
            Some(keyword) => {
                let keyword = keyword.to_lowercase();
                all.into_iter()
                    .filter(|v| {
                        v.title.to_lowercase().contains(&keyword)
                            || v.description.to_lowercase().contains(&keyword)
                    })
                    .collect()
            }
        }
    }

    fn remove(&self, id: &str) {
        let mut all = self.load();
        all.retain(|v| v.id != id);
        self.store(&all);
    }

    fn clear(&self) {
        self.store(&[]);
    }
}
