//! Country helpline table, loaded once from CSV at startup and read-only after.

use crate::models::HelplineRecord;
use service_core::error::AppError;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelplineError {
    #[error("Failed to open helpline dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed helpline dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Helpline row {row} has an empty country code")]
    EmptyCountryCode { row: usize },
}

impl From<HelplineError> for AppError {
    fn from(err: HelplineError) -> Self {
        AppError::DatasetError(anyhow::Error::new(err))
    }
}

#[derive(Debug, Clone)]
pub struct HelplineTable {
    records: HashMap<String, HelplineRecord>,
    default_code: String,
}

impl HelplineTable {
    /// Reads the dataset at `path`. Rows are keyed by `country_code`; a later
    /// duplicate replaces an earlier one.
    pub fn load(path: &Path, default_code: &str) -> Result<Self, HelplineError> {
        let file = std::fs::File::open(path).map_err(|source| HelplineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, default_code)?;

        tracing::info!(
            path = %path.display(),
            records = table.len(),
            "Loaded helpline dataset"
        );

        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R, default_code: &str) -> Result<Self, HelplineError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<HelplineRecord>().enumerate() {
            let record = row?;
            if record.country_code.is_empty() {
                // +2: one for the header, one for 1-based numbering
                return Err(HelplineError::EmptyCountryCode { row: index + 2 });
            }
            records.push(record);
        }

        Ok(Self::from_records(records, default_code))
    }

    pub fn from_records<I>(records: I, default_code: &str) -> Self
    where
        I: IntoIterator<Item = HelplineRecord>,
    {
        let records: HashMap<String, HelplineRecord> = records
            .into_iter()
            .map(|record| (record.country_code.clone(), record))
            .collect();

        if !records.contains_key(default_code) {
            tracing::warn!(
                default_code = %default_code,
                "Default helpline record is missing; crisis replies for unknown countries will fail"
            );
        }

        Self {
            records,
            default_code: default_code.to_string(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&HelplineRecord> {
        self.records.get(code)
    }

    /// Exact match on `code`, else the default country's record.
    pub fn lookup(&self, code: &str) -> Option<&HelplineRecord> {
        self.get(code).or_else(|| self.get(&self.default_code))
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
