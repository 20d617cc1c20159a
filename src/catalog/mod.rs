//! Catalog loading: reads the spot table from a CSV file once per process.
//! The table is read-only for the rest of the process lifetime; the
//! selector only ever borrows it.

use crate::errors::{AppError, AppResult};
use crate::models::Spot;
use std::fs;
use std::path::Path;

/// Columns the dataset file must declare. Values may be empty per row,
/// but a file without these headers is rejected up front with a
/// descriptive error instead of failing row by row.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "name",
    "category",
    "mood",
    "duration_min",
    "who_with",
    "description",
    "address",
    "url",
    "image_path",
    "lat",
    "lon",
];

/// Starter dataset written by `daytrip init` when no dataset exists yet.
const STARTER_CSV: &str = include_str!("starter.csv");

#[derive(Debug)]
pub struct Catalog {
    spots: Vec<Spot>,
}

impl Catalog {
    /// Load the spot table from `path`.
    ///
    /// Any failure here is fatal to the interaction: a missing file, a
    /// missing column or an unparseable row all abort with an error
    /// rather than proceeding with partial data.
    pub fn load(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::DatasetNotFound(path.to_string()));
        }

        let mut rdr = csv::Reader::from_path(path)?;

        let headers = rdr.headers()?.clone();
        for col in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == col) {
                return Err(AppError::MissingColumn(col.to_string()));
            }
        }

        let mut spots = Vec::new();
        for (idx, record) in rdr.deserialize::<Spot>().enumerate() {
            // line 1 is the header, data starts at line 2
            let spot = record.map_err(|e| AppError::InvalidRow {
                line: idx + 2,
                reason: e.to_string(),
            })?;
            spots.push(spot);
        }

        Ok(Self { spots })
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Write the embedded starter dataset to `path` (used by `init`).
    /// Refuses to overwrite an existing file.
    pub fn write_starter(path: &str) -> AppResult<()> {
        if Path::new(path).exists() {
            return Err(AppError::Config(format!(
                "dataset already exists: {path}"
            )));
        }
        fs::write(path, STARTER_CSV)?;
        Ok(())
    }
}
