//! Forecast file loading

use crate::models::{DayForecast, ForecastRecord};
use crate::{BulletinError, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, instrument};

/// Read and parse the forecast document
#[instrument]
pub fn load_forecast(path: &Path) -> Result<Value> {
    info!("Loading forecast from: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => BulletinError::input_not_found(path),
        _ => BulletinError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&content).map_err(|source| BulletinError::InputMalformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the forecast file and extract the day at `index`
pub fn load_day(path: &Path, index: usize) -> Result<DayForecast> {
    let document = load_forecast(path)?;
    ForecastRecord::from_value(document)?.day(index)
}
