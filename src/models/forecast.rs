//! Open-Meteo daily forecast record and single-day extraction

use super::{DayForecast, Quantity};
use crate::{BulletinError, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Day offset of tomorrow in the daily arrays (0 is today)
pub const TOMORROW: usize = 1;

/// Top level of the forecast document. Everything but `daily` is ignored.
#[derive(Debug, Deserialize)]
pub struct ForecastRecord {
    pub daily: Option<DailyData>,
}

/// Daily parallel arrays from `OpenMeteo`, indexed by day offset.
///
/// Entries stay untyped so a wrong type is reported against its key.
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Option<Value>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Value>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Value>,
    #[serde(rename = "precipitation_sum")]
    pub precipitation: Option<Value>,
    #[serde(rename = "precipitation_probability_max")]
    pub precipitation_probability: Option<Value>,
    pub weather_code: Option<Value>,
}

impl ForecastRecord {
    /// Interpret a parsed JSON document as a forecast record
    pub fn from_value(document: Value) -> Result<Self> {
        serde_json::from_value(document).map_err(|e| {
            BulletinError::data_incomplete(format!("unexpected forecast layout: {e}"))
        })
    }

    /// Extract one day from the daily arrays. All-or-nothing: any missing
    /// key, short array or bad value fails the whole extraction.
    #[instrument(skip(self))]
    pub fn day(&self, index: usize) -> Result<DayForecast> {
        let daily = self
            .daily
            .as_ref()
            .ok_or_else(|| BulletinError::data_incomplete("missing key 'daily'"))?;

        let date = match entry(&daily.time, "time", index)? {
            Value::String(date) => date.clone(),
            other => return Err(wrong_type("time", index, other, "a date string")),
        };
        let temperature_max = quantity(&daily.temperature_max, "temperature_2m_max", index)?;
        let temperature_min = quantity(&daily.temperature_min, "temperature_2m_min", index)?;
        let precipitation_sum = quantity(&daily.precipitation, "precipitation_sum", index)?;
        let precipitation_probability = quantity(
            &daily.precipitation_probability,
            "precipitation_probability_max",
            index,
        )?;
        let weather_code = weather_code(&daily.weather_code, index)?;

        debug!(%date, weather_code, "Extracted daily forecast");

        Ok(DayForecast {
            date,
            temperature_max,
            temperature_min,
            precipitation_sum,
            precipitation_probability,
            weather_code,
        })
    }
}

/// Value at `index` of the array stored under `key`
fn entry<'a>(series: &'a Option<Value>, key: &str, index: usize) -> Result<&'a Value> {
    let series = series
        .as_ref()
        .ok_or_else(|| BulletinError::data_incomplete(format!("missing key 'daily.{key}'")))?;

    let values = series.as_array().ok_or_else(|| {
        BulletinError::data_incomplete(format!("'daily.{key}' is {} instead of an array", kind(series)))
    })?;

    values.get(index).ok_or_else(|| {
        BulletinError::data_incomplete(format!(
            "'daily.{key}' has {} entries, index {index} is out of range",
            values.len()
        ))
    })
}

fn quantity(series: &Option<Value>, key: &str, index: usize) -> Result<Quantity> {
    match entry(series, key, index)? {
        Value::Number(number) => Ok(Quantity::from(number.clone())),
        other => Err(wrong_type(key, index, other, "a number")),
    }
}

fn weather_code(series: &Option<Value>, index: usize) -> Result<i64> {
    const KEY: &str = "weather_code";
    let value = entry(series, KEY, index)?;
    let integral = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|code| code.fract() == 0.0 && code.abs() < i64::MAX as f64)
            .map(|code| code as i64)
    });
    integral.ok_or_else(|| wrong_type(KEY, index, value, "an integer weather code"))
}

fn wrong_type(key: &str, index: usize, value: &Value, expected: &str) -> BulletinError {
    BulletinError::data_incomplete(format!(
        "'daily.{key}[{index}]' is {} instead of {expected}",
        kind(value)
    ))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
