//! Single-day weather model and condition classification

use serde::Deserialize;
use serde_json::Number;
use std::fmt;

/// A numeric forecast value that remembers how the provider wrote it.
///
/// Comparisons go through [`Quantity::value`]. Display keeps the integer vs
/// float form of the JSON value (`20.0` stays `20.0`, `40` stays `40`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Number);

impl Quantity {
    /// Create a quantity from a finite float, `None` for NaN or infinity
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    /// Numeric value used for threshold comparisons
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl From<Number> for Quantity {
    fn from(number: Number) -> Self {
        Self(number)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The forecast for one day, as read from the daily arrays
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    /// ISO date (`YYYY-MM-DD`), kept verbatim
    pub date: String,
    /// Maximum temperature in Celsius
    pub temperature_max: Quantity,
    /// Minimum temperature in Celsius
    pub temperature_min: Quantity,
    /// Precipitation sum in mm
    pub precipitation_sum: Quantity,
    /// Maximum precipitation probability in percent
    pub precipitation_probability: Quantity,
    /// WMO weather interpretation code
    pub weather_code: i64,
}

impl DayForecast {
    /// Whether any precipitation is forecast at all
    #[must_use]
    pub fn has_precipitation(&self) -> bool {
        self.precipitation_sum.value() > 0.0
    }
}

/// Coarse condition classes the bulletin distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    /// Clear sky or mainly clear (0, 1)
    Clear,
    /// Partly cloudy or overcast (2, 3)
    PartlyCloudy,
    /// Rain and rain showers (61, 63, 65, 80, 81, 82)
    Rain,
    /// Thunderstorm, with or without hail (95, 96, 99)
    Thunderstorm,
    /// Anything else: fog, drizzle, snow, unknown codes
    Variable,
}

impl WeatherCondition {
    /// Classify a WMO weather code
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 | 1 => Self::Clear,
            2 | 3 => Self::PartlyCloudy,
            61 | 63 | 65 | 80 | 81 | 82 => Self::Rain,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Variable,
        }
    }
}
