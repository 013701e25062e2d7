//! Data models for the bulletin generator
//!
//! This module contains the domain models organized by concern:
//! - Forecast: the Open-Meteo daily record and extraction of a single day
//! - Weather: the extracted day, its measurements and condition classes

pub mod forecast;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{DailyData, ForecastRecord, TOMORROW};
pub use weather::{DayForecast, Quantity, WeatherCondition};
