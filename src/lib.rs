//! `bollettino` - Italian weather bulletins from Open-Meteo daily forecasts
//!
//! Reads tomorrow's entry from a daily forecast document, describes it with
//! randomly picked Italian phrases and writes the result to a text file.

pub mod chooser;
pub mod composer;
pub mod config;
pub mod describer;
pub mod error;
pub mod italian_date;
pub mod loader;
pub mod logging;
pub mod models;
pub mod phrases;
pub mod writer;

// Re-export core types for public API
pub use chooser::{FixedChooser, PhraseChooser, RandomChooser, ScriptedChooser, chooser_for};
pub use composer::{Bulletin, compose_bulletin};
pub use config::BulletinConfig;
pub use describer::describe_weather;
pub use error::BulletinError;
pub use italian_date::format_italian_date;
pub use loader::{load_day, load_forecast};
pub use models::{DayForecast, ForecastRecord, Quantity, TOMORROW, WeatherCondition};
pub use writer::write_bulletin;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BulletinError>;
