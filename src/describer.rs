//! Weather condition descriptions
//!
//! The condition class and the rain thresholds pick a pool; the chooser
//! picks a phrase inside it. All thresholds are strict.

use crate::chooser::PhraseChooser;
use crate::models::{DayForecast, WeatherCondition};
use crate::phrases;

/// Describe a day's weather in a few words, e.g. `pioggia moderata`
pub fn describe_day(day: &DayForecast, chooser: &mut dyn PhraseChooser) -> &'static str {
    describe_weather(
        day.weather_code,
        day.precipitation_sum.value(),
        day.precipitation_probability.value(),
        chooser,
    )
}

/// Describe a weather code given the rain sum (mm) and probability (%)
pub fn describe_weather(
    weather_code: i64,
    rain: f64,
    probability: f64,
    chooser: &mut dyn PhraseChooser,
) -> &'static str {
    match WeatherCondition::from_code(weather_code) {
        WeatherCondition::Clear if probability < 20.0 => chooser.choose(phrases::CLEAR_SKY),
        WeatherCondition::Clear => phrases::MOSTLY_SUNNY,
        WeatherCondition::PartlyCloudy if rain > 1.0 => chooser.choose(phrases::CLOUDY_WET),
        WeatherCondition::PartlyCloudy => chooser.choose(phrases::CLOUDY_DRY),
        WeatherCondition::Rain if rain > 5.0 => phrases::HEAVY_RAIN,
        WeatherCondition::Rain if rain > 1.0 => phrases::MODERATE_RAIN,
        WeatherCondition::Rain => phrases::LIGHT_RAIN,
        WeatherCondition::Thunderstorm => phrases::THUNDERSTORMS,
        WeatherCondition::Variable => phrases::VARIABLE,
    }
}
