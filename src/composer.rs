//! Bulletin composition

use crate::chooser::PhraseChooser;
use crate::describer::describe_day;
use crate::italian_date::format_italian_date;
use crate::models::DayForecast;
use crate::phrases::{self, fill};
use std::fmt;
use tracing::{debug, instrument};

/// The finished bulletin text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bulletin {
    text: String,
}

impl Bulletin {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Bulletin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Pool of precipitation phrases for a probability in percent
#[must_use]
pub fn rain_pool(probability: f64) -> &'static [&'static str] {
    if probability > 70.0 {
        phrases::RAIN_LIKELY
    } else if probability > 40.0 {
        phrases::RAIN_POSSIBLE
    } else {
        phrases::RAIN_UNLIKELY
    }
}

/// Pool of closing lines. Rain wins over heat.
#[must_use]
pub fn conclusion_pool(rain: f64, temperature_max: f64) -> &'static [&'static str] {
    if rain > 2.0 {
        phrases::CONCLUSIONS_RAINY
    } else if temperature_max > 30.0 {
        phrases::CONCLUSIONS_HOT
    } else {
        phrases::CONCLUSIONS_MILD
    }
}

/// Compose the bulletin for one day.
///
/// Draws from the chooser in a fixed order: weather description (when its
/// pool has several phrases), opening, temperature, precipitation, conclusion.
#[instrument(skip_all, fields(date = %day.date, weather_code = day.weather_code))]
pub fn compose_bulletin(day: &DayForecast, chooser: &mut dyn PhraseChooser) -> Bulletin {
    let date = format_italian_date(&day.date);
    let weather = describe_day(day, chooser);

    let tmin = day.temperature_min.to_string();
    let tmax = day.temperature_max.to_string();
    let prob = day.precipitation_probability.to_string();

    let opening = fill(chooser.choose(phrases::OPENINGS), &[("date", date.as_str())]);
    let temperature = fill(
        chooser.choose(phrases::TEMPERATURES),
        &[("tmin", tmin.as_str()), ("tmax", tmax.as_str())],
    );
    let rain = fill(
        chooser.choose(rain_pool(day.precipitation_probability.value())),
        &[("prob", prob.as_str())],
    );
    let conclusion = chooser.choose(conclusion_pool(
        day.precipitation_sum.value(),
        day.temperature_max.value(),
    ));

    let mut text = format!("{opening}\n\nCi aspetta {weather}. {temperature}. {rain}");
    if day.has_precipitation() {
        text.push_str(&format!(
            " con circa {} mm di pioggia previsti",
            day.precipitation_sum
        ));
    }
    text.push_str(&format!(".\n\n{conclusion}\n\n{}", phrases::SIGN_OFF));

    debug!(length = text.len(), "Composed bulletin");
    Bulletin { text }
}
