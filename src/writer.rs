//! Bulletin output: the file on disk and the console report

use crate::composer::Bulletin;
use crate::models::DayForecast;
use crate::phrases::STATION;
use crate::{BulletinError, Result};
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

const SEPARATOR_WIDTH: usize = 50;

/// Write the bulletin as UTF-8, replacing any previous content
#[instrument(skip(bulletin))]
pub fn write_bulletin(path: &Path, bulletin: &Bulletin) -> Result<()> {
    fs::write(path, bulletin.as_str()).map_err(|source| BulletinError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Bulletin written to {:?}", path);
    Ok(())
}

/// First console line of a run
#[must_use]
pub fn start_message() -> String {
    format!("Generating weather bulletin for {STATION}...")
}

/// Summary of the extracted day
#[must_use]
pub fn loaded_summary(day: &DayForecast) -> String {
    format!(
        "Weather data loaded for {}\nTemperature: {}°C - {}°C\nRain: {} mm (probability: {}%)",
        day.date,
        day.temperature_min,
        day.temperature_max,
        day.precipitation_sum,
        day.precipitation_probability
    )
}

/// Confirmation line followed by the framed bulletin
#[must_use]
pub fn bulletin_report(output: &Path, bulletin: &Bulletin) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    format!(
        "✅ Bollettino generato con successo in {}\n\n{separator}\n{bulletin}\n{separator}",
        output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::FixedChooser;
    use crate::composer::compose_bulletin;
    use crate::models::Quantity;
    use tempfile::tempdir;

    fn sample_day() -> DayForecast {
        DayForecast {
            date: "2025-03-18".to_string(),
            temperature_max: Quantity::new(16.4).unwrap(),
            temperature_min: Quantity::new(8.0).unwrap(),
            precipitation_sum: Quantity::new(0.0).unwrap(),
            precipitation_probability: Quantity::from(10),
            weather_code: 0,
        }
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bollettino.txt");
        fs::write(&path, "vecchio bollettino, molto più lungo di quello nuovo ".repeat(20)).unwrap();

        let bulletin = compose_bulletin(&sample_day(), &mut FixedChooser(0));
        write_bulletin(&path, &bulletin).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), bulletin.as_str());
    }

    #[test]
    fn test_write_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("bollettino.txt");
        let bulletin = compose_bulletin(&sample_day(), &mut FixedChooser(0));

        let err = write_bulletin(&path, &bulletin).unwrap_err();
        assert!(matches!(err, BulletinError::OutputWriteFailed { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_loaded_summary() {
        assert_eq!(
            loaded_summary(&sample_day()),
            "Weather data loaded for 2025-03-18\n\
             Temperature: 8.0°C - 16.4°C\n\
             Rain: 0.0 mm (probability: 10%)"
        );
    }

    #[test]
    fn test_bulletin_report_frames_the_text() {
        let bulletin = compose_bulletin(&sample_day(), &mut FixedChooser(0));
        let report = bulletin_report(Path::new("bollettino.txt"), &bulletin);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "✅ Bollettino generato con successo in bollettino.txt");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "=".repeat(50));
        assert_eq!(lines.last().copied(), Some("=".repeat(50).as_str()));
        assert!(report.contains(bulletin.as_str()));
    }

    #[test]
    fn test_start_message() {
        assert_eq!(start_message(), "Generating weather bulletin for Zagarolo...");
    }
}
