pub mod catalog_file;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{TripDuration, WaterType};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use toml_config::AnswersFile;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gmm-advisor")]
#[command(about = "Recommends a GM electric motor and battery bank for a boat")]
pub struct CliConfig {
    /// Questionnaire answers in TOML; flags below override its values
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Motor catalog (.toml or .csv) replacing the built-in one
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Hull length in metres
    #[arg(long)]
    pub length: Option<f64>,

    /// Weight including cargo, in kg
    #[arg(long)]
    pub weight: Option<f64>,

    /// inland, coastal or both
    #[arg(long)]
    pub water: Option<String>,

    /// Typical trip, e.g. "2-4 uur" or between_2_and_4h
    #[arg(long)]
    pub duration: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the motor catalog and exit
    #[arg(long)]
    pub list_motors: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Reads the answers file, if any, and applies the command line overrides.
    pub fn resolve_answers(&self) -> Result<AnswersFile> {
        let mut file = match &self.answers {
            Some(path) => {
                tracing::info!("📁 Loading answers from: {}", path);
                AnswersFile::from_file(path)?
            }
            None => AnswersFile::default(),
        };

        if let Some(length) = self.length {
            file.boat.length_m = Some(length);
        }
        if let Some(weight) = self.weight {
            file.boat.weight_kg = Some(weight);
        }
        if let Some(water) = &self.water {
            file.usage.water = Some(water.parse::<WaterType>()?);
        }
        if let Some(duration) = &self.duration {
            file.usage.trip_duration = Some(TripDuration::from(duration.as_str()));
        }

        Ok(file)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_only() {
        let config = CliConfig::parse_from([
            "gmm-advisor",
            "--length",
            "8",
            "--weight",
            "2000",
            "--water",
            "Binnenwateren",
            "--duration",
            "2-4 uur",
        ]);

        let answers = config.resolve_answers().unwrap().answers().unwrap();
        assert_eq!(answers.hull_length_m, 8.0);
        assert_eq!(answers.water_type, WaterType::Inland);
        assert_eq!(answers.trip_duration, TripDuration::Between2And4h);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_answers_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[boat]
length_m = 8.0
weight_kg = 2000.0

[usage]
water = "inland"
trip_duration = "< 2 uur"
"#,
            )
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let config = CliConfig::parse_from([
            "gmm-advisor",
            "--answers",
            path.as_str(),
            "--water",
            "coastal",
            "--format",
            "json",
        ]);

        let answers = config.resolve_answers().unwrap().answers().unwrap();
        assert_eq!(answers.water_type, WaterType::Coastal);
        assert_eq!(answers.trip_duration, TripDuration::Under2h);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_water_flag_is_rejected() {
        let config = CliConfig::parse_from(["gmm-advisor", "--water", "lake"]);
        assert!(config.resolve_answers().is_err());
    }
}
