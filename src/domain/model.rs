use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hull length range offered by the questionnaire slider, in metres.
pub const HULL_LENGTH_RANGE_M: (f64, f64) = (4.0, 20.0);
/// Weight range (cargo included) offered by the questionnaire slider, in kg.
pub const WEIGHT_RANGE_KG: (f64, f64) = (500.0, 15000.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cooling {
    #[serde(alias = "Air", alias = "Lucht", alias = "lucht")]
    Air,
    #[serde(alias = "Liquid", alias = "Vloeistof", alias = "vloeistof")]
    Liquid,
}

impl fmt::Display for Cooling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cooling::Air => write!(f, "air"),
            Cooling::Liquid => write!(f, "liquid"),
        }
    }
}

/// One rated motor model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorSpec {
    pub model: String,
    pub power_kw: f64,
    pub power_hp: f64,
    pub max_length_m: f64,
    pub max_weight_kg: f64,
    pub cooling: Cooling,
    pub torque_nm: f64,
}

impl MotorSpec {
    pub fn new(
        model: &str,
        power_kw: f64,
        power_hp: f64,
        max_length_m: f64,
        max_weight_kg: f64,
        cooling: Cooling,
        torque_nm: f64,
    ) -> Self {
        Self {
            model: model.to_string(),
            power_kw,
            power_hp,
            max_length_m,
            max_weight_kg,
            cooling,
            torque_nm,
        }
    }

    /// Whether the motor is rated for both the hull length and the weight.
    pub fn covers(&self, hull_length_m: f64, weight_kg: f64) -> bool {
        self.max_length_m >= hull_length_m && self.max_weight_kg >= weight_kg
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum WaterType {
    Inland,
    Coastal,
    Both,
}

impl WaterType {
    /// Coastal and mixed use both get the coastal weight surcharge.
    pub fn is_coastal(self) -> bool {
        matches!(self, WaterType::Coastal | WaterType::Both)
    }
}

impl FromStr for WaterType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "inland" | "binnenwateren" => Ok(WaterType::Inland),
            "coastal" | "kustwateren" => Ok(WaterType::Coastal),
            "both" | "beide" => Ok(WaterType::Both),
            _ => Err(AdvisorError::InvalidConfigValue {
                field: "usage.water".to_string(),
                value: s.to_string(),
                reason: "Expected inland, coastal or both".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for WaterType {
    type Error = AdvisorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterType::Inland => write!(f, "inland"),
            WaterType::Coastal => write!(f, "coastal"),
            WaterType::Both => write!(f, "both"),
        }
    }
}

/// Typical trip length as picked in the questionnaire.
///
/// Anything that is not one of the four brackets parses to `Unspecified`,
/// which plans like the shortest bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TripDuration {
    #[serde(rename = "under_2h")]
    Under2h,
    #[serde(rename = "between_2_and_4h")]
    Between2And4h,
    #[serde(rename = "between_4_and_8h")]
    Between4And8h,
    #[serde(rename = "over_8h")]
    Over8h,
    #[default]
    Unspecified,
}

impl TripDuration {
    /// Representative trip length in hours used for battery sizing.
    pub fn hours(self) -> f64 {
        match self {
            TripDuration::Under2h => 2.0,
            TripDuration::Between2And4h => 3.0,
            TripDuration::Between4And8h => 6.0,
            TripDuration::Over8h => 10.0,
            TripDuration::Unspecified => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripDuration::Under2h => "< 2 uur",
            TripDuration::Between2And4h => "2-4 uur",
            TripDuration::Between4And8h => "4-8 uur",
            TripDuration::Over8h => "> 8 uur",
            TripDuration::Unspecified => "unspecified",
        }
    }
}

impl From<&str> for TripDuration {
    fn from(value: &str) -> Self {
        let normalized: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "<2uur" | "under_2h" => TripDuration::Under2h,
            "2-4uur" | "between_2_and_4h" => TripDuration::Between2And4h,
            "4-8uur" | "between_4_and_8h" => TripDuration::Between4And8h,
            ">8uur" | "over_8h" => TripDuration::Over8h,
            _ => TripDuration::Unspecified,
        }
    }
}

impl From<String> for TripDuration {
    fn from(value: String) -> Self {
        TripDuration::from(value.as_str())
    }
}

impl FromStr for TripDuration {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TripDuration::from(s))
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The part of the questionnaire the recommendation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub hull_length_m: f64,
    pub weight_kg: f64,
    pub water_type: WaterType,
    #[serde(default)]
    pub trip_duration: TripDuration,
}

impl Validate for QuestionnaireAnswers {
    fn validate(&self) -> Result<()> {
        validate_range(
            "boat.length_m",
            self.hull_length_m,
            HULL_LENGTH_RANGE_M.0,
            HULL_LENGTH_RANGE_M.1,
        )?;
        validate_range(
            "boat.weight_kg",
            self.weight_kg,
            WEIGHT_RANGE_KG.0,
            WEIGHT_RANGE_KG.1,
        )
    }
}

/// Motor and battery advice for one completed questionnaire.
///
/// Borrows the motor from the catalog it was computed against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub motor: &'a MotorSpec,
    pub battery_count: u32,
    pub total_capacity_kwh: f64,
    pub estimated_endurance_hours: f64,
    pub is_coastal_rated: bool,
    pub trip_hours: f64,
    pub average_consumption_kw: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_duration_labels() {
        assert_eq!(TripDuration::from("< 2 uur"), TripDuration::Under2h);
        assert_eq!(TripDuration::from("2-4 uur"), TripDuration::Between2And4h);
        assert_eq!(TripDuration::from("4-8 uur"), TripDuration::Between4And8h);
        assert_eq!(TripDuration::from("> 8 uur"), TripDuration::Over8h);
        assert_eq!(TripDuration::from("over_8h"), TripDuration::Over8h);
        assert_eq!(TripDuration::from(""), TripDuration::Unspecified);
        assert_eq!(TripDuration::from("a whole week"), TripDuration::Unspecified);
    }

    #[test]
    fn test_trip_hours() {
        assert_eq!(TripDuration::Under2h.hours(), 2.0);
        assert_eq!(TripDuration::Between2And4h.hours(), 3.0);
        assert_eq!(TripDuration::Between4And8h.hours(), 6.0);
        assert_eq!(TripDuration::Over8h.hours(), 10.0);
        assert_eq!(TripDuration::Unspecified.hours(), TripDuration::Under2h.hours());
    }

    #[test]
    fn test_water_type_parsing() {
        assert_eq!("Binnenwateren".parse::<WaterType>().unwrap(), WaterType::Inland);
        assert_eq!("kustwateren".parse::<WaterType>().unwrap(), WaterType::Coastal);
        assert_eq!(" BOTH ".parse::<WaterType>().unwrap(), WaterType::Both);
        assert!("lake".parse::<WaterType>().is_err());

        assert!(!WaterType::Inland.is_coastal());
        assert!(WaterType::Coastal.is_coastal());
        assert!(WaterType::Both.is_coastal());
    }

    #[test]
    fn test_answers_validation() {
        let answers = QuestionnaireAnswers {
            hull_length_m: 8.0,
            weight_kg: 2000.0,
            water_type: WaterType::Inland,
            trip_duration: TripDuration::Between2And4h,
        };
        assert!(answers.validate().is_ok());

        let too_long = QuestionnaireAnswers {
            hull_length_m: 21.0,
            ..answers
        };
        assert!(too_long.validate().is_err());

        let too_light = QuestionnaireAnswers {
            weight_kg: 400.0,
            ..answers
        };
        assert!(too_light.validate().is_err());
    }

    #[test]
    fn test_answers_deserialize_unknown_duration() {
        let answers: QuestionnaireAnswers = serde_json::from_str(
            r#"{
                "hull_length_m": 8.0,
                "weight_kg": 2000.0,
                "water_type": "Beide",
                "trip_duration": "weekend"
            }"#,
        )
        .unwrap();
        assert_eq!(answers.water_type, WaterType::Both);
        assert_eq!(answers.trip_duration, TripDuration::Unspecified);
    }
}
