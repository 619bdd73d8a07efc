use crate::domain::lead::{BoatProfile, ContactDetails, CustomerType, HullType, Propulsion};
use crate::domain::model::{QuestionnaireAnswers, TripDuration, WaterType};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Replaces `${VAR}` with the value of the environment variable. Unset
/// variables are left as written.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

/// Questionnaire answers as written to a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswersFile {
    pub customer: CustomerSection,
    pub boat: BoatSection,
    pub usage: UsageSection,
    pub contact: Option<ContactDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerSection {
    pub kind: CustomerType,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatSection {
    pub hull_type: Option<HullType>,
    pub length_m: Option<f64>,
    pub weight_kg: Option<f64>,
    pub current_propulsion: Option<Propulsion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageSection {
    pub water: Option<WaterType>,
    pub trip_duration: Option<TripDuration>,
}

impl AnswersFile {
    /// Loads answers from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// The answers the engine needs. Length, weight and water are required;
    /// a missing trip duration plans like the shortest bracket.
    pub fn answers(&self) -> Result<QuestionnaireAnswers> {
        let hull_length_m = *validate_required_field("boat.length_m", &self.boat.length_m)?;
        let weight_kg = *validate_required_field("boat.weight_kg", &self.boat.weight_kg)?;
        let water_type = *validate_required_field("usage.water", &self.usage.water)?;

        Ok(QuestionnaireAnswers {
            hull_length_m,
            weight_kg,
            water_type,
            trip_duration: self.usage.trip_duration.unwrap_or_default(),
        })
    }

    pub fn profile(&self) -> BoatProfile {
        BoatProfile {
            customer_type: self.customer.kind,
            hull_type: self.boat.hull_type,
            current_propulsion: self.boat.current_propulsion,
        }
    }

    /// Contact details with the company name taken from `[customer]` when
    /// `[contact]` does not carry one.
    pub fn contact(&self) -> Option<ContactDetails> {
        self.contact.clone().map(|mut contact| {
            if contact.company.is_none() {
                contact.company = self.customer.company.clone();
            }
            contact
        })
    }
}
