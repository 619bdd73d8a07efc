use crate::domain::model::{QuestionnaireAnswers, Recommendation};
use crate::utils::error::Result;
use crate::utils::validation::validate_present;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    #[default]
    #[serde(alias = "particulier")]
    Private,
    #[serde(alias = "zakelijk")]
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HullType {
    #[serde(alias = "Zeilboot", alias = "zeilboot")]
    Sailboat,
    #[serde(alias = "Motorboot", alias = "motorboot")]
    Motorboat,
    #[serde(alias = "Sloep", alias = "sloep")]
    Sloop,
    #[serde(alias = "Woonboot", alias = "woonboot")]
    Houseboat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Propulsion {
    #[serde(alias = "Geen motor")]
    None,
    #[serde(alias = "Diesel")]
    Diesel,
    #[serde(alias = "Benzine")]
    Petrol,
    #[serde(alias = "Elektrisch (upgrade)")]
    ElectricUpgrade,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactDetails {
    /// Presence checks only; the company name is required for business customers.
    pub fn validate_for(&self, customer_type: CustomerType) -> Result<()> {
        if customer_type == CustomerType::Business {
            validate_present(
                "contact.company",
                self.company.as_deref().unwrap_or_default(),
            )?;
        }
        validate_present("contact.first_name", &self.first_name)?;
        validate_present("contact.last_name", &self.last_name)?;
        validate_present("contact.email", &self.email)?;
        validate_present("contact.phone", &self.phone)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Boat details the questionnaire records for the sales follow-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatProfile {
    pub customer_type: CustomerType,
    pub hull_type: Option<HullType>,
    pub current_propulsion: Option<Propulsion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lead<'a> {
    pub generated_at: DateTime<Utc>,
    pub profile: BoatProfile,
    pub answers: QuestionnaireAnswers,
    pub contact: ContactDetails,
    pub recommendation: Recommendation<'a>,
}

impl<'a> Lead<'a> {
    /// Bundles a checked contact with the advice it was shown.
    pub fn new(
        profile: BoatProfile,
        answers: QuestionnaireAnswers,
        contact: ContactDetails,
        recommendation: Recommendation<'a>,
    ) -> Result<Self> {
        contact.validate_for(profile.customer_type)?;
        Ok(Self {
            generated_at: Utc::now(),
            profile,
            answers,
            contact,
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AdvisorError;

    fn contact() -> ContactDetails {
        ContactDetails {
            company: None,
            first_name: "Jan".to_string(),
            last_name: "Jansen".to_string(),
            email: "jan@voorbeeld.nl".to_string(),
            phone: "06 12345678".to_string(),
        }
    }

    #[test]
    fn test_private_contact_needs_no_company() {
        assert!(contact().validate_for(CustomerType::Private).is_ok());
    }

    #[test]
    fn test_business_contact_requires_company() {
        let err = contact().validate_for(CustomerType::Business).unwrap_err();
        match err {
            AdvisorError::MissingField { field } => assert_eq!(field, "contact.company"),
            other => panic!("unexpected error: {other}"),
        }

        let with_company = ContactDetails {
            company: Some("Rederij Jansen".to_string()),
            ..contact()
        };
        assert!(with_company.validate_for(CustomerType::Business).is_ok());
    }

    #[test]
    fn test_blank_fields_fail_presence_check() {
        let no_phone = ContactDetails {
            phone: "  ".to_string(),
            ..contact()
        };
        assert!(no_phone.validate_for(CustomerType::Private).is_err());

        let no_email = ContactDetails {
            email: String::new(),
            ..contact()
        };
        assert!(no_email.validate_for(CustomerType::Private).is_err());
    }

    #[test]
    fn test_questionnaire_labels_deserialize() {
        let profile: BoatProfile = serde_json::from_str(
            r#"{
                "customer_type": "zakelijk",
                "hull_type": "Woonboot",
                "current_propulsion": "Geen motor"
            }"#,
        )
        .unwrap();
        assert_eq!(profile.customer_type, CustomerType::Business);
        assert_eq!(profile.hull_type, Some(HullType::Houseboat));
        assert_eq!(profile.current_propulsion, Some(Propulsion::None));
    }
}
