use crate::core::engine::{BATTERY_UNIT_KWH, USABLE_FRACTION};
use crate::domain::lead::{BoatProfile, ContactDetails, Lead};
use crate::domain::model::{QuestionnaireAnswers, Recommendation};
use crate::utils::error::Result;
use serde::Serialize;

/// What one advice run hands back to the user: a lead when the questionnaire
/// carried usable contact details, the bare recommendation otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Advice<'a> {
    Lead(Lead<'a>),
    Recommendation(Recommendation<'a>),
}

impl<'a> Advice<'a> {
    /// Incomplete contact details never block the advice. They are logged
    /// and the recommendation is returned without a lead.
    pub fn build(
        profile: BoatProfile,
        answers: QuestionnaireAnswers,
        contact: Option<ContactDetails>,
        recommendation: Recommendation<'a>,
    ) -> Self {
        let Some(contact) = contact else {
            return Advice::Recommendation(recommendation);
        };

        match Lead::new(profile, answers, contact, recommendation.clone()) {
            Ok(lead) => {
                tracing::info!(
                    customer = ?lead.profile.customer_type,
                    model = %lead.recommendation.motor.model,
                    "📇 Lead prepared"
                );
                Advice::Lead(lead)
            }
            Err(e) => {
                tracing::warn!("Contact details incomplete: {}", e);
                Advice::Recommendation(recommendation)
            }
        }
    }

    pub fn recommendation(&self) -> &Recommendation<'a> {
        match self {
            Advice::Lead(lead) => &lead.recommendation,
            Advice::Recommendation(recommendation) => recommendation,
        }
    }

    pub fn lead(&self) -> Option<&Lead<'a>> {
        match self {
            Advice::Lead(lead) => Some(lead),
            Advice::Recommendation(_) => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable summary, one fact per line.
    pub fn render_text(&self) -> String {
        let recommendation = self.recommendation();
        let motor = recommendation.motor;
        let mut lines = vec![
            format!("⚡ {} electric motor", motor.model),
            format!(
                "  Power: {} kW ({} hp), torque {} Nm, {} cooled",
                motor.power_kw, motor.power_hp, motor.torque_nm, motor.cooling
            ),
            format!(
                "🔋 Batteries: {}x {} kWh ({} kWh total, {} kWh usable)",
                recommendation.battery_count,
                BATTERY_UNIT_KWH,
                recommendation.total_capacity_kwh,
                recommendation.total_capacity_kwh * USABLE_FRACTION
            ),
            format!(
                "⏱️  Estimated range: ~{} h at {:.2} kW cruising",
                recommendation.estimated_endurance_hours, recommendation.average_consumption_kw
            ),
        ];
        if recommendation.is_coastal_rated {
            lines.push("🌊 Sized for coastal water".to_string());
        }
        if let Some(lead) = self.lead() {
            lines.push(format!(
                "📇 Quote request for {} <{}>",
                lead.contact.full_name(),
                lead.contact.email
            ));
        }
        lines.join("\n")
    }
}
