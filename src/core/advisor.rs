use crate::core::engine::recommend;
use crate::core::CatalogSource;
use crate::domain::catalog::MotorCatalog;
use crate::domain::model::{QuestionnaireAnswers, Recommendation};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Holds the catalog for the lifetime of the caller and runs the engine
/// against questionnaire answers.
pub struct AdvisorEngine {
    catalog: MotorCatalog,
}

impl AdvisorEngine {
    pub fn new(catalog: MotorCatalog) -> Self {
        Self { catalog }
    }

    pub fn from_source<S: CatalogSource>(source: &S) -> Result<Self> {
        tracing::debug!("Loading motor catalog from {}", source.describe());
        let catalog = source.load()?;
        tracing::info!("Loaded {} motor models", catalog.len());
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &MotorCatalog {
        &self.catalog
    }

    /// Checks the answers against the questionnaire ranges, then recommends.
    pub fn advise(&self, answers: &QuestionnaireAnswers) -> Result<Recommendation<'_>> {
        answers.validate()?;
        let recommendation = recommend(answers, &self.catalog)?;
        tracing::info!(
            "Recommending {} with {} x {} kWh batteries",
            recommendation.motor.model,
            recommendation.battery_count,
            crate::core::engine::BATTERY_UNIT_KWH
        );
        Ok(recommendation)
    }
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self::new(MotorCatalog::builtin())
    }
}
