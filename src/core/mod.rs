pub mod advisor;
pub mod engine;
pub mod report;

pub use crate::domain::catalog::MotorCatalog;
pub use crate::domain::model::{QuestionnaireAnswers, Recommendation};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
