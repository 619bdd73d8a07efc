pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::catalog_file::{BuiltinCatalog, CatalogFile, CsvCatalogFile, TomlCatalogFile};
pub use config::toml_config::AnswersFile;
pub use crate::core::{advisor::AdvisorEngine, engine::recommend, report::Advice};
pub use domain::catalog::MotorCatalog;
pub use domain::lead::{BoatProfile, ContactDetails, CustomerType, HullType, Lead, Propulsion};
pub use domain::model::{
    Cooling, MotorSpec, QuestionnaireAnswers, Recommendation, TripDuration, WaterType,
};
pub use domain::ports::CatalogSource;
pub use utils::error::{AdvisorError, Result};
