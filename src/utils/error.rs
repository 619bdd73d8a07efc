use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Invalid answer for '{field}': {reason}")]
    InvalidAnswer { field: String, reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Catalog,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::InvalidAnswer { .. } | AdvisorError::MissingField { .. } => {
                ErrorCategory::Input
            }
            AdvisorError::InvalidCatalog { .. } | AdvisorError::CsvError(_) => {
                ErrorCategory::Catalog
            }
            AdvisorError::TomlError(_) | AdvisorError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            AdvisorError::IoError(_) | AdvisorError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Catalog | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AdvisorError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            AdvisorError::TomlError(_) => {
                "Check the TOML syntax and the field names of the file".to_string()
            }
            AdvisorError::CsvError(_) => {
                concat!(
                    "Check the CSV header: ",
                    "model,power_kw,power_hp,max_length_m,max_weight_kg,cooling,torque_nm"
                )
                .to_string()
            }
            AdvisorError::SerializationError(_) => {
                "Retry with --format text".to_string()
            }
            AdvisorError::InvalidCatalog { .. } => {
                "Order motors by ascending max length and max weight, with unique model names"
                    .to_string()
            }
            AdvisorError::InvalidAnswer { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            AdvisorError::MissingField { field } => {
                format!("Fill in '{}'", field)
            }
            AdvisorError::InvalidConfigValue { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdvisorError::IoError(e) => format!("Could not read input file: {}", e),
            AdvisorError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            AdvisorError::CsvError(_) => "The motor catalog CSV could not be read".to_string(),
            AdvisorError::SerializationError(_) => {
                "The result could not be rendered as JSON".to_string()
            }
            AdvisorError::InvalidCatalog { message } => {
                format!("The motor catalog is invalid: {}", message)
            }
            AdvisorError::InvalidAnswer { field, reason } => {
                format!("The answer for {} is not usable: {}", field, reason)
            }
            AdvisorError::MissingField { field } => format!("{} is required", field),
            AdvisorError::InvalidConfigValue { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
