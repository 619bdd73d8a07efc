use crate::domain::catalog::MotorCatalog;
use crate::utils::error::Result;

/// Where the motor catalog comes from.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<MotorCatalog>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}
