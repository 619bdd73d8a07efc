use crate::config::toml_config::substitute_env_vars;
use crate::core::CatalogSource;
use crate::domain::catalog::MotorCatalog;
use crate::domain::model::MotorSpec;
use crate::utils::error::Result;
use crate::utils::validation::validate_file_extensions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CATALOG_EXTENSIONS: [&str; 2] = ["toml", "csv"];

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<MotorCatalog> {
        Ok(MotorCatalog::builtin())
    }

    fn describe(&self) -> String {
        "built-in GM catalog".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    motors: Vec<MotorSpec>,
}

/// `[[motors]]` tables, one per model, in ascending capability.
#[derive(Debug, Clone)]
pub struct TomlCatalogFile {
    path: PathBuf,
}

impl TomlCatalogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(content: &str) -> Result<MotorCatalog> {
        let document: CatalogDocument = toml::from_str(&substitute_env_vars(content))?;
        MotorCatalog::new(document.motors)
    }
}

impl CatalogSource for TomlCatalogFile {
    fn load(&self) -> Result<MotorCatalog> {
        let content = std::fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }

    fn describe(&self) -> String {
        format!("TOML file {}", self.path.display())
    }
}

/// One row per model with the header
/// `model,power_kw,power_hp,max_length_m,max_weight_kg,cooling,torque_nm`.
#[derive(Debug, Clone)]
pub struct CsvCatalogFile {
    path: PathBuf,
}

impl CsvCatalogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse<R: std::io::Read>(reader: R) -> Result<MotorCatalog> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut motors = Vec::new();
        for row in reader.deserialize() {
            let motor: MotorSpec = row?;
            motors.push(motor);
        }
        tracing::debug!("Read {} motor rows from CSV", motors.len());

        MotorCatalog::new(motors)
    }
}

impl CatalogSource for CsvCatalogFile {
    fn load(&self) -> Result<MotorCatalog> {
        let file = std::fs::File::open(&self.path)?;
        Self::parse(file)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

/// Catalog selected on the command line.
#[derive(Debug, Clone)]
pub enum CatalogFile {
    Builtin(BuiltinCatalog),
    Toml(TomlCatalogFile),
    Csv(CsvCatalogFile),
}

impl CatalogFile {
    /// Picks the reader by file extension; no path means the built-in catalog.
    pub fn for_path(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(CatalogFile::Builtin(BuiltinCatalog));
        };

        match validate_file_extensions("catalog", path, &CATALOG_EXTENSIONS)?.as_str() {
            "csv" => Ok(CatalogFile::Csv(CsvCatalogFile::new(path))),
            _ => Ok(CatalogFile::Toml(TomlCatalogFile::new(path))),
        }
    }
}

impl CatalogSource for CatalogFile {
    fn load(&self) -> Result<MotorCatalog> {
        match self {
            CatalogFile::Builtin(source) => source.load(),
            CatalogFile::Toml(source) => source.load(),
            CatalogFile::Csv(source) => source.load(),
        }
    }

    fn describe(&self) -> String {
        match self {
            CatalogFile::Builtin(source) => source.describe(),
            CatalogFile::Toml(source) => source.describe(),
            CatalogFile::Csv(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Cooling;
    use crate::utils::error::AdvisorError;

    #[test]
    fn test_parse_toml_catalog() {
        let content = r#"
[[motors]]
model = "E3"
power_kw = 3.0
power_hp = 8.0
max_length_m = 6.0
max_weight_kg = 800.0
cooling = "air"
torque_nm = 25.0

[[motors]]
model = "E8"
power_kw = 8.0
power_hp = 26.0
max_length_m = 9.0
max_weight_kg = 2500.0
cooling = "Vloeistof"
torque_nm = 65.0
"#;

        let catalog = TomlCatalogFile::parse(content).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.largest().model, "E8");
        assert_eq!(catalog.largest().cooling, Cooling::Liquid);
    }

    #[test]
    fn test_parse_csv_catalog() {
        let content = "\
model,power_kw,power_hp,max_length_m,max_weight_kg,cooling,torque_nm
GM5, 5, 15, 7, 1500, Lucht, 40
GM7.5, 7.5, 25, 10, 3000, air, 60
";

        let catalog = CsvCatalogFile::parse(content.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("GM5").unwrap().cooling, Cooling::Air);
        assert_eq!(catalog.find("GM7.5").unwrap().max_weight_kg, 3000.0);
    }

    #[test]
    fn test_csv_catalog_is_validated() {
        let content = "\
model,power_kw,power_hp,max_length_m,max_weight_kg,cooling,torque_nm
GM10,10,35,10,5000,air,80
GM5,5,15,7,1500,air,40
";
        assert!(matches!(
            CsvCatalogFile::parse(content.as_bytes()),
            Err(AdvisorError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn test_catalog_file_selection() {
        assert!(matches!(
            CatalogFile::for_path(None).unwrap(),
            CatalogFile::Builtin(_)
        ));
        assert!(matches!(
            CatalogFile::for_path(Some("motors.csv")).unwrap(),
            CatalogFile::Csv(_)
        ));
        assert!(matches!(
            CatalogFile::for_path(Some("motors.toml")).unwrap(),
            CatalogFile::Toml(_)
        ));
        assert!(CatalogFile::for_path(Some("motors.xlsx")).is_err());
    }

    #[test]
    fn test_builtin_source() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert_eq!(catalog, MotorCatalog::builtin());
    }
}
