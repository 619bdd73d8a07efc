use crate::domain::model::{Cooling, MotorSpec};
use crate::utils::error::{AdvisorError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, validated list of motor models.
///
/// Entries are sorted by ascending capability: both `max_length_m` and
/// `max_weight_kg` never decrease along the list. Motor selection relies on
/// that order to return the smallest sufficient model with a linear scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MotorCatalog {
    motors: Vec<MotorSpec>,
}

impl MotorCatalog {
    pub fn new(motors: Vec<MotorSpec>) -> Result<Self> {
        if motors.is_empty() {
            return Err(invalid("catalog contains no motors".to_string()));
        }

        let mut seen = HashSet::new();
        for motor in &motors {
            if motor.model.trim().is_empty() {
                return Err(invalid("motor model name is empty".to_string()));
            }
            if !seen.insert(motor.model.as_str()) {
                return Err(invalid(format!("duplicate motor model '{}'", motor.model)));
            }

            let ratings = [
                ("power_kw", motor.power_kw),
                ("power_hp", motor.power_hp),
                ("max_length_m", motor.max_length_m),
                ("max_weight_kg", motor.max_weight_kg),
                ("torque_nm", motor.torque_nm),
            ];
            for (name, value) in ratings {
                if !value.is_finite() || value <= 0.0 {
                    return Err(invalid(format!(
                        "{} of '{}' must be positive, got {}",
                        name, motor.model, value
                    )));
                }
            }
        }

        for pair in motors.windows(2) {
            let (smaller, larger) = (&pair[0], &pair[1]);
            if larger.max_length_m < smaller.max_length_m
                || larger.max_weight_kg < smaller.max_weight_kg
            {
                return Err(invalid(format!(
                    "'{}' is rated below '{}' but listed after it",
                    larger.model, smaller.model
                )));
            }
        }

        Ok(Self { motors })
    }

    /// The GM electric motor range.
    pub fn builtin() -> Self {
        Self {
            motors: vec![
                MotorSpec::new("GM5", 5.0, 15.0, 7.0, 1500.0, Cooling::Air, 40.0),
                MotorSpec::new("GM7.5", 7.5, 25.0, 10.0, 3000.0, Cooling::Air, 60.0),
                MotorSpec::new("GM10", 10.0, 35.0, 10.0, 5000.0, Cooling::Air, 80.0),
                MotorSpec::new("GM17.5", 17.5, 50.0, 15.0, 10000.0, Cooling::Liquid, 140.0),
                MotorSpec::new("GM22.5", 22.5, 60.0, 20.0, 20000.0, Cooling::Liquid, 180.0),
                MotorSpec::new("GM35", 35.0, 90.0, 25.0, 25000.0, Cooling::Liquid, 270.0),
                MotorSpec::new("GM45", 45.0, 120.0, 35.0, 35000.0, Cooling::Liquid, 360.0),
                MotorSpec::new("GM60", 60.0, 150.0, 50.0, 50000.0, Cooling::Liquid, 470.0),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotorSpec> {
        self.motors.iter()
    }

    pub fn len(&self) -> usize {
        self.motors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motors.is_empty()
    }

    pub fn find(&self, model: &str) -> Option<&MotorSpec> {
        self.motors.iter().find(|m| m.model == model)
    }

    /// Last, most capable entry. A validated catalog is never empty.
    pub fn largest(&self) -> &MotorSpec {
        &self.motors[self.motors.len() - 1]
    }

    pub fn as_slice(&self) -> &[MotorSpec] {
        &self.motors
    }
}

impl Default for MotorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn invalid(message: String) -> AdvisorError {
    AdvisorError::InvalidCatalog { message }
}
