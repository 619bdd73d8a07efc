use crate::domain::catalog::MotorCatalog;
use crate::domain::model::{MotorSpec, QuestionnaireAnswers, Recommendation};
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::validate_positive_finite;

/// Extra effective weight for coastal chop and currents.
pub const COASTAL_WEIGHT_FACTOR: f64 = 1.15;
/// Share of rated power drawn at a typical cruising throttle.
pub const CRUISE_LOAD_FACTOR: f64 = 0.45;
/// Nominal capacity of one battery unit.
pub const BATTERY_UNIT_KWH: f64 = 5.0;
/// Share of nominal capacity usable above the depth-of-discharge floor.
pub const USABLE_FRACTION: f64 = 0.8;

/// Computes the motor and battery advice for one set of answers.
///
/// Picks the first catalog entry rated for both the hull length and the
/// effective weight, falling back to the largest entry when none is. The
/// battery bank is sized in whole units so that its usable energy covers the
/// representative trip at cruising draw.
///
/// Length and weight must be positive and finite. Values above the
/// questionnaire range are accepted.
pub fn recommend<'a>(
    answers: &QuestionnaireAnswers,
    catalog: &'a MotorCatalog,
) -> Result<Recommendation<'a>> {
    validate_positive_finite("boat.length_m", answers.hull_length_m)?;
    validate_positive_finite("boat.weight_kg", answers.weight_kg)?;

    let is_coastal = answers.water_type.is_coastal();
    let effective_weight_kg = if is_coastal {
        answers.weight_kg * COASTAL_WEIGHT_FACTOR
    } else {
        answers.weight_kg
    };

    let motor = select_motor(catalog, answers.hull_length_m, effective_weight_kg);

    let average_consumption_kw = motor.power_kw * CRUISE_LOAD_FACTOR;
    let trip_hours = answers.trip_duration.hours();
    let required_kwh = average_consumption_kw * trip_hours;

    let battery_count = battery_units(required_kwh, &motor.model)?;
    let total_capacity_kwh = battery_count as f64 * BATTERY_UNIT_KWH;
    let estimated_endurance_hours =
        round_one_decimal(total_capacity_kwh * USABLE_FRACTION / average_consumption_kw);

    tracing::debug!(
        model = %motor.model,
        effective_weight_kg,
        battery_count,
        estimated_endurance_hours,
        "Computed recommendation"
    );

    Ok(Recommendation {
        motor,
        battery_count,
        total_capacity_kwh,
        estimated_endurance_hours,
        is_coastal_rated: is_coastal,
        trip_hours,
        average_consumption_kw,
    })
}

/// Whole battery units needed to cover `required_kwh` of usable energy.
fn battery_units(required_kwh: f64, model: &str) -> Result<u32> {
    let units = (required_kwh / (BATTERY_UNIT_KWH * USABLE_FRACTION)).ceil();
    if !units.is_finite() || units > u32::MAX as f64 {
        return Err(AdvisorError::InvalidCatalog {
            message: format!(
                "'{}' draws {} kWh per trip, beyond any battery bank",
                model, required_kwh
            ),
        });
    }
    Ok(units as u32)
}

/// Smallest sufficient motor, or the largest one when nothing fits.
pub fn select_motor(
    catalog: &MotorCatalog,
    hull_length_m: f64,
    effective_weight_kg: f64,
) -> &MotorSpec {
    match catalog
        .iter()
        .find(|m| m.covers(hull_length_m, effective_weight_kg))
    {
        Some(motor) => motor,
        None => {
            tracing::debug!(
                hull_length_m,
                effective_weight_kg,
                "No motor rated for boat, using largest"
            );
            catalog.largest()
        }
    }
}

/// Rounds half away from zero to one decimal.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
