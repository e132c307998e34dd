//! Request intake: string form fields to a typed observation.
//!
//! Consumed by whatever outer layer collects the form; the core performs no
//! session or authorization checks of its own.

use diarisk_model::{PatientField, PatientObservation, Result, RiskError};

/// Parses form key/value pairs into an observation.
///
/// Required keys must be present and numeric; blank optional values are
/// treated as absent; unknown keys are rejected so typos do not silently
/// drop a measurement.
pub fn observation_from_form<'a, I>(pairs: I) -> Result<PatientObservation>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut observation = PatientObservation::new();
    for (key, raw) in pairs {
        let field = PatientField::from_key(key)
            .ok_or_else(|| RiskError::invalid_input(key, "unknown field"))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        observation.set(field, parse_field(field, trimmed)?);
    }

    for field in PatientField::REQUIRED {
        if observation.value(field).is_none() {
            return Err(RiskError::invalid_input(
                field.as_str(),
                "required field is missing",
            ));
        }
    }
    Ok(observation)
}

fn parse_field(field: PatientField, raw: &str) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|_| {
        RiskError::invalid_input(field.as_str(), format!("{raw:?} is not a number"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(RiskError::invalid_input(
            field.as_str(),
            "value must be a non-negative number",
        ));
    }
    if field == PatientField::FamilyHistory && value != 0.0 && value != 1.0 {
        return Err(RiskError::invalid_input(
            field.as_str(),
            "family history must be 0 or 1",
        ));
    }
    Ok(value)
}
