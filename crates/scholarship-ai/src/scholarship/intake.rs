use serde_json::{Map, Value};

use super::domain::{ProfileField, StudentProfile};

/// Validation errors raised while turning a loosely-typed payload into a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedProfile {
    #[error("profile payload must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("field `{field}` must be a finite number")]
    NotNumeric { field: &'static str },
    #[error("field `{field}` must be a whole number within range")]
    NotWholeNumber { field: &'static str },
}

/// Coerces a JSON object (numbers or numeric strings) into a [`StudentProfile`].
///
/// Fields are checked in canonical order and the first problem is returned;
/// a profile is never built from a partially valid payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileIntake;

impl ProfileIntake {
    pub fn from_json(payload: &Value) -> Result<StudentProfile, MalformedProfile> {
        let object = payload.as_object().ok_or(MalformedProfile::NotAnObject)?;
        Self::from_map(object)
    }

    pub fn from_map(object: &Map<String, Value>) -> Result<StudentProfile, MalformedProfile> {
        let mut values = [0.0_f64; 6];
        for (slot, field) in values.iter_mut().zip(ProfileField::ordered()) {
            *slot = read_field(object, field)?;
        }
        let [
            year_of_study,
            cgpa,
            family_income,
            cocurricular_score,
            leadership_positions,
            community_service_hours,
        ] = values;

        Ok(StudentProfile {
            year_of_study: year_of_study as i32,
            cgpa,
            family_income,
            cocurricular_score,
            leadership_positions: leadership_positions as u32,
            community_service_hours,
        })
    }
}

fn read_field(object: &Map<String, Value>, field: ProfileField) -> Result<f64, MalformedProfile> {
    let key = field.key();
    let value = match object.get(key) {
        None | Some(Value::Null) => return Err(MalformedProfile::MissingField { field: key }),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .filter(|value| value.is_finite())
    .ok_or(MalformedProfile::NotNumeric { field: key })?;

    if field.is_whole_number() {
        let in_range = match field {
            ProfileField::LeadershipPositions => (0.0..=f64::from(u32::MAX)).contains(&value),
            _ => (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value),
        };
        if value.fract() != 0.0 || !in_range {
            return Err(MalformedProfile::NotWholeNumber { field: key });
        }
    }

    Ok(value)
}
