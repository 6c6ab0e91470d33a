use std::num::IntErrorKind;

use serde::Serialize;
use serde_json::{Map, Number, Value};

pub const TOTAL_ASSET_VALUE: &str = "total_asset_value";
pub const MONTHLY_SALARY: &str = "monthly_salary";
pub const WORK_EXPERIENCES: &str = "work_experiences";
pub const AGE: &str = "age";

/// Input keys read by [`sanitize`], in the order they are converted.
pub const INPUT_KEYS: [&str; 4] = [TOTAL_ASSET_VALUE, MONTHLY_SALARY, WORK_EXPERIENCES, AGE];

/// Validated scoring inputs. Every field is present and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CreditInputs {
    pub total_asset_value: f64,
    pub monthly_salary: f64,
    pub work_experiences: u64,
    pub age: u64,
}

/// Rejection raised while converting a loosely-typed payload into [`CreditInputs`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("Invalid input types: expected an object of scoring inputs, got {found}")]
    NotAnObject { found: &'static str },
    #[error("Invalid input types: {field}: {cause}")]
    Conversion { field: &'static str, cause: String },
    #[error("Numeric inputs must be non-negative.")]
    Negative,
}

/// Converts a JSON mapping into validated inputs.
///
/// Missing keys count as zero and unknown keys are ignored. Reals accept numbers, booleans and
/// numeric strings; integers additionally truncate reals toward zero and saturate at `u64::MAX`.
/// Negativity is checked only after every field converted, and there is no upper bound here:
/// capping happens in the engine.
pub fn sanitize(raw: &Value) -> Result<CreditInputs, InvalidInputError> {
    let fields = raw.as_object().ok_or(InvalidInputError::NotAnObject {
        found: json_kind(raw),
    })?;

    let total_asset_value = real_field(fields, TOTAL_ASSET_VALUE)?;
    let monthly_salary = real_field(fields, MONTHLY_SALARY)?;
    let work_experiences = integer_field(fields, WORK_EXPERIENCES)?;
    let age = integer_field(fields, AGE)?;

    match (work_experiences, age) {
        (WholeNumber::NonNegative(work_experiences), WholeNumber::NonNegative(age))
            if total_asset_value >= 0.0 && monthly_salary >= 0.0 =>
        {
            Ok(CreditInputs {
                total_asset_value,
                monthly_salary,
                work_experiences,
                age,
            })
        }
        _ => Err(InvalidInputError::Negative),
    }
}

fn real_field(fields: &Map<String, Value>, field: &'static str) -> Result<f64, InvalidInputError> {
    let Some(value) = fields.get(field) else {
        return Ok(0.0);
    };

    let parsed = match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| format!("{number} is not representable as a real number")),
        Value::Bool(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("could not convert string to a real number: '{text}'")),
        other => Err(format!("expected a number, got {}", json_kind(other))),
    }
    .map_err(|cause| InvalidInputError::Conversion { field, cause })?;

    if !parsed.is_finite() {
        return Err(InvalidInputError::Conversion {
            field,
            cause: format!("value must be finite, got {parsed}"),
        });
    }

    Ok(parsed)
}

fn integer_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<WholeNumber, InvalidInputError> {
    let Some(value) = fields.get(field) else {
        return Ok(WholeNumber::NonNegative(0));
    };

    let parsed = match value {
        Value::Number(number) => number_to_integer(number),
        Value::Bool(flag) => Ok(WholeNumber::NonNegative(u64::from(*flag))),
        Value::String(text) => parse_integer_text(text),
        other => Err(format!("expected an integer, got {}", json_kind(other))),
    };

    parsed.map_err(|cause| InvalidInputError::Conversion { field, cause })
}

/// Converted integer field. Negative values carry no magnitude; they only fail the sign check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WholeNumber {
    NonNegative(u64),
    Negative,
}

fn number_to_integer(number: &Number) -> Result<WholeNumber, String> {
    if let Some(value) = number.as_u64() {
        return Ok(WholeNumber::NonNegative(value));
    }
    if number.is_i64() {
        return Ok(WholeNumber::Negative);
    }

    let real = match number.as_f64() {
        Some(real) if real.is_finite() => real,
        _ => return Err(format!("cannot convert {number} to an integer")),
    };

    let truncated = real.trunc();
    if truncated < 0.0 {
        return Ok(WholeNumber::Negative);
    }

    // Float to int casts saturate, so anything past u64::MAX lands on it.
    Ok(WholeNumber::NonNegative(truncated as u64))
}

fn parse_integer_text(text: &str) -> Result<WholeNumber, String> {
    let digits = text.trim();

    match digits.parse::<u64>() {
        Ok(value) => return Ok(WholeNumber::NonNegative(value)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
            return Ok(WholeNumber::NonNegative(u64::MAX))
        }
        Err(_) => {}
    }

    match digits.parse::<i64>() {
        Ok(value) if value < 0 => Ok(WholeNumber::Negative),
        Ok(value) => Ok(WholeNumber::NonNegative(value.unsigned_abs())),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(WholeNumber::Negative),
        Err(_) => Err(format!("invalid literal for an integer: '{text}'")),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
