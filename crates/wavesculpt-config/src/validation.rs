//! Field validation for project inputs.
//!
//! These checks run before any audio is touched, so a bad record fails a
//! run with a clear message instead of an arithmetic surprise mid-way.
//!
//! # Example
//!
//! ```rust
//! use wavesculpt_config::{WaveParameters, validate_wave_parameters};
//!
//! assert!(validate_wave_parameters(&WaveParameters::default()).is_ok());
//! assert!(validate_wave_parameters(&WaveParameters::new(440.0, 0, 10)).is_err());
//! ```

use thiserror::Error;

use crate::{EnvelopeData, Rgb, WaveParameters};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Field name.
        field: &'static str,
        /// Offending value, formatted.
        value: String,
    },

    /// A color field is not `#RRGGBB`.
    #[error("invalid color for {field}: '{value}'")]
    InvalidColor {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: String,
    },

    /// An envelope value is NaN or infinite.
    #[error("{curve} envelope value at index {index} is not finite")]
    NonFiniteEnvelope {
        /// `positive` or `negative`.
        curve: &'static str,
        /// Index of the first bad value.
        index: usize,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn collect(errors: Vec<ValidationError>) -> ValidationResult<()> {
    let mut errors = errors;
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Check that frequency, samples per period and period count are positive.
///
/// A non-finite frequency is reported as not positive.
pub fn validate_wave_parameters(params: &WaveParameters) -> ValidationResult<()> {
    let mut errors = Vec::new();
    if !(params.freq.is_finite() && params.freq > 0.0) {
        errors.push(ValidationError::NotPositive {
            field: "freq",
            value: params.freq.to_string(),
        });
    }
    if params.spw <= 0 {
        errors.push(ValidationError::NotPositive {
            field: "spw",
            value: params.spw.to_string(),
        });
    }
    if params.periods <= 0 {
        errors.push(ValidationError::NotPositive {
            field: "periods",
            value: params.periods.to_string(),
        });
    }
    collect(errors)
}

/// Check that `value` is a `#RRGGBB` color, returning it parsed.
pub fn validate_color(field: &'static str, value: &str) -> ValidationResult<Rgb> {
    value.parse().map_err(|_| ValidationError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Check that every envelope value is finite.
pub fn validate_envelope(data: &EnvelopeData) -> ValidationResult<()> {
    let first_bad = |curve: &'static str, values: &[f32]| {
        values
            .iter()
            .position(|v| !v.is_finite())
            .map(|index| ValidationError::NonFiniteEnvelope { curve, index })
    };
    collect(
        [
            first_bad("positive", &data.positive),
            first_bad("negative", &data.negative),
        ]
        .into_iter()
        .flatten()
        .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bad_field() {
        let err = validate_wave_parameters(&WaveParameters::new(440.0, -3, 10)).unwrap_err();
        assert_eq!(err.to_string(), "spw must be positive, got -3");
    }

    #[test]
    fn several_bad_fields() {
        let err = validate_wave_parameters(&WaveParameters::new(0.0, 100, 0)).unwrap_err();
        match err {
            ValidationError::Multiple(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn nan_frequency() {
        assert!(validate_wave_parameters(&WaveParameters::new(f64::NAN, 1, 1)).is_err());
        assert!(validate_wave_parameters(&WaveParameters::new(f64::INFINITY, 1, 1)).is_err());
    }

    #[test]
    fn colors() {
        assert_eq!(
            validate_color("positive_color", "#00FF00"),
            Ok(Rgb::new(0, 255, 0))
        );
        assert_eq!(
            validate_color("positive_color", "lime").unwrap_err().to_string(),
            "invalid color for positive_color: 'lime'"
        );
    }

    #[test]
    fn envelope_values() {
        assert!(validate_envelope(&EnvelopeData::new(vec![0.1, 0.2], vec![])).is_ok());
        assert_eq!(
            validate_envelope(&EnvelopeData::new(vec![0.1], vec![0.0, f32::NAN])),
            Err(ValidationError::NonFiniteEnvelope {
                curve: "negative",
                index: 1
            })
        );
    }
}
