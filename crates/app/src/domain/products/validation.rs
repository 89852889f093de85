//! Product input validation rules.
//!
//! Every inbound product field passes through these rules before it reaches
//! the persistence layer, whether it arrives in a request body, a query string
//! or an administrative command.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    slice::Iter,
};

use smallvec::SmallVec;
use thiserror::Error;

/// Maximum product name length, in characters.
pub const NAME_MAX_CHARS: usize = 255;

/// Rule violated by a rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Constraint {
    #[error("is required")]
    Required,

    #[error("must not be empty")]
    Empty,

    #[error("must be at most {max} characters")]
    TooLong { max: usize },

    #[error("must be a finite number")]
    NotFinite,

    #[error("must be greater than 0")]
    NotPositive,

    #[error("must be greater than or equal to {min}")]
    BelowMinimum { min: i64 },

    #[error("must be a boolean")]
    NotBoolean,
}

/// A single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: Constraint,
}

impl ValidationError {
    #[must_use]
    pub const fn new(field: &'static str, constraint: Constraint) -> Self {
        Self { field, constraint }
    }
}

/// Every field rejected while validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: SmallVec<[ValidationError; 3]>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Whether `field` was rejected.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Record the error of a failed rule and pass a successful value through.
    pub fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(error);

                None
            }
        }
    }

    /// Record the error of an optional field's rule, keeping absence as `None`.
    pub fn check_optional<T>(&mut self, result: Option<Result<T, ValidationError>>) -> Option<T> {
        result.and_then(|result| self.check(result))
    }

    /// Return `value` when nothing was rejected.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field was rejected.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            Display::fmt(error, f)?;
        }

        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Validated product name: trimmed, non-empty, at most [`NAME_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    /// Validate and trim a product name.
    ///
    /// # Errors
    ///
    /// Returns an error when the trimmed name is empty or too long.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::new("name", Constraint::Empty));
        }

        if trimmed.chars().count() > NAME_MAX_CHARS {
            return Err(ValidationError::new(
                "name",
                Constraint::TooLong {
                    max: NAME_MAX_CHARS,
                },
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated product price: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Validate a product price.
    ///
    /// # Errors
    ///
    /// Returns an error when the price is not finite or not greater than zero.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::new("price", Constraint::NotFinite));
        }

        if value <= 0.0 {
            return Err(ValidationError::new("price", Constraint::NotPositive));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Raw boolean flag as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagInput {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl FlagInput {
    /// Coerce the input into a boolean for `field`.
    ///
    /// Accepts booleans, the integers `0` and `1`, and the usual textual
    /// spellings (`true`/`false`, `t`/`f`, `yes`/`no`, `y`/`n`, `on`/`off`,
    /// `1`/`0`), case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error when the input has no boolean reading.
    pub fn coerce(&self, field: &'static str) -> Result<bool, ValidationError> {
        let not_boolean = ValidationError::new(field, Constraint::NotBoolean);

        match self {
            Self::Bool(value) => Ok(*value),
            Self::Integer(0) => Ok(false),
            Self::Integer(1) => Ok(true),
            Self::Integer(_) => Err(not_boolean),
            Self::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
                "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
                _ => Err(not_boolean),
            },
        }
    }
}

/// Require a value for `field`.
///
/// # Errors
///
/// Returns an error when `value` is absent.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::new(field, Constraint::Required))
}

/// Require `value` to be at least `min`.
///
/// # Errors
///
/// Returns an error when `value` is below `min`.
pub fn at_least(field: &'static str, value: i64, min: i64) -> Result<i64, ValidationError> {
    if value < min {
        return Err(ValidationError::new(field, Constraint::BelowMinimum { min }));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = ProductName::parse("  Laptop HP  ");

        assert_eq!(name.as_ref().map(ProductName::as_str), Ok("Laptop HP"));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            ProductName::parse(""),
            Err(ValidationError::new("name", Constraint::Empty))
        );
        assert_eq!(
            ProductName::parse("   \t"),
            Err(ValidationError::new("name", Constraint::Empty))
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let at_limit = "é".repeat(NAME_MAX_CHARS);
        let over_limit = "a".repeat(NAME_MAX_CHARS + 1);

        assert!(ProductName::parse(&at_limit).is_ok(), "255 characters should be accepted");
        assert_eq!(
            ProductName::parse(&over_limit),
            Err(ValidationError::new(
                "name",
                Constraint::TooLong {
                    max: NAME_MAX_CHARS
                }
            ))
        );
    }

    #[test]
    fn price_must_be_positive() {
        assert_eq!(
            Price::new(0.0),
            Err(ValidationError::new("price", Constraint::NotPositive))
        );
        assert_eq!(
            Price::new(-5.0),
            Err(ValidationError::new("price", Constraint::NotPositive))
        );
        assert_eq!(Price::new(0.01).map(Price::get), Ok(0.01));
    }

    #[test]
    fn price_must_be_finite() {
        assert_eq!(
            Price::new(f64::NAN),
            Err(ValidationError::new("price", Constraint::NotFinite))
        );
        assert_eq!(
            Price::new(f64::INFINITY),
            Err(ValidationError::new("price", Constraint::NotFinite))
        );
    }

    #[test]
    fn flags_coerce_common_spellings() {
        for text in ["true", "TRUE", " yes ", "y", "on", "1", "t"] {
            assert_eq!(
                FlagInput::Text(text.to_string()).coerce("is_offer"),
                Ok(true),
                "expected {text:?} to read as true"
            );
        }

        for text in ["false", "No", "n", "off", "0", "f"] {
            assert_eq!(
                FlagInput::Text(text.to_string()).coerce("is_offer"),
                Ok(false),
                "expected {text:?} to read as false"
            );
        }

        assert_eq!(FlagInput::Integer(1).coerce("is_offer"), Ok(true));
        assert_eq!(FlagInput::Integer(0).coerce("is_offer"), Ok(false));
        assert_eq!(FlagInput::Bool(true).coerce("is_offer"), Ok(true));
    }

    #[test]
    fn flags_reject_other_values() {
        let expected = Err(ValidationError::new("is_offer", Constraint::NotBoolean));

        assert_eq!(FlagInput::Integer(2).coerce("is_offer"), expected);
        assert_eq!(FlagInput::Text("maybe".to_string()).coerce("is_offer"), expected);
        assert_eq!(FlagInput::Text(String::new()).coerce("is_offer"), expected);
    }

    #[test]
    fn errors_are_collected_and_displayed_together() {
        let mut errors = ValidationErrors::default();

        let name = errors.check(ProductName::parse(""));
        let price = errors.check(Price::new(-1.0));

        assert!(name.is_none() && price.is_none(), "both fields should be rejected");
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_field("name"));
        assert!(errors.contains_field("price"));
        assert_eq!(
            errors.to_string(),
            "name: must not be empty; price: must be greater than 0"
        );
        assert!(errors.finish(()).is_err());
    }

    #[test]
    fn at_least_rejects_values_below_minimum() {
        assert_eq!(at_least("skip", 0, 0), Ok(0));
        assert_eq!(
            at_least("skip", -1, 0),
            Err(ValidationError::new(
                "skip",
                Constraint::BelowMinimum { min: 0 }
            ))
        );
    }
}
