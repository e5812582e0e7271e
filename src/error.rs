//! Configuration errors
//!
//! A collection that breaks a rule is not an error: it produces
//! [`Failure`](crate::Failure) values. `ConfigError` is reserved for a
//! validator that was set up wrongly and cannot evaluate anything.

use std::fmt;

/// A validator was used in a state it cannot evaluate from.
///
/// # Examples
///
/// ```
/// use cohort::{CollectionValidator, ConfigError};
///
/// let validator = CollectionValidator::<i32>::empty();
/// assert_eq!(validator.validate(&[1, 2]), Err(ConfigError::NotConfigured));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `validate` was called on a validator holding no rules at all.
    NotConfigured,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotConfigured => write!(f, "Collection validator not configured."),
        }
    }
}

impl std::error::Error for ConfigError {}
