//! Validation error type.
//!
//! Sub-crates wrap `ValidationError` as one variant of their own error enum
//! via `#[from]`, so `?` works across crate boundaries.

use std::fmt;

use thiserror::Error;

/// Which rate function(s) a model is missing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MissingRates {
    Birth,
    Death,
    Both,
}

impl MissingRates {
    /// Classify a pair of presence flags.  Returns `None` when both are bound.
    pub fn from_presence(has_birth: bool, has_death: bool) -> Option<Self> {
        match (has_birth, has_death) {
            (true, true)   => None,
            (false, true)  => Some(Self::Birth),
            (true, false)  => Some(Self::Death),
            (false, false) => Some(Self::Both),
        }
    }

    #[inline]
    pub fn birth(self) -> bool {
        matches!(self, Self::Birth | Self::Both)
    }

    #[inline]
    pub fn death(self) -> bool {
        matches!(self, Self::Death | Self::Both)
    }
}

impl fmt::Display for MissingRates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [(self.birth(), "birth"), (self.death(), "death")];
        let mut sep = "";
        for (_, name) in names.iter().filter(|(missing, _)| *missing) {
            write!(f, "{sep}missing {name} function")?;
            sep = "; ";
        }
        Ok(())
    }
}

/// Errors raised before any step is applied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("incomplete model: {missing}")]
    IncompleteModel { missing: MissingRates },

    #[error("cannot report on an empty range: step count must be positive")]
    EmptyRange,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
