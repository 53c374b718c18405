//! Discrete step counter.
//!
//! # Design
//!
//! Time is a monotonically increasing `Step` counter starting at zero.  The
//! counter is unsigned, so the "step is never negative" invariant holds by
//! construction.  Rate functions are continuous in time and receive the step
//! as an `f64` via [`Step::as_f64`].

use std::fmt;

/// A zero-based step index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step immediately after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// The step as a time value for rate functions.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
