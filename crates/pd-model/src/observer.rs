//! Model observer trait for reporting and data collection.

use pd_core::Step;

use crate::{RangeSummary, StepOutcome};

/// Callbacks invoked by
/// [`PopulationDynamicsModel::compute_range_with`][crate::PopulationDynamicsModel::compute_range_with].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — population tracer
///
/// ```rust,ignore
/// struct Tracer;
///
/// impl ModelObserver for Tracer {
///     fn on_step(&mut self, step: Step, outcome: &StepOutcome) {
///         println!("{step}: {}", outcome.population);
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called after each step of a range, with the step index the birth
    /// function saw.
    fn on_step(&mut self, _step: Step, _outcome: &StepOutcome) {}

    /// Called once after the final step of a non-empty range.
    fn on_range_end(&mut self, _summary: &RangeSummary) {}
}

/// A [`ModelObserver`] that does nothing.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
