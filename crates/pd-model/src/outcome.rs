//! Per-step and per-range result records.

use crate::RangeSummary;

/// Upper bound on up-front column allocation; longer ranges grow as they go.
const MAX_PREALLOC_STEPS: usize = 1 << 16;

/// Result of one step, in `(deaths, births, population)` order.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct StepOutcome {
    /// Signed change due to deaths (negative for positive death rates).
    pub deaths:     f64,
    /// Population added by births this step.
    pub births:     f64,
    /// Population after births and deaths are applied.
    pub population: f64,
}

impl StepOutcome {
    #[inline]
    pub fn as_tuple(self) -> (f64, f64, f64) {
        (self.deaths, self.births, self.population)
    }
}

impl From<StepOutcome> for (f64, f64, f64) {
    fn from(o: StepOutcome) -> Self {
        o.as_tuple()
    }
}

/// Column-oriented results of a bulk computation.
///
/// All three vectors have the same length and are indexed by step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeOutput {
    pub deaths:      Vec<f64>,
    pub births:      Vec<f64>,
    pub populations: Vec<f64>,
}

impl RangeOutput {
    /// Empty columns sized for `steps` steps, capped at `MAX_PREALLOC_STEPS`.
    pub fn with_capacity(steps: u64) -> Self {
        let steps = usize::try_from(steps).unwrap_or(usize::MAX).min(MAX_PREALLOC_STEPS);
        Self {
            deaths:      Vec::with_capacity(steps),
            births:      Vec::with_capacity(steps),
            populations: Vec::with_capacity(steps),
        }
    }

    pub fn push(&mut self, outcome: StepOutcome) {
        self.deaths.push(outcome.deaths);
        self.births.push(outcome.births);
        self.populations.push(outcome.population);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.populations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }

    /// The outcome recorded at step `index`, if any.
    pub fn get(&self, index: usize) -> Option<StepOutcome> {
        Some(StepOutcome {
            deaths:     *self.deaths.get(index)?,
            births:     *self.births.get(index)?,
            population: *self.populations.get(index)?,
        })
    }

    pub fn last(&self) -> Option<StepOutcome> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Final-step figures, or `None` for an empty range.
    pub fn summary(&self) -> Option<RangeSummary> {
        self.last().map(|last| RangeSummary {
            steps:      self.len() as u64,
            population: last.population,
            births:     last.births,
            deaths:     last.deaths,
        })
    }

    /// Split into `(deaths, births, populations)`.
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.deaths, self.births, self.populations)
    }
}

impl FromIterator<StepOutcome> for RangeOutput {
    fn from_iter<I: IntoIterator<Item = StepOutcome>>(iter: I) -> Self {
        let mut out = RangeOutput::default();
        for outcome in iter {
            out.push(outcome);
        }
        out
    }
}
