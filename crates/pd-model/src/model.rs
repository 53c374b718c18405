//! The `PopulationDynamicsModel` struct and its step loop.

use std::fmt;
use std::sync::Arc;

use pd_core::{BirthRate, DeathRate, MissingRates, Step, ValidationError, ValidationResult};
use tracing::{debug, info, trace};

use crate::{ModelObserver, ModelResult, NoopObserver, RangeOutput, RangeSummary, ReportWriter, StepOutcome};

/// Whether a model can step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Readiness {
    Ready,
    Incomplete(MissingRates),
}

// ── PopulationDynamicsModel ───────────────────────────────────────────────────

/// A discrete-time population stepper.
///
/// Holds the running population, a zero-based step counter, and two shared
/// rate functions.  Either function may be unbound; readiness is checked on
/// every call rather than tracked as a separate state.
///
/// The model is also an [`Iterator`] over [`StepOutcome`]s: `next` is
/// [`advance`][Self::advance], so an incomplete model yields nothing.  The
/// sequence cannot be rewound in place; build a new model to restart.
///
/// Create via [`PopulationDynamicsModel::new`] or
/// [`ModelBuilder`][crate::ModelBuilder].
pub struct PopulationDynamicsModel {
    population: f64,
    step:       Step,

    /// Birth function, called with the current step as time.  Shared, never
    /// mutated by the model.
    pub birth: Option<Arc<dyn BirthRate>>,

    /// Death function, called with the post-birth population.
    pub death: Option<Arc<dyn DeathRate>>,
}

impl PopulationDynamicsModel {
    /// An incomplete model at step 0 with no rate functions bound.
    pub fn new(initial_population: f64) -> Self {
        Self {
            population: initial_population,
            step:       Step::ZERO,
            birth:      None,
            death:      None,
        }
    }

    /// A ready model at step 0.
    pub fn with_rates(
        initial_population: f64,
        birth:              impl BirthRate,
        death:              impl DeathRate,
    ) -> Self {
        let mut model = Self::new(initial_population);
        model.set_birth(birth).set_death(death);
        model
    }

    // ── Rate binding ──────────────────────────────────────────────────────

    pub fn set_birth(&mut self, birth: impl BirthRate) -> &mut Self {
        self.birth = Some(Arc::new(birth));
        self
    }

    pub fn set_death(&mut self, death: impl DeathRate) -> &mut Self {
        self.death = Some(Arc::new(death));
        self
    }

    pub fn clear_birth(&mut self) -> &mut Self {
        self.birth = None;
        self
    }

    pub fn clear_death(&mut self) -> &mut Self {
        self.death = None;
        self
    }

    // ── State ─────────────────────────────────────────────────────────────

    /// Population before the next step's births and deaths are applied.
    #[inline]
    pub fn population(&self) -> f64 {
        self.population
    }

    /// Index the birth function will see on the next [`advance`][Self::advance].
    #[inline]
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn readiness(&self) -> Readiness {
        match MissingRates::from_presence(self.birth.is_some(), self.death.is_some()) {
            None          => Readiness::Ready,
            Some(missing) => Readiness::Incomplete(missing),
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.readiness() == Readiness::Ready
    }

    /// `Err(IncompleteModel)` naming every unbound rate function.
    pub fn validate(&self) -> ValidationResult<()> {
        match self.readiness() {
            Readiness::Ready                => Ok(()),
            Readiness::Incomplete(missing)  => Err(ValidationError::IncompleteModel { missing }),
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one step.
    ///
    /// Returns `None` without touching any state if either rate function is
    /// unbound.  Otherwise commits the new population, increments the step,
    /// and returns `(deaths, births, population)` for the step.
    pub fn advance(&mut self) -> Option<StepOutcome> {
        let (Some(birth), Some(death)) = (self.birth.as_deref(), self.death.as_deref()) else {
            debug!(step = self.step.0, "advance skipped: model incomplete");
            return None;
        };

        let births      = birth.births(self.step.as_f64());
        let with_births = self.population + births;
        let deaths      = death.deaths(with_births);
        let population  = with_births + deaths;

        trace!(step = self.step.0, births, deaths, population, "advanced");

        self.step       = self.step.next();
        self.population = population;

        Some(StepOutcome { deaths, births, population })
    }

    /// Compute `steps` steps from step 0 and return them column-wise.
    ///
    /// See [`compute_range_with`][Self::compute_range_with].
    pub fn compute_range(&mut self, steps: u64) -> ModelResult<RangeOutput> {
        self.compute_range_with(steps, &mut NoopObserver)
    }

    /// Compute `steps` steps, reporting each to `observer`.
    ///
    /// The step counter is reset to 0 for the duration of the call and
    /// restored afterwards, so callers never see it move.  Every step in the
    /// range is measured against the population held when the call began;
    /// the population left behind is the last step's, so consecutive calls
    /// compound.
    ///
    /// Fails with `IncompleteModel` before any state is touched if either
    /// rate function is unbound.  `steps == 0` returns empty columns.
    pub fn compute_range_with<O: ModelObserver>(
        &mut self,
        steps:    u64,
        observer: &mut O,
    ) -> ModelResult<RangeOutput> {
        self.validate()?;

        let saved_step = self.step;
        let baseline   = self.population;
        debug!(steps, saved_step = saved_step.0, baseline, "computing range");

        let mut out = RangeOutput::with_capacity(steps);
        self.step = Step::ZERO;
        for _ in 0..steps {
            self.population = baseline;
            let index = self.step;
            let Some(outcome) = self.advance() else { break };
            observer.on_step(index, &outcome);
            out.push(outcome);
        }
        self.step = saved_step;

        if let Some(summary) = out.summary() {
            observer.on_range_end(&summary);
        }
        debug!(steps, population = self.population, "range complete");
        Ok(out)
    }

    /// Compute `steps` steps and print the final-step report to stdout.
    pub fn describe(&mut self, steps: u64) -> ModelResult<RangeSummary> {
        let mut writer = ReportWriter::stdout();
        let summary = self.describe_to(steps, &mut writer)?;
        match writer.take_error() {
            Some(e) => Err(e.into()),
            None    => Ok(summary),
        }
    }

    /// Compute `steps` steps and hand the final-step report to `observer`.
    ///
    /// Fails with `EmptyRange` for `steps == 0`, in addition to the
    /// [`compute_range`][Self::compute_range] preconditions.
    pub fn describe_to<O: ModelObserver>(
        &mut self,
        steps:    u64,
        observer: &mut O,
    ) -> ModelResult<RangeSummary> {
        self.validate()?;
        if steps == 0 {
            return Err(ValidationError::EmptyRange.into());
        }

        let out = self.compute_range_with(steps, observer)?;
        let summary = out.summary().ok_or(ValidationError::EmptyRange)?;
        info!(
            steps      = summary.steps,
            population = summary.population,
            births     = summary.births,
            deaths     = summary.deaths,
            "range described"
        );
        Ok(summary)
    }
}

impl Iterator for PopulationDynamicsModel {
    type Item = StepOutcome;

    fn next(&mut self) -> Option<StepOutcome> {
        self.advance()
    }
}

impl fmt::Debug for PopulationDynamicsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopulationDynamicsModel")
            .field("population", &self.population)
            .field("step", &self.step)
            .field("birth", &self.birth.is_some())
            .field("death", &self.death.is_some())
            .finish()
    }
}
