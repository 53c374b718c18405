//! Fluent builder for constructing a [`PopulationDynamicsModel`].

use std::sync::Arc;

use pd_core::{BirthRate, DeathRate, MalthusConfig, malthusian_birth, malthusian_death};

use crate::{ModelResult, PopulationDynamicsModel};

/// Fluent builder for [`PopulationDynamicsModel`].
///
/// # Required inputs
///
/// - initial population
///
/// # Optional inputs
///
/// | Method                 | Default  |
/// |------------------------|----------|
/// | `.birth(f)`            | unbound  |
/// | `.death(g)`            | unbound  |
/// | `.shared_birth(arc)`   | unbound  |
/// | `.shared_death(arc)`   | unbound  |
///
/// [`build`][Self::build] accepts missing rate functions and returns an
/// incomplete model; [`build_ready`][Self::build_ready] rejects them.
///
/// # Example
///
/// ```rust,ignore
/// let model = ModelBuilder::new(100.0)
///     .birth(malthusian_birth(100.0, 0.1))
///     .death(malthusian_death(0.1))
///     .build_ready()?;
/// ```
pub struct ModelBuilder {
    initial_population: f64,
    birth:              Option<Arc<dyn BirthRate>>,
    death:              Option<Arc<dyn DeathRate>>,
}

impl ModelBuilder {
    pub fn new(initial_population: f64) -> Self {
        Self {
            initial_population,
            birth: None,
            death: None,
        }
    }

    /// Builder for a Malthusian model: `p0 = initial_population`.
    ///
    /// Fails with `ValidationError::Config` if `config` is invalid.
    pub fn from_config(config: &MalthusConfig) -> ModelResult<Self> {
        config.validate()?;
        Ok(Self::new(config.initial_population)
            .birth(malthusian_birth(config.initial_population, config.birth_rate))
            .death(malthusian_death(config.death_rate)))
    }

    pub fn birth(mut self, birth: impl BirthRate) -> Self {
        self.birth = Some(Arc::new(birth));
        self
    }

    pub fn death(mut self, death: impl DeathRate) -> Self {
        self.death = Some(Arc::new(death));
        self
    }

    /// Bind a birth function already shared with other models.
    pub fn shared_birth(mut self, birth: Arc<dyn BirthRate>) -> Self {
        self.birth = Some(birth);
        self
    }

    /// Bind a death function already shared with other models.
    pub fn shared_death(mut self, death: Arc<dyn DeathRate>) -> Self {
        self.death = Some(death);
        self
    }

    /// Return a model at step 0, ready or not.
    pub fn build(self) -> PopulationDynamicsModel {
        let mut model = PopulationDynamicsModel::new(self.initial_population);
        model.birth = self.birth;
        model.death = self.death;
        model
    }

    /// Return a model at step 0, or `IncompleteModel` if a rate function is
    /// missing.
    pub fn build_ready(self) -> ModelResult<PopulationDynamicsModel> {
        let model = self.build();
        model.validate()?;
        Ok(model)
    }
}
