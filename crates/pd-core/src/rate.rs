//! Rate function contracts and the Malthusian closed forms.
//!
//! A model is driven by two pure functions:
//!
//! - a **birth** function mapping a step (as time `t`) to the population
//!   added during that step;
//! - a **death** function mapping a population to the *signed* change due to
//!   deaths.  The result is added to the population, so a positive death rate
//!   yields a negative value.
//!
//! Any `Fn(f64) -> f64 + Send + Sync` closure satisfies either contract via
//! the blanket impls below, so callers can plug in their own formulas without
//! naming a type.

/// Population added during the step at time `t`.
pub trait BirthRate: Send + Sync + 'static {
    fn births(&self, t: f64) -> f64;
}

/// Signed population change due to deaths at `population`.
pub trait DeathRate: Send + Sync + 'static {
    fn deaths(&self, population: f64) -> f64;
}

impl<F> BirthRate for F
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    #[inline]
    fn births(&self, t: f64) -> f64 {
        self(t)
    }
}

impl<F> DeathRate for F
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    #[inline]
    fn deaths(&self, population: f64) -> f64 {
        self(population)
    }
}

/// Exponential (Malthusian) birth function: `t -> p0 * e^(r * t)`.
///
/// Defined for every real `t`.  `r = 0` gives a constant `p0`; a negative
/// `r` decays toward zero.  Overflow and NaN propagate unchanged.
///
/// ```
/// let birth = pd_core::malthusian_birth(10.0, 0.0);
/// assert_eq!(birth(10.0), 10.0);
/// ```
pub fn malthusian_birth(p0: f64, r: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |t| p0 * (r * t).exp()
}

/// Linear (Malthusian) death function: `p -> -d * p`.
///
/// ```
/// let death = pd_core::malthusian_death(0.01);
/// assert_eq!(death(-100.0), 1.0);
/// ```
pub fn malthusian_death(d: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |p| -d * p
}
