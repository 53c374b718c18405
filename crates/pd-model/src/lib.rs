//! `pd-model` — discrete-time population dynamics stepper.
//!
//! # Step algorithm
//!
//! ```text
//! births      = birth(step)
//! with_births = population + births
//! deaths      = death(with_births)      // signed: negative for positive rates
//! population  = with_births + deaths
//! step       += 1
//! ```
//!
//! A model is *ready* once both rate functions are bound.  Single steps on an
//! incomplete model return `None`; bulk computation returns
//! [`ValidationError::IncompleteModel`][pd_core::ValidationError].
//!
//! # Quick-start
//!
//! ```rust
//! use pd_core::{malthusian_birth, malthusian_death};
//! use pd_model::ModelBuilder;
//!
//! let mut model = ModelBuilder::new(100.0)
//!     .birth(malthusian_birth(100.0, 0.1))
//!     .death(malthusian_death(0.1))
//!     .build();
//!
//! let first = model.advance().unwrap();
//! assert_eq!(first.as_tuple(), (-20.0, 100.0, 180.0));
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod outcome;
pub mod report;


pub use builder::ModelBuilder;
pub use error::{ModelError, ModelResult};
pub use model::{PopulationDynamicsModel, Readiness};
pub use observer::{ModelObserver, NoopObserver};
pub use outcome::{RangeOutput, StepOutcome};
pub use report::{RangeSummary, ReportWriter};
