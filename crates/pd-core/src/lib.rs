//! `pd-core` — foundational types for the population dynamics workspace.
//!
//! This crate is a dependency of every other `pd-*` crate.  It has no `pd-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`rate`]    | `BirthRate`, `DeathRate`, Malthusian rate functions       |
//! | [`step`]    | `Step` counter                                            |
//! | [`config`]  | `MalthusConfig`                                           |
//! | [`error`]   | `ValidationError`, `MissingRates`, `ValidationResult`     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Step` and `MalthusConfig`. |

pub mod config;
pub mod error;
pub mod rate;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::MalthusConfig;
pub use error::{MissingRates, ValidationError, ValidationResult};
pub use rate::{BirthRate, DeathRate, malthusian_birth, malthusian_death};
pub use step::Step;
