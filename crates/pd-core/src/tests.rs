//! Unit tests for pd-core primitives.

#[cfg(test)]
mod birth {
    use approx::assert_relative_eq;

    use crate::{BirthRate, malthusian_birth};

    #[test]
    fn zero_initial_population() {
        assert_eq!(malthusian_birth(0.0, 0.1)(100.0), 0.0);
    }

    #[test]
    fn zero_rate_is_constant() {
        let birth = malthusian_birth(10.0, 0.0);
        for t in [0.0, 1.0, 10.0, 1_000.0, -5.0] {
            assert_eq!(birth(t), 10.0);
        }
    }

    #[test]
    fn negative_rate_decays() {
        assert_relative_eq!(malthusian_birth(10.0, -0.1)(10.0), 3.6787944117144233, max_relative = 1e-12);
    }

    #[test]
    fn rate_greater_than_one() {
        assert_relative_eq!(malthusian_birth(10.0, 1.1)(10.0), 598741.4171519781, max_relative = 1e-12);
    }

    #[test]
    fn fractional_time() {
        assert_relative_eq!(malthusian_birth(10.0, 0.1)(5.5), 17.332530178673952, max_relative = 1e-12);
    }

    #[test]
    fn simple_calculation() {
        assert_relative_eq!(malthusian_birth(10.0, 0.1)(10.0), 27.18281828459045, max_relative = 1e-12);
    }

    #[test]
    fn very_small_rate() {
        assert_relative_eq!(malthusian_birth(1.0, 0.0001)(1.0), 1.0001000050001667, max_relative = 1e-12);
    }

    #[test]
    fn matches_closed_form() {
        for (p0, r, t) in [(100.0, 0.1, 3.0), (5.0, -0.3, 7.0), (42.0, 0.02, 0.5)] {
            let f = malthusian_birth(p0, r);
            assert_eq!(f(t), p0 * (r * t).exp());
        }
    }

    #[test]
    fn trait_dispatch_matches_call() {
        let f = malthusian_birth(100.0, 0.1);
        let rate: &dyn BirthRate = &f;
        assert_eq!(rate.births(2.0), f(2.0));
    }

    #[test]
    fn overflow_propagates() {
        assert!(malthusian_birth(1.0, 1_000.0)(1_000.0).is_infinite());
        assert!(malthusian_birth(f64::NAN, 0.1)(1.0).is_nan());
    }
}

#[cfg(test)]
mod death {
    use approx::assert_relative_eq;

    use crate::{DeathRate, malthusian_death};

    #[test]
    fn zero_population() {
        assert_eq!(malthusian_death(0.01)(0.0), 0.0);
    }

    #[test]
    fn negative_population() {
        assert_eq!(malthusian_death(0.01)(-100.0), 1.0);
    }

    #[test]
    fn zero_rate() {
        let death = malthusian_death(0.0);
        for p in [0.0, 100.0, 1e12, -3.0] {
            assert_eq!(death(p), 0.0);
        }
    }

    #[test]
    fn negative_rate_adds_population() {
        assert!(malthusian_death(-0.01)(100.0) > 0.0);
    }

    #[test]
    fn known_values() {
        assert_relative_eq!(malthusian_death(0.01)(100.0), -1.0);
        assert_relative_eq!(malthusian_death(0.03)(2152.24364), -64.5673092);
        assert_relative_eq!(malthusian_death(0.01)(999999999999999.0), -9999999999999.99);
        assert_relative_eq!(malthusian_death(0.00001)(436534563456.0), -4365345.63456);
    }

    #[test]
    fn trait_dispatch_matches_call() {
        let f = malthusian_death(0.2);
        let rate: &dyn DeathRate = &f;
        assert_eq!(rate.deaths(50.0), f(50.0));
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn arithmetic() {
        assert_eq!(Step::ZERO.next(), Step(1));
        assert_eq!(Step(10).next().next(), Step(12));
        assert_eq!(Step(7).as_f64(), 7.0);
    }

    #[test]
    fn display() {
        assert_eq!(Step(3).to_string(), "S3");
    }
}

#[cfg(test)]
mod error {
    use crate::{MissingRates, ValidationError};

    #[test]
    fn presence_classification() {
        assert_eq!(MissingRates::from_presence(true, true), None);
        assert_eq!(MissingRates::from_presence(false, true), Some(MissingRates::Birth));
        assert_eq!(MissingRates::from_presence(true, false), Some(MissingRates::Death));
        assert_eq!(MissingRates::from_presence(false, false), Some(MissingRates::Both));
    }

    #[test]
    fn presence_accessors() {
        assert!(MissingRates::Birth.birth() && !MissingRates::Birth.death());
        assert!(!MissingRates::Death.birth() && MissingRates::Death.death());
        assert!(MissingRates::Both.birth() && MissingRates::Both.death());
    }

    #[test]
    fn display_lists_missing_functions_in_order() {
        assert_eq!(MissingRates::Birth.to_string(), "missing birth function");
        assert_eq!(MissingRates::Death.to_string(), "missing death function");
        assert_eq!(
            MissingRates::Both.to_string(),
            "missing birth function; missing death function"
        );
    }

    #[test]
    fn message_names_each_missing_function() {
        let birth = ValidationError::IncompleteModel { missing: MissingRates::Birth }.to_string();
        assert!(birth.contains("birth") && !birth.contains("death"));

        let death = ValidationError::IncompleteModel { missing: MissingRates::Death }.to_string();
        assert!(death.contains("death") && !death.contains("birth"));

        let both = ValidationError::IncompleteModel { missing: MissingRates::Both }.to_string();
        assert!(both.contains("missing birth function"));
        assert!(both.contains("missing death function"));
    }
}

#[cfg(test)]
mod config {
    use crate::{MalthusConfig, ValidationError};

    #[test]
    fn default_is_valid() {
        let cfg = MalthusConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.initial_population, 100.0);
        assert_eq!(cfg.steps, 5);
    }

    #[test]
    fn zero_steps_rejected() {
        let cfg = MalthusConfig { steps: 0, ..MalthusConfig::default() };
        assert!(matches!(cfg.validate(), Err(ValidationError::Config(_))));
    }

    #[test]
    fn non_finite_rejected() {
        let cfg = MalthusConfig { birth_rate: f64::NAN, ..MalthusConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("birth_rate"));

        let cfg = MalthusConfig { initial_population: f64::INFINITY, ..MalthusConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let cfg: MalthusConfig = serde_json::from_str(r#"{ "death_rate": 0.2 }"#).unwrap();
        assert_eq!(cfg.death_rate, 0.2);
        assert_eq!(cfg.birth_rate, 0.1);
        assert_eq!(cfg.steps, 5);
    }
}
