use rand::Rng;
use rand::rngs::ThreadRng;

use crate::catalog::foods;
use crate::scoring::constants::*;

/// Source of the 0-4 day jitter folded into every prediction.
///
/// The draw is the only non-deterministic input to the scorer, so it lives
/// behind this trait: production wiring supplies [`UniformJitter`], tests pin
/// the value with [`FixedJitter`] or a seeded rng.
pub trait JitterSource {
    /// Draw a jitter value in `0..JITTER_SPAN`.
    fn draw(&mut self) -> u32;
}

/// Uniform jitter backed by any `rand` RNG.
pub struct UniformJitter<R: Rng>(pub R);

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn draw(&mut self) -> u32 {
        self.0.gen_range(0..JITTER_SPAN)
    }
}

/// Constant jitter for deterministic predictions in tests.
pub struct FixedJitter(pub u32);

impl JitterSource for FixedJitter {
    fn draw(&mut self) -> u32 {
        self.0.min(JITTER_SPAN - 1)
    }
}

/// Default production jitter source.
pub fn thread_jitter() -> UniformJitter<ThreadRng> {
    UniformJitter(rand::thread_rng())
}

/// Fixed survival factor for an age band.
pub fn age_factor(age: u32) -> i32 {
    if age < CHILD_MAX_AGE {
        AGE_FACTOR_CHILD
    } else if age < YOUNG_ADULT_MAX_AGE {
        AGE_FACTOR_YOUNG_ADULT
    } else if age < ADULT_MAX_AGE {
        AGE_FACTOR_ADULT
    } else if age < SENIOR_MAX_AGE {
        AGE_FACTOR_SENIOR
    } else {
        AGE_FACTOR_ELDER
    }
}

/// Sum of per-food survival contributions.
///
/// Each food is classified by the scorer's two-way tables: healthy +100,
/// unhealthy -30, anything unknown 0. Duplicates each count; identifiers are
/// normalized to lowercase.
pub fn food_score(selected: &[String]) -> i32 {
    selected
        .iter()
        .map(|food| {
            let key = food.to_lowercase();
            if foods::is_healthy(&key) {
                HEALTHY_FOOD_POINTS
            } else if foods::is_unhealthy(&key) {
                UNHEALTHY_FOOD_POINTS
            } else {
                0
            }
        })
        .sum()
}

/// Age factor plus food score.
pub fn total_health_score(age: u32, selected: &[String]) -> i32 {
    age_factor(age) + food_score(selected)
}

/// Predict survival days for an age and feast selection.
///
/// `total * 5 + jitter`, clamped to `[0, MAX_SURVIVAL_DAYS]`. The jitter draw
/// makes repeated identical inputs differ by up to 4 days.
pub fn compute_survival_days(age: u32, selected: &[String], jitter: &mut dyn JitterSource) -> u32 {
    let total = i64::from(total_health_score(age, selected));
    let raw = total * i64::from(DAYS_PER_HEALTH_POINT) + i64::from(jitter.draw());
    raw.clamp(0, i64::from(MAX_SURVIVAL_DAYS)) as u32
}

/// Meter display value: survival days capped at 10.
///
/// Display only. Classification always uses the uncapped value.
pub fn display_days(survival_days: u32) -> u32 {
    survival_days.min(DISPLAY_DAYS_CAP)
}

/// Meter fill percentage for a capped display value.
pub fn meter_percent(display: u32) -> f64 {
    ((f64::from(display) / f64::from(DISPLAY_DAYS_CAP)) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_age_factor_bands() {
        assert_eq!(age_factor(0), 45);
        assert_eq!(age_factor(17), 45);
        assert_eq!(age_factor(18), 32);
        assert_eq!(age_factor(29), 32);
        assert_eq!(age_factor(30), 28);
        assert_eq!(age_factor(49), 28);
        assert_eq!(age_factor(50), 15);
        assert_eq!(age_factor(69), 15);
        assert_eq!(age_factor(70), 2);
        assert_eq!(age_factor(120), 2);
    }

    #[test]
    fn test_food_score_classification() {
        let foods = vec!["apple".to_string(), "pizza".to_string()];
        assert_eq!(food_score(&foods), 70);

        let unknown = vec!["gravel".to_string()];
        assert_eq!(food_score(&unknown), 0);
    }

    #[test]
    fn test_food_score_counts_duplicates() {
        let foods = vec!["soda".to_string(), "soda".to_string(), "soda".to_string()];
        assert_eq!(food_score(&foods), -90);
    }

    #[test]
    fn test_food_score_normalizes_case() {
        let foods = vec!["Apple".to_string(), "SODA".to_string()];
        assert_eq!(food_score(&foods), 70);
    }

    #[test]
    fn test_fixed_jitter_pins_prediction() {
        // age 25, no foods: total = 32, days = 160 + jitter
        for k in 0..5 {
            let mut jitter = FixedJitter(k);
            assert_eq!(compute_survival_days(25, &[], &mut jitter), 160 + k);
        }
    }

    #[test]
    fn test_uniform_jitter_stays_in_range() {
        let mut jitter = UniformJitter(StdRng::seed_from_u64(7));
        for _ in 0..200 {
            assert!(jitter.draw() < JITTER_SPAN);
        }
    }

    #[test]
    fn test_survival_days_clamped_low() {
        // age 80 (factor 2) + four junk foods: 2 - 120 = -118 -> negative raw
        let feast: Vec<String> = ["soda", "chips", "candy", "cookies"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut jitter = FixedJitter(4);
        assert_eq!(compute_survival_days(80, &feast, &mut jitter), 0);
    }

    #[test]
    fn test_survival_days_clamped_high() {
        // 30 healthy entries: 45 + 3000 = 3045 -> 15225 raw, capped at 14600
        let feast: Vec<String> = std::iter::repeat("apple".to_string()).take(30).collect();
        let mut jitter = FixedJitter(0);
        assert_eq!(compute_survival_days(5, &feast, &mut jitter), MAX_SURVIVAL_DAYS);
    }

    #[test]
    fn test_display_days_cap() {
        assert_eq!(display_days(0), 0);
        assert_eq!(display_days(7), 7);
        assert_eq!(display_days(10), 10);
        assert_eq!(display_days(14600), 10);
    }

    #[test]
    fn test_meter_percent() {
        use assert_float_eq::assert_float_absolute_eq;
        assert_float_absolute_eq!(meter_percent(0), 0.0, 1e-9);
        assert_float_absolute_eq!(meter_percent(5), 50.0, 1e-9);
        assert_float_absolute_eq!(meter_percent(10), 100.0, 1e-9);
    }
}
