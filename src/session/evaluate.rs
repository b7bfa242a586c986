use crate::error::Result;
use crate::models::{SurvivalReport, UserProfile};
use crate::scoring::{
    JitterSource, compute_survival_days, display_days, nutrition_breakdown,
};
use crate::simulation::{banner_message, classify, format_time_display, scene_directives, state_message};

/// Run one full scoring pass for a submitted profile.
///
/// Validates the profile, computes survival days (with the supplied jitter
/// source), classifies the uncapped value, and assembles the report the
/// presentation layer renders.
pub fn evaluate(profile: &UserProfile, jitter: &mut dyn JitterSource) -> Result<SurvivalReport> {
    profile.validate()?;

    let survival_days = compute_survival_days(profile.age, &profile.foods, jitter);
    let display = display_days(survival_days);
    let state = classify(survival_days);
    let (breakdown, total_points) = nutrition_breakdown(&profile.foods);

    Ok(SurvivalReport {
        survival_days,
        display_days: display,
        state,
        message: state_message(state, survival_days),
        time_display: format_time_display(survival_days),
        banner: banner_message(display),
        directives: scene_directives(survival_days),
        breakdown,
        total_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::FixedJitter;
    use crate::simulation::LifeState;

    fn sample_profile(foods: &[&str]) -> UserProfile {
        UserProfile {
            name: "Gomez".to_string(),
            age: 25,
            gender: "Male".to_string(),
            country: "Canada".to_string(),
            state: "Ontario".to_string(),
            city: "Toronto".to_string(),
            foods: foods.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_evaluate_full_report() {
        // 32 + (100 - 30) = 102 -> 510 + 3 = 513 days
        let profile = sample_profile(&["apple", "pizza"]);
        let report = evaluate(&profile, &mut FixedJitter(3)).unwrap();

        assert_eq!(report.survival_days, 513);
        assert_eq!(report.display_days, 10);
        assert_eq!(report.state, LifeState::Thriving);
        assert_eq!(report.time_display, "1 year, 4 months, 28 days");
        assert!(report.message.as_deref().unwrap().contains("paying off"));
        assert_eq!(report.directives.figure, "moving");
        assert_eq!(report.total_points, 1);
        assert_eq!(report.breakdown.len(), 2);
    }

    #[test]
    fn test_evaluate_rejects_invalid_profile() {
        let mut profile = sample_profile(&["apple"]);
        profile.foods.clear();
        assert!(evaluate(&profile, &mut FixedJitter(0)).is_err());
    }

    #[test]
    fn test_display_cap_never_classifies() {
        // age 80, one soda: 2 - 30 = -28 -> clamped to 0
        let mut profile = sample_profile(&["soda"]);
        profile.age = 80;
        let report = evaluate(&profile, &mut FixedJitter(0)).unwrap();
        assert_eq!(report.survival_days, 0);
        assert_eq!(report.state, LifeState::Deceased);

        // Thriving despite the meter pinning at 10
        let report = evaluate(&sample_profile(&["apple"]), &mut FixedJitter(0)).unwrap();
        assert_eq!(report.display_days, 10);
        assert_eq!(report.state, LifeState::Thriving);
        assert!(report.survival_days > 15);
    }
}
