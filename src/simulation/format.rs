use crate::scoring::constants::{DAYS_PER_MONTH, DAYS_PER_YEAR};
use crate::simulation::classify::LifeState;

/// Human-readable span for a day count, e.g. "1 year, 1 month, 5 days".
///
/// Counts under 30 stay in days. Larger counts decompose into years (365),
/// months (30) and leftover days, emitting only non-zero components. The
/// pluralization is deliberately asymmetric (year/month pluralize on `> 1`,
/// the day unit on `!= 1`) and the day component is forced when both years
/// and months are zero. Downstream text compares against these exact strings.
pub fn format_time_display(total_days: u32) -> String {
    if total_days == 0 {
        return "0 days".to_string();
    }
    if total_days < DAYS_PER_MONTH {
        return format!(
            "{} day{}",
            total_days,
            if total_days != 1 { "s" } else { "" }
        );
    }

    let years = total_days / DAYS_PER_YEAR;
    let remainder = total_days % DAYS_PER_YEAR;
    let months = remainder / DAYS_PER_MONTH;
    let final_days = remainder % DAYS_PER_MONTH;

    let mut out = String::new();
    if years > 0 {
        out.push_str(&format!("{} year{}", years, if years > 1 { "s" } else { "" }));
        if months > 0 || final_days > 0 {
            out.push_str(", ");
        }
    }
    if months > 0 {
        out.push_str(&format!(
            "{} month{}",
            months,
            if months > 1 { "s" } else { "" }
        ));
        if final_days > 0 {
            out.push_str(", ");
        }
    }
    if final_days > 0 || (years == 0 && months == 0) {
        out.push_str(&format!(
            "{} day{}",
            final_days,
            if final_days != 1 { "s" } else { "" }
        ));
    }
    out
}

/// Narrative message attached to a classification, from the uncapped days.
///
/// Entombed is silent by design; no warning is shown for 1-15 days.
pub fn state_message(state: LifeState, days: u32) -> Option<String> {
    match state {
        LifeState::Thriving => Some(format!(
            "You have {} of survival! Your healthy choices are paying off!",
            format_time_display(days)
        )),
        LifeState::Entombed => None,
        LifeState::Deceased => {
            Some("DEATH: Your time has come! The reaper claims another soul!".to_string())
        }
    }
}

/// Results-banner line, chosen from the capped meter value (0..=10).
///
/// Independent of the classify table; both message sets are part of the
/// output contract.
pub fn banner_message(display_days: u32) -> &'static str {
    match display_days {
        0 => "💀 IMMEDIATE DOOM! Your soul has been consumed!",
        1 => "⚰️ Death knocks at your door...",
        2 => "👻 The coffin awaits your arrival...",
        3..=5 => "🌙 You walk in the shadow of death...",
        _ => "✨ You have defied the darkness... for now.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::classify::classify;

    #[test]
    fn test_format_short_spans() {
        assert_eq!(format_time_display(0), "0 days");
        assert_eq!(format_time_display(1), "1 day");
        assert_eq!(format_time_display(2), "2 days");
        assert_eq!(format_time_display(29), "29 days");
    }

    #[test]
    fn test_format_decomposition() {
        assert_eq!(format_time_display(30), "1 month");
        assert_eq!(format_time_display(60), "2 months");
        assert_eq!(format_time_display(365), "1 year");
        assert_eq!(format_time_display(366), "1 year, 1 day");
        assert_eq!(format_time_display(395), "1 year, 1 month");
        assert_eq!(format_time_display(400), "1 year, 1 month, 5 days");
        assert_eq!(format_time_display(730), "2 years");
        assert_eq!(format_time_display(14600), "40 years");
    }

    #[test]
    fn test_state_messages() {
        let msg = state_message(classify(400), 400).unwrap();
        assert_eq!(
            msg,
            "You have 1 year, 1 month, 5 days of survival! Your healthy choices are paying off!"
        );

        assert_eq!(state_message(classify(8), 8), None);

        assert_eq!(
            state_message(classify(0), 0).unwrap(),
            "DEATH: Your time has come! The reaper claims another soul!"
        );
    }

    #[test]
    fn test_banner_tiers() {
        assert_eq!(banner_message(0), "💀 IMMEDIATE DOOM! Your soul has been consumed!");
        assert_eq!(banner_message(1), "⚰️ Death knocks at your door...");
        assert_eq!(banner_message(2), "👻 The coffin awaits your arrival...");
        assert_eq!(banner_message(3), "🌙 You walk in the shadow of death...");
        assert_eq!(banner_message(5), "🌙 You walk in the shadow of death...");
        assert_eq!(banner_message(6), "✨ You have defied the darkness... for now.");
        assert_eq!(banner_message(10), "✨ You have defied the darkness... for now.");
    }
}
