use crate::catalog::foods::{self, FoodCategory};
use crate::models::{SurvivalReport, UserProfile};
use crate::scoring::meter_percent;
use crate::simulation::{SceneDirectives, scene_directives};

/// Character width of the survival meter bar.
const METER_WIDTH: usize = 20;

/// Display the submitted profile with the feast grouped by category.
pub fn display_summary(profile: &UserProfile) {
    println!();
    println!("=== Your Fate Summary ===");
    println!();
    println!("Name: {}", profile.name);
    println!("Age: {} years", profile.age);
    println!("Gender: {}", profile.gender);
    println!(
        "Location: {}, {}, {}",
        profile.city, profile.state, profile.country
    );
    println!();
    println!("Final Feast:");

    for category in FoodCategory::ALL {
        let in_category: Vec<String> = profile
            .foods
            .iter()
            .filter(|f| foods::category_of(&f.to_lowercase()) == Some(category))
            .map(|f| foods::display_name(f))
            .collect();

        if !in_category.is_empty() {
            println!("  {}: {}", category.label(), in_category.join(", "));
        }
    }
    println!();
}

/// Display the full survival report.
pub fn display_report(report: &SurvivalReport) {
    println!();
    println!("=== Survival Results ===");
    println!();
    println!("{}", report.banner);
    if let Some(message) = &report.message {
        println!("{}", message);
    }
    println!();
    println!("Predicted Survival Time: {}", report.time_display);
    println!("Total Days: {}", group_digits(report.survival_days));
    println!("Survival Meter: {}", render_meter(report.display_days));
    println!();

    display_breakdown(report);
}

/// Nutrition breakdown table with the legacy point values.
fn display_breakdown(report: &SurvivalReport) {
    if report.breakdown.is_empty() {
        return;
    }

    println!("--- Nutrition Breakdown (display only) ---");

    let max_name_len = report
        .breakdown
        .iter()
        .map(|item| item.food.len())
        .max()
        .unwrap_or(10);

    for item in &report.breakdown {
        let sign = if item.points >= 0 { "+" } else { "" };
        println!(
            "  {:<width$}  {}{}",
            foods::display_name(&item.food),
            sign,
            item.points,
            width = max_name_len
        );
    }

    let total_sign = if report.total_points >= 0 { "+" } else { "" };
    println!("  Total points: {}{}", total_sign, report.total_points);
    println!();
}

/// Display classification and renderer directives for a raw day count.
pub fn display_classification(days: u32, report_message: Option<&str>, time_display: &str) {
    let directives: SceneDirectives = scene_directives(days);

    println!("Days: {}", group_digits(days));
    println!("State: {}", crate::simulation::classify(days));
    println!("Time display: {}", time_display);
    match report_message {
        Some(msg) => println!("Message: {}", msg),
        None => println!("Message: (none; silent by design)"),
    }
    println!("Figure directive: {}", directives.figure);
    println!(
        "Coffin directive: {}",
        directives.coffin.unwrap_or("(none)")
    );
    println!(
        "Banner directive: {}",
        directives.banner.unwrap_or("(none)")
    );
}

/// Display the food catalog with points per category.
pub fn display_catalog() {
    println!();
    println!("=== Food Catalog ===");

    for category in FoodCategory::ALL {
        let points = category.points();
        let sign = if points >= 0 { "+" } else { "" };
        println!();
        println!("{} ({}{} each):", category.label(), sign, points);

        for food in foods::foods_in(category) {
            println!("  {}", foods::display_name(food));
        }
    }
    println!();
}

/// ASCII meter bar: `[########------------] 40%`.
fn render_meter(display_days: u32) -> String {
    let pct = meter_percent(display_days);
    let filled = ((pct / 100.0) * METER_WIDTH as f64).round() as usize;
    let filled = filled.min(METER_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(METER_WIDTH - filled),
        pct
    )
}

/// Thousands-separated day count, e.g. "14,600".
fn group_digits(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(513), "513");
        assert_eq!(group_digits(14600), "14,600");
    }

    #[test]
    fn test_render_meter_bounds() {
        assert_eq!(render_meter(0), "[--------------------] 0%");
        assert_eq!(render_meter(10), "[####################] 100%");
        assert_eq!(render_meter(5), "[##########----------] 50%");
    }
}
