use crate::catalog::foods;
use crate::models::FoodPoints;

/// Legacy nutrition points for a single food (five-way display categories).
///
/// Unknown identifiers are worth 0 (silently ignored, not an error).
pub fn nutrition_points(food: &str) -> i32 {
    foods::category_of(&food.to_lowercase())
        .map(|c| c.points())
        .unwrap_or(0)
}

/// Per-food nutrition report plus its total.
///
/// Display only: this total never feeds the survival formula, which uses the
/// scorer's own two-way classification.
pub fn nutrition_breakdown(selected: &[String]) -> (Vec<FoodPoints>, i32) {
    let mut items = Vec::with_capacity(selected.len());
    let mut total = 0;

    for food in selected {
        let points = nutrition_points(food);
        total += points;
        items.push(FoodPoints {
            food: food.clone(),
            points,
        });
    }

    (items, total)
}
