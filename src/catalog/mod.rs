pub mod foods;
pub mod locations;

pub use foods::{FoodCategory, all_foods, category_of, display_name, foods_in, is_healthy, is_unhealthy};
pub use locations::{cities_of, countries, states_of, validate_location};
