pub mod breakdown;
pub mod constants;
pub mod survival;

pub use breakdown::{nutrition_breakdown, nutrition_points};
pub use constants::*;
pub use survival::{
    FixedJitter, JitterSource, UniformJitter, age_factor, compute_survival_days, display_days,
    food_score, meter_percent, thread_jitter, total_health_score,
};
