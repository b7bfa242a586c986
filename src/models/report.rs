use crate::simulation::{LifeState, SceneDirectives};

/// Per-food line of the legacy nutrition report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodPoints {
    pub food: String,
    pub points: i32,
}

/// Everything the presentation layer consumes from one scoring pass.
///
/// Created fresh per submission; no caching, no history.
#[derive(Debug, Clone)]
pub struct SurvivalReport {
    /// Uncapped survival days in [0, 14600].
    pub survival_days: u32,

    /// Meter value, capped at 10. Never used for classification.
    pub display_days: u32,

    pub state: LifeState,

    /// State narrative, `None` for the entombed range.
    pub message: Option<String>,

    /// Formatted span, e.g. "1 year, 1 month, 5 days".
    pub time_display: String,

    /// Five-tier results banner chosen from the capped value.
    pub banner: &'static str,

    /// Opaque labels for the external renderer.
    pub directives: SceneDirectives,

    /// Legacy nutrition report; display only.
    pub breakdown: Vec<FoodPoints>,
    pub total_points: i32,
}
