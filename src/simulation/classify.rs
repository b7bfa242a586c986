use crate::scoring::constants::THRIVING_THRESHOLD;

/// Discrete life-cycle state derived from the uncapped survival-day count.
///
/// The partition is exhaustive and non-overlapping: exactly one state holds
/// for any day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    /// More than 15 days. The figure approaches the coffin but stays out.
    Thriving,
    /// 1 to 15 days inclusive. The figure ends up inside the coffin.
    Entombed,
    /// 0 days.
    Deceased,
}

impl LifeState {
    /// Opaque label the renderer applies to the figure.
    pub fn directive(self) -> &'static str {
        match self {
            LifeState::Thriving => "moving",
            LifeState::Entombed => "in-coffin",
            LifeState::Deceased => "dead",
        }
    }
}

impl std::fmt::Display for LifeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifeState::Thriving => "Thriving",
            LifeState::Entombed => "Entombed",
            LifeState::Deceased => "Deceased",
        };
        write!(f, "{name}")
    }
}

/// Classify a survival-day count.
///
/// Recomputed fresh from `days` alone; a classifier, not a stateful machine.
/// Callers must pass the uncapped value, never the meter display value.
pub fn classify(days: u32) -> LifeState {
    if days > THRIVING_THRESHOLD {
        LifeState::Thriving
    } else if days >= 1 {
        LifeState::Entombed
    } else {
        LifeState::Deceased
    }
}

/// Presentation directives for the external renderer.
///
/// The figure always carries a class; the coffin joins it only once the
/// figure is entombed or dead, and the results banner only highlights the
/// thriving and deceased extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneDirectives {
    pub figure: &'static str,
    pub coffin: Option<&'static str>,
    pub banner: Option<&'static str>,
}

/// Full directive set for a survival-day count.
pub fn scene_directives(days: u32) -> SceneDirectives {
    match classify(days) {
        LifeState::Thriving => SceneDirectives {
            figure: "moving",
            coffin: None,
            banner: Some("health-good"),
        },
        LifeState::Entombed => SceneDirectives {
            figure: "in-coffin",
            coffin: Some("in-coffin"),
            banner: None,
        },
        LifeState::Deceased => SceneDirectives {
            figure: "dead",
            coffin: Some("dead"),
            banner: Some("health-danger"),
        },
    }
}
