pub mod classify;
pub mod format;

pub use classify::{LifeState, SceneDirectives, classify, scene_directives};
pub use format::{banner_message, format_time_display, state_message};
