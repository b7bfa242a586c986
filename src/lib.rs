pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;
pub mod session;
pub mod simulation;

pub use error::{FeastError, Result};
pub use models::{FoodPoints, SurvivalReport, UserProfile};
