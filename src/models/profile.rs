use serde::{Deserialize, Serialize};

use crate::catalog::locations;
use crate::error::{FeastError, Result};

/// One doom-form submission.
///
/// Built fresh per prediction and never mutated afterwards; there is no
/// session state beyond this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Gender")]
    pub gender: String,

    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "State")]
    pub state: String,

    #[serde(rename = "City")]
    pub city: String,

    /// Lowercase food identifiers. Duplicates permitted; order irrelevant to
    /// scoring.
    #[serde(rename = "Foods")]
    pub foods: Vec<String>,
}

impl UserProfile {
    /// All fields of doom must be completed, with at least one feast food.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FeastError::InvalidInput("name must not be empty".to_string()));
        }
        if self.gender.trim().is_empty() {
            return Err(FeastError::InvalidInput(
                "gender must not be empty".to_string(),
            ));
        }
        locations::validate_location(&self.country, &self.state, &self.city)?;
        if self.foods.is_empty() {
            return Err(FeastError::InvalidInput(
                "choose at least one food for the final feast".to_string(),
            ));
        }
        Ok(())
    }
}
