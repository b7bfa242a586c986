use crate::error::{FeastError, Result};

/// Country -> state/province -> cities, in dropdown order.
pub const LOCATIONS: &[(&str, &[(&str, &[&str])])] = &[
    (
        "United States",
        &[
            ("California", &["Los Angeles", "San Francisco", "San Diego"]),
            ("New York", &["New York City", "Albany", "Buffalo"]),
            ("Texas", &["Houston", "Dallas", "Austin"]),
        ],
    ),
    (
        "India",
        &[
            ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai"]),
            ("Maharashtra", &["Mumbai", "Pune", "Nagpur"]),
            ("Karnataka", &["Bangalore", "Mysore", "Mangalore"]),
        ],
    ),
    (
        "United Kingdom",
        &[
            ("England", &["London", "Manchester", "Birmingham"]),
            ("Scotland", &["Edinburgh", "Glasgow", "Aberdeen"]),
            ("Wales", &["Cardiff", "Swansea", "Newport"]),
        ],
    ),
    (
        "Canada",
        &[
            ("Ontario", &["Toronto", "Ottawa", "Hamilton"]),
            ("Quebec", &["Montreal", "Quebec City", "Laval"]),
            ("British Columbia", &["Vancouver", "Victoria", "Burnaby"]),
        ],
    ),
];

/// All known countries.
pub fn countries() -> Vec<&'static str> {
    LOCATIONS.iter().map(|(country, _)| *country).collect()
}

/// States/provinces of a country.
pub fn states_of(country: &str) -> Vec<&'static str> {
    LOCATIONS
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, states)| states.iter().map(|(s, _)| *s).collect())
        .unwrap_or_default()
}

/// Cities of a state within a country.
pub fn cities_of(country: &str, state: &str) -> Vec<&'static str> {
    LOCATIONS
        .iter()
        .find(|(c, _)| *c == country)
        .and_then(|(_, states)| states.iter().find(|(s, _)| *s == state))
        .map(|(_, cities)| cities.to_vec())
        .unwrap_or_default()
}

/// Check that a country/state/city triple exists in the catalog.
pub fn validate_location(country: &str, state: &str, city: &str) -> Result<()> {
    if cities_of(country, state).contains(&city) {
        Ok(())
    } else {
        Err(FeastError::UnknownLocation(format!(
            "{city}, {state}, {country}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries() {
        let countries = countries();
        assert_eq!(countries.len(), 4);
        assert_eq!(countries[0], "United States");
    }

    #[test]
    fn test_chained_lookup() {
        let states = states_of("India");
        assert_eq!(states, vec!["Tamil Nadu", "Maharashtra", "Karnataka"]);

        let cities = cities_of("India", "Karnataka");
        assert_eq!(cities, vec!["Bangalore", "Mysore", "Mangalore"]);
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        assert!(states_of("Atlantis").is_empty());
        assert!(cities_of("Canada", "Narnia").is_empty());
    }

    #[test]
    fn test_validate_location() {
        assert!(validate_location("Canada", "Ontario", "Toronto").is_ok());
        assert!(validate_location("Canada", "Ontario", "Chennai").is_err());
        assert!(validate_location("Canada", "Quebec", "Toronto").is_err());
    }
}
