use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::UserProfile;

/// Load a saved profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Save a profile to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_roundtrip() {
        let profile = UserProfile {
            name: "Wednesday".to_string(),
            age: 17,
            gender: "Female".to_string(),
            country: "United States".to_string(),
            state: "New York".to_string(),
            city: "Albany".to_string(),
            foods: vec!["kale".to_string(), "chips".to_string()],
        };

        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &profile).unwrap();

        let reloaded = load_profile(file.path()).unwrap();
        assert_eq!(reloaded.name, "Wednesday");
        assert_eq!(reloaded.age, 17);
        assert_eq!(reloaded.foods, profile.foods);
    }

    #[test]
    fn test_load_uses_renamed_fields() {
        let json = r#"{
            "Name": "Lurch",
            "Age": 42,
            "Gender": "Male",
            "Country": "Canada",
            "State": "Quebec",
            "City": "Laval",
            "Foods": ["salmon"]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.name, "Lurch");
        assert_eq!(profile.age, 42);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_profile("no_such_profile.json").is_err());
    }
}
