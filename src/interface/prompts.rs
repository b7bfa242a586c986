use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::{foods, locations};
use crate::error::{FeastError, Result};
use crate::models::UserProfile;

const GENDER_OPTIONS: [&str; 3] = ["Female", "Male", "Other"];

/// Minimum jaro-winkler score for a fuzzy food match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Prompt for the victim's name.
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("What is your name, doomed one?")
        .interact_text()?;

    let name = input.trim().to_string();
    if name.is_empty() {
        return Err(FeastError::InvalidInput("name must not be empty".to_string()));
    }
    Ok(name)
}

/// Prompt for age. Negative or non-integer input is rejected, not clamped.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new().with_prompt("How many years old?").interact_text()?;

    input
        .trim()
        .parse::<u32>()
        .map_err(|_| FeastError::InvalidAge(input.trim().to_string()))
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&GENDER_OPTIONS)
        .default(0)
        .interact()?;

    Ok(GENDER_OPTIONS[selection].to_string())
}

/// Chained country -> state -> city selection from the location catalog.
pub fn prompt_location() -> Result<(String, String, String)> {
    let countries = locations::countries();
    let country_idx = Select::new()
        .with_prompt("Country")
        .items(&countries)
        .default(0)
        .interact()?;
    let country = countries[country_idx];

    let states = locations::states_of(country);
    let state_idx = Select::new()
        .with_prompt("State/Province")
        .items(&states)
        .default(0)
        .interact()?;
    let state = states[state_idx];

    let cities = locations::cities_of(country, state);
    let city_idx = Select::new()
        .with_prompt("City")
        .items(&cities)
        .default(0)
        .interact()?;
    let city = cities[city_idx];

    Ok((country.to_string(), state.to_string(), city.to_string()))
}

/// Collect the final feast by typed entry with fuzzy matching.
///
/// Exact catalog matches are added directly; near misses go through a
/// confirm/select flow. Empty input finishes once at least one food is in.
pub fn prompt_foods() -> Result<Vec<String>> {
    let catalog = foods::all_foods();
    let mut selected: Vec<String> = Vec::new();

    println!("Choose your final feast (42 foods in the catalog; empty entry finishes).");

    loop {
        let input: String = Input::new()
            .with_prompt("Add a food")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            if selected.is_empty() {
                println!("Choose at least one food for your final feast!");
                continue;
            }
            break;
        }

        // Exact match first
        if catalog.contains(&input.as_str()) {
            println!("Added: {}", foods::display_name(&input));
            selected.push(input);
            continue;
        }

        // Fuzzy match against the catalog
        let mut candidates: Vec<(&str, f64)> = catalog
            .iter()
            .map(|f| (*f, jaro_winkler(f, &input)))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", foods::display_name(food)))
                .default(true)
                .interact()?;

            if confirm {
                println!("Added: {}", foods::display_name(food));
                selected.push(food.to_string());
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(f, _)| foods::display_name(f))
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                let food = candidates[selection].0;
                println!("Added: {}", foods::display_name(food));
                selected.push(food.to_string());
            }
        }
    }

    Ok(selected)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the whole doom form and build a validated profile.
pub fn collect_profile() -> Result<UserProfile> {
    let name = prompt_name()?;
    let age = prompt_age()?;
    let gender = prompt_gender()?;
    let (country, state, city) = prompt_location()?;
    let foods = prompt_foods()?;

    let profile = UserProfile {
        name,
        age,
        gender,
        country,
        state,
        city,
        foods,
    };
    profile.validate()?;
    Ok(profile)
}
