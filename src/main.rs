use clap::Parser;
use std::path::Path;

use final_feast_rs::catalog::foods::{self, FoodCategory};
use final_feast_rs::cli::{Cli, Command};
use final_feast_rs::error::Result;
use final_feast_rs::interface::{
    collect_profile, display_catalog, display_classification, display_report, display_summary,
    prompt_yes_no,
};
use final_feast_rs::scoring::thread_jitter;
use final_feast_rs::session::{evaluate, load_profile, save_profile};
use final_feast_rs::simulation::{classify, format_time_display, state_message};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Predict => cmd_predict(&cli.file),
        Command::Replay => cmd_replay(&cli.file),
        Command::Classify { days } => cmd_classify(days),
        Command::Catalog => cmd_catalog(),
        Command::Export { output } => cmd_export(&output),
    }
}

/// Fill the doom form, predict survival, render the results.
fn cmd_predict(file_path: &str) -> Result<()> {
    let profile = collect_profile()?;

    display_summary(&profile);

    let mut jitter = thread_jitter();
    let report = evaluate(&profile, &mut jitter)?;
    display_report(&report);

    let save = prompt_yes_no("Save your fate for a replay?", true)?;
    if save {
        save_profile(file_path, &profile)?;
        println!("Profile saved to {}.", file_path);
    }

    Ok(())
}

/// Re-run the prediction for a saved profile. The jitter is drawn fresh, so
/// the outcome can differ by a few days.
fn cmd_replay(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Profile file not found: {}", file_path);
        eprintln!("Run 'predict' first and save your fate.");
        return Ok(());
    }

    let profile = load_profile(path)?;
    println!("Replaying the fate of {}...", profile.name);

    display_summary(&profile);

    let mut jitter = thread_jitter();
    let report = evaluate(&profile, &mut jitter)?;
    display_report(&report);

    Ok(())
}

/// Classify a raw day count without filling the form.
fn cmd_classify(days: u32) -> Result<()> {
    let state = classify(days);
    let message = state_message(state, days);
    let time_display = format_time_display(days);

    display_classification(days, message.as_deref(), &time_display);
    Ok(())
}

fn cmd_catalog() -> Result<()> {
    display_catalog();
    Ok(())
}

/// Export the food catalog to CSV: both the display category with its legacy
/// points and the scorer's two-way classification.
fn cmd_export(output: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output)?;

    wtr.write_record(["food", "category", "points", "scoring_class"])?;

    for category in FoodCategory::ALL {
        for food in foods::foods_in(category) {
            let scoring_class = if foods::is_healthy(food) {
                "healthy"
            } else if foods::is_unhealthy(food) {
                "unhealthy"
            } else {
                "neutral"
            };

            wtr.write_record([
                food.to_string(),
                category.id().to_string(),
                category.points().to_string(),
                scoring_class.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    println!("Catalog exported to {}.", output);
    Ok(())
}
