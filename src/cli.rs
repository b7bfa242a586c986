use clap::{Parser, Subcommand};

/// FinalFeast — a spooky survival-days predictor driven by age and diet.
#[derive(Parser, Debug)]
#[command(name = "final_feast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved profile JSON file.
    #[arg(short, long, default_value = "fate_profile.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill the doom form and predict your survival days.
    Predict,

    /// Re-run the prediction for a previously saved profile.
    Replay,

    /// Classify a raw survival-day count without filling the form.
    Classify {
        /// Survival days to classify.
        #[arg(long)]
        days: u32,
    },

    /// Show the food catalog with nutrition points.
    Catalog,

    /// Export the food catalog to CSV.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "food_catalog.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Predict
    }
}
