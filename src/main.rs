//! Breedstats - Dog Breed Registration Analysis & Terminal Statistics Viewer
//!
//! Loads the Calgary dog breed registration spreadsheet, asks for a breed on
//! the terminal, and prints descriptive statistics about it.

mod console;
mod data;
mod stats;

use anyhow::{Context, Result};

use stats::StatsCalculator;

/// Registration spreadsheet, resolved relative to the working directory.
const DATA_FILE: &str = "CalgaryDogBreeds.csv";

fn main() -> Result<()> {
    env_logger::init();

    let table = data::load_registrations(DATA_FILE)
        .with_context(|| format!("failed to load registration data from {DATA_FILE}"))?;

    println!("\nDogs of Calgary Breed Statistics");

    let breed = console::prompt_for_breed(&table)?;
    let report = StatsCalculator::breed_report(&table, &breed)?;
    console::print_report(&report);

    Ok(())
}
