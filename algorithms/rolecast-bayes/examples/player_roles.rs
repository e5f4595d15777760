use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use rolecast::prelude::*;
use rolecast_bayes::FeatureNb;

/// Train a role classifier on one half of a player-stat table and validate it on the other
#[derive(Parser, Debug)]
#[command(name = "player_roles")]
struct Args {
    /// Headered CSV table of player statistics with a `role` column
    path: PathBuf,
    /// Seed of the shuffle before the split
    #[arg(default_value_t = 42)]
    seed: u64,
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    let Args { path, seed } = Args::parse();

    // Read in the player statistics and build labelled feature sets
    let records = rolecast_datasets::player_stats(&path)?;
    let extractor = PlayerExtractor::params().check()?;
    let dataset = rolecast_datasets::labelled::<Role, _>(&records, &extractor, "role")?;

    // Shuffle and use one half for training, the other for validation
    let mut rng = SmallRng::seed_from_u64(seed);
    let (train, valid) = dataset.shuffle(&mut rng).split_with_ratio(0.5);

    // Train the model
    let model = FeatureNb::params().train(&train)?;

    // Predict the validation dataset
    let pred = model.predict(&valid);

    // Construct confusion matrix
    let cm = pred.confusion_matrix(&valid)?;

    println!("{:?}", cm);
    println!("accuracy {:.2}%", cm.accuracy() * 100.0);

    println!("top features:");
    for report in model.present_features(10)? {
        println!("  {}", report);
    }

    Ok(())
}
