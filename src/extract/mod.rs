//! Feature extraction from raw player records
//!
//! A [`PlayerExtractor`] turns one [`Record`] into a [`FeatureSet`] made of
//!
//! * an identity feature `player=<name>`,
//! * an identity feature `map=<name>`,
//! * threshold flags `kills>N`, `first_kills>N` and `assists>N`, emitted only when the
//!   corresponding count is strictly greater than the configured cutoff `N`.
//!
//! The cutoff is part of the feature name, so feature sets built with different thresholds never
//! share threshold features.
mod hyperparams;

pub use hyperparams::{PlayerColumns, PlayerExtractor, PlayerExtractorParams};

use crate::dataset::{Feature, FeatureSet, FeatureValue};
use crate::error::Result;
use crate::record::Record;
use crate::traits::Extractable;

impl PlayerExtractor {
    /// Create a default parameter set for player feature extraction
    pub fn params() -> PlayerExtractorParams {
        PlayerExtractorParams::new()
    }
}

fn threshold_flag(prefix: &str, value: f64, threshold: f64) -> Option<Feature> {
    if value > threshold {
        Some(Feature::flag(format!("{}>{}", prefix, threshold)))
    } else {
        None
    }
}

impl<L> Extractable<Record, L> for PlayerExtractor {
    fn build(&self, record: &Record, known_label: Option<L>) -> Result<FeatureSet<L>> {
        let columns = &self.columns;

        let player = record.text(&columns.player)?;
        let map = record.text(&columns.map)?;
        let kills = record.number(&columns.kills)?;
        let first_kills = record.number(&columns.first_kills)?;
        let assists = record.number(&columns.assists)?;

        let mut features = vec![
            Feature::new(
                format!("player={}", player),
                FeatureValue::Token(player.to_string()),
            ),
            Feature::new(format!("map={}", map), FeatureValue::Token(map.to_string())),
        ];

        features.extend(
            vec![
                threshold_flag("kills", kills, self.kill_threshold),
                threshold_flag("first_kills", first_kills, self.first_kill_threshold),
                threshold_flag("assists", assists, self.assist_threshold),
            ]
            .into_iter()
            .flatten(),
        );

        Ok(FeatureSet::new(features, known_label))
    }
}
