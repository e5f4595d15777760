use crate::error::{Error, Result};
use crate::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Column names read from a raw player record
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", default)
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerColumns {
    pub player: String,
    pub map: String,
    pub kills: String,
    pub first_kills: String,
    pub assists: String,
}

impl Default for PlayerColumns {
    fn default() -> Self {
        PlayerColumns {
            player: "player".to_string(),
            map: "map".to_string(),
            kills: "kill".to_string(),
            first_kills: "fk".to_string(),
            assists: "assist".to_string(),
        }
    }
}

impl PlayerColumns {
    fn iter(&self) -> impl Iterator<Item = &str> {
        vec![
            self.player.as_str(),
            self.map.as_str(),
            self.kills.as_str(),
            self.first_kills.as_str(),
            self.assists.as_str(),
        ]
        .into_iter()
    }
}

/// A verified parameter set ready to extract features from player records
///
/// See [`PlayerExtractorParams`] for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerExtractor {
    pub(crate) kill_threshold: f64,
    pub(crate) first_kill_threshold: f64,
    pub(crate) assist_threshold: f64,
    pub(crate) columns: PlayerColumns,
}

/// A parameter set for player feature extraction during construction
///
/// The parameter set can be verified into a [`PlayerExtractor`] by calling
/// [ParamGuard::check](Self::check). It is also possible to directly build feature sets with
/// [Extractable::build](crate::traits::Extractable::build) which implicitly verifies the
/// parameter set prior to the extraction and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [kill_threshold](Self::kill_threshold) | `14` | Emit `kills>N` if the kill count exceeds `N` | `[0, inf)` |
/// | [first_kill_threshold](Self::first_kill_threshold) | `2` | Emit `first_kills>N` if the first-kill count exceeds `N` | `[0, inf)` |
/// | [assist_threshold](Self::assist_threshold) | `6` | Emit `assists>N` if the assist count exceeds `N` | `[0, inf)` |
/// | [columns](Self::columns) | see [`PlayerColumns`] | Names of the raw columns | non-empty |
///
/// # Errors
///
/// Returns [`Parameters`](Error::Parameters) if a threshold is negative or not finite, or if a
/// column name is empty.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerExtractorParams(PlayerExtractor);

impl Default for PlayerExtractorParams {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerExtractorParams {
    pub fn new() -> Self {
        Self(PlayerExtractor {
            kill_threshold: 14.0,
            first_kill_threshold: 2.0,
            assist_threshold: 6.0,
            columns: PlayerColumns::default(),
        })
    }

    /// Set the kill count above which `kills>N` fires
    pub fn kill_threshold(mut self, kill_threshold: f64) -> Self {
        self.0.kill_threshold = kill_threshold;
        self
    }

    /// Set the first-kill count above which `first_kills>N` fires
    pub fn first_kill_threshold(mut self, first_kill_threshold: f64) -> Self {
        self.0.first_kill_threshold = first_kill_threshold;
        self
    }

    /// Set the assist count above which `assists>N` fires
    pub fn assist_threshold(mut self, assist_threshold: f64) -> Self {
        self.0.assist_threshold = assist_threshold;
        self
    }

    pub fn columns(mut self, columns: PlayerColumns) -> Self {
        self.0.columns = columns;
        self
    }
}

impl PlayerExtractor {
    pub fn kill_threshold(&self) -> f64 {
        self.kill_threshold
    }

    pub fn first_kill_threshold(&self) -> f64 {
        self.first_kill_threshold
    }

    pub fn assist_threshold(&self) -> f64 {
        self.assist_threshold
    }

    pub fn columns(&self) -> &PlayerColumns {
        &self.columns
    }
}

fn check_threshold(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        Err(Error::Parameters(format!(
            "{} should be finite and non-negative, but is {}",
            name, value
        )))
    } else {
        Ok(())
    }
}

impl ParamGuard for PlayerExtractorParams {
    type Checked = PlayerExtractor;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        check_threshold("kill threshold", self.0.kill_threshold)?;
        check_threshold("first kill threshold", self.0.first_kill_threshold)?;
        check_threshold("assist threshold", self.0.assist_threshold)?;

        if self.0.columns.iter().any(|x| x.trim().is_empty()) {
            return Err(Error::Parameters("column names must not be empty".to_string()));
        }

        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
