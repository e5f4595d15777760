//! `rolecast-datasets` loads player-stat records from CSV sources.
//!
//! ## The Big Picture
//!
//! `rolecast-datasets` is the data-source side of [`rolecast`]: it reads headered CSV tables
//! into raw [`Record`]s and turns them into a [`Dataset`] of feature sets with any
//! [`Extractable`] feature extractor.
//!
//! ## Using a dataset
//!
//! ```ignore
//! let records = rolecast_datasets::player_stats("player_stats.csv")?;
//! let extractor = PlayerExtractor::params().check()?;
//! let (train, valid) = rolecast_datasets::labelled::<Role, _>(&records, &extractor, "role")?
//!     .shuffle(&mut rng)
//!     .split_with_ratio(0.5);
//! ```

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use rolecast::traits::Extractable;
use rolecast::{Dataset, FeatureSet, ParamGuard, Record};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("invalid csv parameter {0}")]
    Parameters(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Base(#[from] rolecast::Error),
}

/// Verified CSV reading parameters
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct CsvValidParams {
    delimiter: u8,
    has_headers: bool,
}

impl CsvValidParams {
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    fn reader<R: Read>(&self, reader: R) -> csv::Reader<R> {
        ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .from_reader(reader)
    }
}

/// CSV reading parameters during construction
///
/// | Name | Default | Purpose |
/// | :--- | :--- | :--- |
/// | [delimiter](Self::delimiter) | `b','` | Field separator, must be ASCII and neither a quote nor a line break |
/// | [has_headers](Self::has_headers) | `true` | Whether the first row names the columns |
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct CsvParams(CsvValidParams);

impl Default for CsvParams {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvParams {
    pub fn new() -> Self {
        Self(CsvValidParams {
            delimiter: b',',
            has_headers: true,
        })
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.0.delimiter = delimiter;
        self
    }

    /// Without a header row columns are named by their zero-based position
    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.0.has_headers = has_headers;
        self
    }
}

impl ParamGuard for CsvParams {
    type Checked = CsvValidParams;
    type Error = DatasetError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let d = self.0.delimiter;
        if !d.is_ascii() || d == b'"' || d == b'\n' || d == b'\r' {
            Err(DatasetError::Parameters(format!(
                "delimiter {:?} is not usable",
                d as char
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Read every row of a CSV source into a [`Record`]
///
/// Column names come from the header row, or are the zero-based column positions when the
/// parameters disable headers. Rows with a different number of fields than the first row are
/// rejected.
pub fn read_records<R: Read>(reader: R, params: &CsvParams) -> Result<Vec<Record>> {
    let params = params.check_ref()?;
    let mut reader = params.reader(reader);
    let headers = if params.has_headers() {
        reader
            .headers()?
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    let records = reader
        .records()
        .map(|row| -> Result<Record> {
            let row = row?;
            Ok(row
                .iter()
                .enumerate()
                .map(|(i, value)| match headers.get(i) {
                    Some(name) => (name.clone(), value),
                    None => (i.to_string(), value),
                })
                .collect::<Record>())
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("read {} records with columns {:?}", records.len(), headers);

    Ok(records)
}

/// Read the player-stat table at `path` with default CSV parameters
pub fn player_stats<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_records(file, &CsvParams::default())
}

/// Build labelled feature sets, reading the known label from `label_column`
///
/// # Errors
///
/// Fails on the first record whose label column is missing or does not parse, or on which the
/// extractor fails.
pub fn labelled<L, E>(records: &[Record], extractor: &E, label_column: &str) -> Result<Dataset<L>>
where
    L: FromStr<Err = rolecast::Error>,
    E: Extractable<Record, L>,
{
    records
        .iter()
        .map(|record| -> Result<FeatureSet<L>> {
            let label = record.text(label_column)?.parse::<L>()?;
            Ok(extractor.build(record, Some(label))?)
        })
        .collect()
}

/// Build feature sets without known label, for prediction
pub fn unlabelled<L, E>(records: &[Record], extractor: &E) -> Result<Dataset<L>>
where
    E: Extractable<Record, L>,
{
    records
        .iter()
        .map(|record| -> Result<FeatureSet<L>> { Ok(extractor.build(record, None)?) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolecast::prelude::{FixedLabels, PlayerExtractor, Role};

    const PLAYER_STATS: &str = "\
number,player,team,role,map,kill,death,assist,adr,fk,fd
1,yay,OpTic,duelist,ascent,24,12,3,180.4,5,1
2,Marved,OpTic,controller,ascent,11,13,9,121.0,0,2
3,FNS,OpTic,initiator,ascent,9,14,12,110.7,1,3
4,victor,OpTic,sentinel,bind,15,15,4,140.2,2,2
";

    #[test]
    fn reads_headered_csv() -> Result<()> {
        let records = read_records(PLAYER_STATS.as_bytes(), &CsvParams::default())?;

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].len(), 11);
        assert_eq!(records[0].text("player")?, "yay");
        assert_eq!(records[3].number("kill")?, 15.0);

        Ok(())
    }

    #[test]
    fn custom_delimiter() -> Result<()> {
        let data = "player;map\nyay;ascent\n";
        let records = read_records(data.as_bytes(), &CsvParams::new().delimiter(b';'))?;

        assert_eq!(records[0].text("map")?, "ascent");

        let res = read_records(data.as_bytes(), &CsvParams::new().delimiter(b'"'));
        assert!(matches!(res, Err(DatasetError::Parameters(_))));

        let params = CsvParams::new().delimiter(b'\t').check()?;
        assert_eq!(params.delimiter(), b'\t');
        assert!(params.has_headers());

        Ok(())
    }

    #[test]
    fn headerless_csv() -> Result<()> {
        let data = "yay,ascent,24\nnats,bind,13\n";
        let params = CsvParams::new().has_headers(false);
        assert!(!params.check_ref()?.has_headers());

        let records = read_records(data.as_bytes(), &params)?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("0")?, "yay");
        assert_eq!(records[1].text("1")?, "bind");
        assert_eq!(records[1].number("2")?, 13.0);
        assert!(!records[0].contains("player"));

        // the same table with a header row loses its first line to the column names
        let records = read_records(data.as_bytes(), &CsvParams::default())?;
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("yay"));

        Ok(())
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let data = "player,map\nyay\n";
        let res = read_records(data.as_bytes(), &CsvParams::default());

        assert!(matches!(res, Err(DatasetError::Csv(_))));
    }

    #[test]
    fn builds_labelled_dataset() -> Result<()> {
        let records = read_records(PLAYER_STATS.as_bytes(), &CsvParams::default())?;
        let extractor = PlayerExtractor::params().check()?;

        let dataset = labelled::<Role, _>(&records, &extractor, "role")?;

        assert_eq!(dataset.len(), 4);
        for role in Role::classes() {
            assert_eq!(dataset.label_frequencies().get(role), Some(&1));
        }

        assert_eq!(dataset[0].label(), Some(&Role::Duelist));
        assert!(dataset[0].contains("kills>14"));
        assert!(dataset[0].contains("first_kills>2"));
        assert!(dataset[2].contains("assists>6"));
        assert!(dataset[3].contains("kills>14"));
        assert!(!dataset[3].contains("first_kills>2"));

        let dataset = unlabelled::<Role, _>(&records, &extractor)?;
        assert!(dataset.targets().all(|x| x.is_none()));

        Ok(())
    }

    #[test]
    fn unknown_role_is_an_error() -> Result<()> {
        let data = "player,map,kill,fk,assist,role\nyay,ascent,1,1,1,flex\n";
        let records = read_records(data.as_bytes(), &CsvParams::default())?;
        let extractor = PlayerExtractor::params().check()?;

        let res = labelled::<Role, _>(&records, &extractor, "role");
        assert!(matches!(
            res,
            Err(DatasetError::Base(rolecast::Error::UnknownLabel(_)))
        ));

        let res = labelled::<Role, _>(&records, &extractor, "agent_role");
        assert!(matches!(
            res,
            Err(DatasetError::Base(rolecast::Error::MissingField(_)))
        ));

        Ok(())
    }

    #[test]
    fn missing_player_column() -> Result<()> {
        let data = "map,kill,fk,assist\nascent,1,1,1\n";
        let records = read_records(data.as_bytes(), &CsvParams::default())?;
        let extractor = PlayerExtractor::params().check()?;

        let res = unlabelled::<Role, _>(&records, &extractor);
        assert!(matches!(
            res,
            Err(DatasetError::Base(rolecast::Error::MissingField(ref x))) if x == "player"
        ));

        Ok(())
    }
}
