//! Datasets
//!
//! This module implements the feature model shared by extraction, training and prediction, and
//! the dataset container used to shuffle and split labelled feature sets.
use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

mod impl_dataset;

/// A closed, ordered set of labels
///
/// Every classifier in this crate works over a fixed label set known at compile time. The order
/// returned by [`classes`](FixedLabels::classes) is the iteration order used for probability
/// rows, tie-breaking and reports, it must be non-empty and [`index`](FixedLabels::index) must
/// return the position of a label in it.
pub trait FixedLabels:
    PartialEq + Eq + Hash + Clone + Copy + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// All members of the label set in their fixed order
    fn classes() -> &'static [Self];

    /// Position of this label in [`classes`](FixedLabels::classes)
    fn index(&self) -> usize;
}

/// Value carried by a feature
///
/// Presence flags are the common case, derived numbers and categorical tokens are kept for
/// reporting but take no part in lookups.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Flag(bool),
    Number(f64),
    Token(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeatureValue::Flag(x) => write!(f, "{}", x),
            FeatureValue::Number(x) => write!(f, "{}", x),
            FeatureValue::Token(x) => write!(f, "{}", x),
        }
    }
}

/// A named feature
///
/// Identity is by name only: two features with the same name are equal, hash equally and order
/// equally regardless of their values.
#[derive(Debug, Clone)]
pub struct Feature {
    name: String,
    value: FeatureValue,
}

impl Feature {
    pub fn new<S: Into<String>>(name: S, value: FeatureValue) -> Self {
        Feature {
            name: name.into(),
            value,
        }
    }

    /// Create a presence flag
    pub fn flag<S: Into<String>>(name: S) -> Self {
        Self::new(name, FeatureValue::Flag(true))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &FeatureValue {
        &self.value
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Feature {}

impl Hash for Feature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Feature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Feature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Features describing a single record
///
/// A feature set has set semantics over feature names, when built from a sequence containing the
/// same name twice the first occurrence is kept. The optional label is the known class of the
/// record and is only consulted during training and evaluation.
///
/// Feature sets are immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet<L> {
    features: BTreeMap<String, FeatureValue>,
    label: Option<L>,
}

impl<L> FeatureSet<L> {
    pub fn new<I: IntoIterator<Item = Feature>>(features: I, label: Option<L>) -> Self {
        let mut map = BTreeMap::new();
        for Feature { name, value } in features {
            map.entry(name).or_insert(value);
        }

        FeatureSet {
            features: map,
            label,
        }
    }

    /// Create a feature set of presence flags
    pub fn from_names<I, S>(names: I, label: Option<L>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Feature::flag), label)
    }

    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<&FeatureValue> {
        self.features.get(name)
    }

    /// Feature names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(|x| x.as_str())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FeatureValue> {
        self.features.iter()
    }
}

impl<L: fmt::Display> fmt::Display for FeatureSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.features.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "}}")?;

        match &self.label {
            Some(label) => write!(f, " -> {}", label),
            None => Ok(()),
        }
    }
}

/// Dataset
///
/// An owned collection of feature sets. It dereferences to a slice, so it can be passed to
/// anything expecting a training or prediction batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<L> {
    feature_sets: Vec<FeatureSet<L>>,
}

impl<L> Deref for Dataset<L> {
    type Target = [FeatureSet<L>];

    fn deref(&self) -> &[FeatureSet<L>] {
        &self.feature_sets
    }
}
