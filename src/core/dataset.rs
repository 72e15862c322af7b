use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed set of plotted series.
///
/// Series are a fixed enumeration rather than free-form strings so every
/// style/legend lookup is exhaustive and cannot miss at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKey {
    Espresso,
    Latte,
    Tea,
}

impl SeriesKey {
    /// Deterministic plot/legend ordering.
    pub const ALL: [Self; 3] = [Self::Espresso, Self::Latte, Self::Tea];

    #[must_use]
    pub const fn count() -> usize {
        Self::ALL.len()
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Espresso => 0,
            Self::Latte => 1,
            Self::Tea => 2,
        }
    }
}

/// One labeled time bucket holding one amount (cups) per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    label: String,
    amounts: IndexMap<SeriesKey, u64>,
}

impl Period {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amounts: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_amount(mut self, key: SeriesKey, cups: u64) -> Self {
        self.amounts.insert(key, cups);
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Amount for `key`, or zero when the period never recorded it.
    ///
    /// `Dataset::new` guarantees full coverage, so the zero branch is only
    /// reachable for free-standing periods under construction.
    #[must_use]
    pub fn amount(&self, key: SeriesKey) -> u64 {
        self.amounts.get(&key).copied().unwrap_or(0)
    }

    pub fn amounts(&self) -> impl Iterator<Item = (SeriesKey, u64)> + '_ {
        SeriesKey::ALL.into_iter().map(|key| (key, self.amount(key)))
    }

    fn missing_key(&self) -> Option<SeriesKey> {
        SeriesKey::ALL
            .into_iter()
            .find(|key| !self.amounts.contains_key(key))
    }
}

/// Ordered, immutable categorical table: one row per period, one amount per
/// series. Constructed once and never mutated for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    periods: Vec<Period>,
}

impl Dataset {
    /// Validates the dataset invariants: unique period labels and every
    /// series key present in every period.
    ///
    /// An empty dataset is valid; it renders as the placeholder state.
    pub fn new(periods: Vec<Period>) -> ChartResult<Self> {
        for (index, period) in periods.iter().enumerate() {
            if period.label.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "period at index {index} has an empty label"
                )));
            }
            if let Some(key) = period.missing_key() {
                return Err(ChartError::InvalidData(format!(
                    "period `{}` is missing series {key:?}",
                    period.label
                )));
            }
            if periods[..index].iter().any(|prior| prior.label == period.label) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate period label `{}`",
                    period.label
                )));
            }
        }

        Ok(Self { periods })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            periods: Vec::new(),
        }
    }

    /// The fixed six-month beverage table the default view plots.
    #[must_use]
    pub fn default_beverages() -> Self {
        let rows: [(&str, u64, u64, u64); 6] = [
            ("January", 186, 80, 120),
            ("February", 305, 200, 150),
            ("March", 237, 120, 190),
            ("April", 173, 190, 220),
            ("May", 209, 130, 180),
            ("June", 214, 140, 160),
        ];

        let periods = rows
            .into_iter()
            .map(|(label, espresso, latte, tea)| {
                Period::new(label)
                    .with_amount(SeriesKey::Espresso, espresso)
                    .with_amount(SeriesKey::Latte, latte)
                    .with_amount(SeriesKey::Tea, tea)
            })
            .collect();

        Self { periods }
    }

    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.periods.iter().any(|period| period.label == label)
    }

    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.periods.get(index).map(Period::label)
    }

    /// Sum of every amount across every period and series.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.periods
            .iter()
            .flat_map(Period::amounts)
            .map(|(_, cups)| cups)
            .sum()
    }

    /// Largest single amount, used to size the magnitude axis.
    #[must_use]
    pub fn max_amount(&self) -> Option<u64> {
        self.periods
            .iter()
            .flat_map(Period::amounts)
            .map(|(_, cups)| cups)
            .max()
    }
}
