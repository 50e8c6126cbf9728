use std::collections::BTreeMap;

use foundation::CountryCode;

use crate::record::SleepRecord;

/// Loaded metric records keyed by alpha-3 code.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SleepDataset {
    records: BTreeMap<CountryCode, SleepRecord>,
}

impl SleepDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: CountryCode, record: SleepRecord) {
        self.records.insert(code, record);
    }

    pub fn get(&self, code: CountryCode) -> Option<&SleepRecord> {
        self.records.get(&code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty-but-successful payload renders everything neutral; it is
    /// not an error.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CountryCode, &SleepRecord)> {
        self.records.iter().map(|(code, record)| (*code, record))
    }
}

/// Fixed dataset substituted when the metric source cannot be reached, so
/// the view stays populated instead of erroring.
pub fn fallback_dataset() -> SleepDataset {
    fn record(country: &str, avg: f64, insomnia: f64, quality: f64) -> SleepRecord {
        SleepRecord {
            country: country.to_string(),
            year: "2023".to_string(),
            avg_sleep_h: avg,
            insomnia_pct: insomnia,
            quality_score: quality,
        }
    }

    let mut data = SleepDataset::new();
    data.insert(CountryCode::new(*b"USA"), record("United States", 6.8, 27.0, 6.5));
    data.insert(CountryCode::new(*b"GBR"), record("United Kingdom", 6.5, 31.0, 6.2));
    data.insert(CountryCode::new(*b"JPN"), record("Japan", 6.3, 21.0, 5.9));
    data.insert(CountryCode::new(*b"CHN"), record("China", 6.4, 24.0, 6.1));
    data.insert(CountryCode::new(*b"IND"), record("India", 6.6, 28.0, 6.0));
    data.insert(CountryCode::new(*b"BRA"), record("Brazil", 6.9, 32.0, 6.4));
    data
}

/// Metric source failure. Always recovered internally via
/// [`fallback_dataset`]; surfaces in logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricSourceError {
    Http { status: u16 },
    Transport(String),
    Malformed(String),
}

impl std::fmt::Display for MetricSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricSourceError::Http { status } => {
                write!(f, "metric source returned HTTP {status}")
            }
            MetricSourceError::Transport(msg) => write!(f, "metric source unreachable: {msg}"),
            MetricSourceError::Malformed(msg) => write!(f, "metric payload malformed: {msg}"),
        }
    }
}

impl std::error::Error for MetricSourceError {}

/// Geography source failure. Not recoverable (no fallback geometry exists);
/// the view reaches a terminal unable-to-render state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeographySourceError {
    Http { status: u16 },
    Transport(String),
    Malformed(String),
}

impl std::fmt::Display for GeographySourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeographySourceError::Http { status } => {
                write!(f, "geography source returned HTTP {status}")
            }
            GeographySourceError::Transport(msg) => {
                write!(f, "geography source unreachable: {msg}")
            }
            GeographySourceError::Malformed(msg) => {
                write!(f, "boundary data malformed: {msg}")
            }
        }
    }
}

impl std::error::Error for GeographySourceError {}
