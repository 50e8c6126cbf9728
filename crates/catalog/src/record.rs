use serde::{Deserialize, Serialize};

/// Per-country sleep metrics plus display metadata. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    /// Display name, e.g. "United States".
    pub country: String,
    /// Reference year of the data.
    pub year: String,
    pub avg_sleep_h: f64,
    pub insomnia_pct: f64,
    pub quality_score: f64,
}

/// The three selectable choropleth metrics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    AverageSleep,
    InsomniaRate,
    QualityScore,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::AverageSleep,
        MetricKind::InsomniaRate,
        MetricKind::QualityScore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::AverageSleep => "Average Sleep Hours",
            MetricKind::InsomniaRate => "Insomnia Rate (%)",
            MetricKind::QualityScore => "Sleep Quality Score",
        }
    }

    /// Short button/control caption.
    pub fn caption(self) -> &'static str {
        match self {
            MetricKind::AverageSleep => "Average Sleep",
            MetricKind::InsomniaRate => "Insomnia Rate",
            MetricKind::QualityScore => "Sleep Quality",
        }
    }

    pub fn value(self, record: &SleepRecord) -> f64 {
        match self {
            MetricKind::AverageSleep => record.avg_sleep_h,
            MetricKind::InsomniaRate => record.insomnia_pct,
            MetricKind::QualityScore => record.quality_score,
        }
    }

    /// One-decimal value with its unit, e.g. `21.0%` or `6.8 hours`.
    pub fn format_value(self, value: f64) -> String {
        match self {
            MetricKind::AverageSleep => format!("{value:.1} hours"),
            MetricKind::InsomniaRate => format!("{value:.1}%"),
            MetricKind::QualityScore => format!("{value:.1}/10"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricKind, SleepRecord};

    fn sample() -> SleepRecord {
        SleepRecord {
            country: "Japan".to_string(),
            year: "2023".to_string(),
            avg_sleep_h: 6.3,
            insomnia_pct: 21.0,
            quality_score: 5.9,
        }
    }

    #[test]
    fn metric_values_select_the_right_field() {
        let r = sample();
        assert_eq!(MetricKind::AverageSleep.value(&r), 6.3);
        assert_eq!(MetricKind::InsomniaRate.value(&r), 21.0);
        assert_eq!(MetricKind::QualityScore.value(&r), 5.9);
    }

    #[test]
    fn values_format_to_one_decimal_with_units() {
        assert_eq!(MetricKind::AverageSleep.format_value(6.8), "6.8 hours");
        assert_eq!(MetricKind::InsomniaRate.format_value(21.0), "21.0%");
        assert_eq!(MetricKind::QualityScore.format_value(6.5), "6.5/10");
    }
}
