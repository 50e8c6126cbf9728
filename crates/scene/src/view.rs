use catalog::MetricKind;
use foundation::CountryCode;

/// What the user is currently looking at: the active metric plus the
/// hovered country, if any.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSelection {
    pub metric: MetricKind,
    pub hovered: Option<CountryCode>,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            metric: MetricKind::AverageSleep,
            hovered: None,
        }
    }
}
