use catalog::MetricKind;
use foundation::Color;

use crate::ramp::{ColorRamp, RD_YL_BU, VIRIDIS, YL_OR_RD};

/// Fixed neutral fill for features without a usable value. A deliberate
/// "no data" sentinel, not an error.
pub const NO_DATA: Color = Color::rgb(204, 204, 204);

fn ramp(metric: MetricKind) -> &'static ColorRamp {
    match metric {
        MetricKind::AverageSleep => &RD_YL_BU,
        MetricKind::InsomniaRate => &YL_OR_RD,
        MetricKind::QualityScore => &VIRIDIS,
    }
}

/// Normalizes a raw metric value into the ramp domain. Values outside the
/// nominal range land outside [0, 1] and clamp at the ramp ends.
pub fn normalized(metric: MetricKind, value: f64) -> f64 {
    match metric {
        // 6 h → 0, 9 h → 1; long sleep reads as cool blue.
        MetricKind::AverageSleep => (value - 6.0) / 3.0,
        MetricKind::InsomniaRate => value / 40.0,
        MetricKind::QualityScore => value / 10.0,
    }
}

/// The choropleth color contract: absent or zero values take the neutral
/// sentinel, everything else maps through the metric's ramp. Never fails.
pub fn color_for(metric: MetricKind, value: Option<f64>) -> Color {
    match value {
        None => NO_DATA,
        Some(v) if v == 0.0 => NO_DATA,
        Some(v) => ramp(metric).sample(normalized(metric, v)),
    }
}

/// Legend presentation for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: &'static str,
    /// Three-stop gradient, left to right.
    pub gradient: [Color; 3],
    pub domain: &'static str,
}

pub fn legend_for(metric: MetricKind) -> Legend {
    match metric {
        MetricKind::AverageSleep => Legend {
            title: "Average Sleep Hours",
            gradient: [
                Color::rgb(69, 117, 180),
                Color::rgb(255, 255, 191),
                Color::rgb(215, 48, 39),
            ],
            domain: "6h \u{2192} 8h",
        },
        MetricKind::InsomniaRate => Legend {
            title: "Insomnia Rate (%)",
            gradient: [
                Color::rgb(255, 255, 178),
                Color::rgb(253, 141, 60),
                Color::rgb(189, 0, 38),
            ],
            domain: "20% \u{2192} 40%",
        },
        MetricKind::QualityScore => Legend {
            title: "Sleep Quality Score",
            gradient: [
                Color::rgb(68, 1, 84),
                Color::rgb(33, 144, 140),
                Color::rgb(253, 231, 37),
            ],
            domain: "0 \u{2192} 10",
        },
    }
}
