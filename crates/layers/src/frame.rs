use catalog::MetricKind;
use foundation::CountryId;
use foundation::math::{Disc, Vec2};
use scene::GlobeScene;

use crate::choropleth::{Legend, color_for, legend_for};
use crate::style::{DISC_STYLE, PathStyle, country_style};

/// Geometry of one emitted path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathGeometry {
    Circle(Disc),
    Rings(Vec<Vec<Vec2>>),
}

/// One (path, fill, stroke, stroke-width) tuple for the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Geometry id for country paths; `None` for the outline disc.
    pub id: Option<CountryId>,
    pub geometry: PathGeometry,
    pub style: PathStyle,
}

/// Hover detail for the presentation shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub country: String,
    pub lines: Vec<String>,
}

/// Everything the render surface needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub commands: Vec<DrawCommand>,
    pub tooltip: Option<Tooltip>,
    pub legend: Legend,
}

/// Composes the current frame: the outline disc first so countries always
/// paint within the silhouette, then every visible feature filled by the
/// active metric. Pull-based; calling it never mutates the scene.
pub fn compose_frame(scene: &GlobeScene) -> FrameOutput {
    let view = scene.view();
    let mut commands = Vec::new();

    commands.push(DrawCommand {
        id: None,
        geometry: PathGeometry::Circle(scene.disc()),
        style: DISC_STYLE,
    });

    for feature in scene.project_features() {
        let value = feature
            .code
            .and_then(|code| scene.dataset().get(code))
            .map(|record| view.metric.value(record));
        let fill = color_for(view.metric, value);
        let hovered = feature.code.is_some() && feature.code == view.hovered;
        commands.push(DrawCommand {
            id: Some(feature.id),
            geometry: PathGeometry::Rings(feature.rings),
            style: country_style(fill, hovered),
        });
    }

    FrameOutput {
        commands,
        tooltip: tooltip(scene),
        legend: legend_for(view.metric),
    }
}

fn tooltip(scene: &GlobeScene) -> Option<Tooltip> {
    let code = scene.view().hovered?;
    let record = scene.dataset().get(code)?;
    Some(Tooltip {
        country: record.country.clone(),
        lines: vec![
            format!(
                "Average Sleep: {}",
                MetricKind::AverageSleep.format_value(record.avg_sleep_h)
            ),
            format!("Data Year: {}", record.year),
            format!(
                "Insomnia Rate: {}",
                MetricKind::InsomniaRate.format_value(record.insomnia_pct)
            ),
            format!(
                "Sleep Quality Score: {}",
                MetricKind::QualityScore.format_value(record.quality_score)
            ),
        ],
    })
}
