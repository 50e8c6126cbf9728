use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use catalog::{MetricKind, SourceState, ViewReadiness, fallback_dataset, view_readiness};
use foundation::math::OrthoCamera;
use layers::compose_frame;
use scene::{GlobeScene, SENSITIVITY_PX_PER_DEG};

mod fetch;
mod svg;

const CANVAS_W: f64 = 800.0;
const CANVAS_H: f64 = 600.0;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum MetricArg {
    AverageSleep,
    InsomniaRate,
    QualityScore,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::AverageSleep => MetricKind::AverageSleep,
            MetricArg::InsomniaRate => MetricKind::InsomniaRate,
            MetricArg::QualityScore => MetricKind::QualityScore,
        }
    }
}

/// Renders one shaded-globe snapshot to SVG.
#[derive(Debug, Parser)]
#[command(name = "sleep_globe")]
struct Args {
    /// Output SVG path.
    #[arg(long, default_value = "globe.svg")]
    out: PathBuf,
    /// Metric to shade countries by.
    #[arg(long, value_enum, default_value = "average-sleep")]
    metric: MetricArg,
    /// Yaw applied via a simulated drag before the snapshot (degrees).
    #[arg(long, default_value_t = 0.0)]
    yaw: f64,
    /// Pitch applied via a simulated drag before the snapshot (degrees).
    #[arg(long, default_value_t = 0.0)]
    pitch: f64,
    /// Metric source endpoint.
    #[arg(long, default_value = fetch::METRICS_URL)]
    metrics_url: String,
    /// Boundary topology endpoint.
    #[arg(long, default_value = fetch::ATLAS_URL)]
    atlas_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = reqwest::Client::new();

    // The two loads are independent; only the join before shading matters.
    let (metrics, boundaries) = tokio::join!(
        fetch::fetch_metrics(&client, &args.metrics_url),
        fetch::fetch_boundaries(&client, &args.atlas_url),
    );

    let metrics = match metrics {
        Ok(dataset) => {
            info!(countries = dataset.len(), "metric data loaded");
            SourceState::Ready(dataset)
        }
        Err(e) => {
            warn!(error = %e, "metric source failed; using fallback dataset");
            SourceState::Failed
        }
    };
    let boundaries = match boundaries {
        Ok(atlas) => {
            if atlas.skipped > 0 {
                warn!(skipped = atlas.skipped, "dropped malformed boundary features");
            }
            info!(features = atlas.features.len(), "boundary data loaded");
            SourceState::Ready(atlas)
        }
        Err(e) => {
            error!(error = %e, "geography source failed");
            SourceState::Failed
        }
    };

    if view_readiness(&metrics, &boundaries) == ViewReadiness::Unrenderable {
        error!("unable to render: no boundary geometry");
        return ExitCode::FAILURE;
    }

    let dataset = match metrics {
        SourceState::Ready(dataset) => dataset,
        _ => fallback_dataset(),
    };
    let atlas = match boundaries {
        SourceState::Ready(atlas) => atlas,
        // Unreachable past the readiness gate.
        _ => return ExitCode::FAILURE,
    };

    let mut scene = GlobeScene::new(OrthoCamera::default());
    scene.set_features(atlas.features);
    scene.set_dataset(dataset);
    scene.select_metric(args.metric.into());

    // Apply the requested orientation through the drag machinery, the same
    // path a pointer would take.
    if args.yaw != 0.0 || args.pitch != 0.0 {
        scene.pointer_down(0.0, 0.0);
        scene.pointer_move(
            args.yaw * SENSITIVITY_PX_PER_DEG,
            -args.pitch * SENSITIVITY_PX_PER_DEG,
        );
        scene.pointer_up();
    }

    let frame = compose_frame(&scene);
    let document = svg::render_svg(&frame, CANVAS_W, CANVAS_H);
    if let Err(e) = std::fs::write(&args.out, document) {
        error!(error = %e, path = %args.out.display(), "failed to write snapshot");
        return ExitCode::FAILURE;
    }

    info!(path = %args.out.display(), revision = scene.revision(), "wrote globe snapshot");
    ExitCode::SUCCESS
}
