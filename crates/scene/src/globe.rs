use catalog::{MetricKind, SleepDataset, code_for};
use foundation::math::{Disc, Orientation, OrthoCamera, Vec2, project_ring};
use foundation::{CountryCode, CountryId};

use crate::drag::DragController;
use crate::feature::BoundaryFeature;
use crate::rotation::RotationState;
use crate::view::ViewSelection;

/// One mutation of scene state, tagged for traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneChange {
    pub revision: u64,
    pub kind: &'static str,
}

/// Drainable record of mutations. Render surfaces pull the current frame
/// after observing a change instead of receiving pushed draw calls.
#[derive(Debug, Default)]
pub struct ChangeLog {
    revision: u64,
    changes: Vec<SceneChange>,
}

impl ChangeLog {
    fn record(&mut self, kind: &'static str) {
        self.revision += 1;
        self.changes.push(SceneChange {
            revision: self.revision,
            kind,
        });
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn drain(&mut self) -> Vec<SceneChange> {
        std::mem::take(&mut self.changes)
    }
}

/// A country boundary in screen space: only the rings (and vertices) on the
/// visible hemisphere survive projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFeature {
    pub id: CountryId,
    pub code: Option<CountryCode>,
    pub rings: Vec<Vec<Vec2>>,
}

/// Owns all mutable view state: rotation, selection, hover, the loaded
/// boundary and metric collections, and the drag machine. All mutation
/// happens on the single event stream; there is no interior locking.
#[derive(Debug, Default)]
pub struct GlobeScene {
    camera: OrthoCamera,
    rotation: RotationState,
    view: ViewSelection,
    features: Vec<BoundaryFeature>,
    dataset: SleepDataset,
    drag: DragController,
    changes: ChangeLog,
}

impl GlobeScene {
    pub fn new(camera: OrthoCamera) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    pub fn camera(&self) -> OrthoCamera {
        self.camera
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn view(&self) -> ViewSelection {
        self.view
    }

    pub fn dataset(&self) -> &SleepDataset {
        &self.dataset
    }

    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn revision(&self) -> u64 {
        self.changes.revision()
    }

    pub fn drain_changes(&mut self) -> Vec<SceneChange> {
        self.changes.drain()
    }

    pub fn set_features(&mut self, features: Vec<BoundaryFeature>) {
        self.features = features;
        self.changes.record("geometry");
    }

    pub fn set_dataset(&mut self, dataset: SleepDataset) {
        self.dataset = dataset;
        self.changes.record("metrics");
    }

    /// Pure selection mutation; geometry is untouched. The frame is still
    /// reprojected in full on the next pull, which is bounded and simpler
    /// than a recolor-only path.
    pub fn select_metric(&mut self, metric: MetricKind) {
        if self.view.metric == metric {
            return;
        }
        self.view.metric = metric;
        self.changes.record("metric");
    }

    /// Hover resolution: numeric id → alpha-3 code → metric record. A
    /// feature that fails either join clears the hover instead of leaving a
    /// stale highlight.
    pub fn hover_enter(&mut self, id: CountryId) {
        let resolved = code_for(id).filter(|&code| self.dataset.get(code).is_some());
        if self.view.hovered != resolved {
            self.view.hovered = resolved;
            self.changes.record("hover");
        }
    }

    pub fn hover_leave(&mut self) {
        if self.view.hovered.is_some() {
            self.view.hovered = None;
            self.changes.record("hover");
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag.begin(x, y, self.rotation);
    }

    /// Applies the drag delta, if one is active. Every applied move mutates
    /// the rotation synchronously; the render surface reprojects the full
    /// feature set on the resulting change.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(rotation) = self.drag.update(x, y) {
            self.rotation = rotation;
            self.changes.record("rotation");
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// The globe silhouette, present for every rotation.
    pub fn disc(&self) -> Disc {
        self.camera.disc()
    }

    /// Total, stateless reprojection of every loaded feature under the
    /// current rotation. Features entirely on the far hemisphere drop out.
    pub fn project_features(&self) -> Vec<ProjectedFeature> {
        let orient =
            Orientation::from_rotation_deg(self.rotation.yaw_deg, self.rotation.pitch_deg);
        let mut out = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            let mut rings = Vec::new();
            for ring in &feature.rings {
                let coords = ring.iter().map(|p| (p.lon_deg, p.lat_deg));
                if let Some(projected) = project_ring(self.camera, orient, coords) {
                    rings.push(projected);
                }
            }
            if rings.is_empty() {
                continue;
            }
            out.push(ProjectedFeature {
                id: feature.id,
                code: code_for(feature.id),
                rings,
            });
        }
        out
    }

    /// Resolves a screen point to the topmost feature under it, for hosts
    /// whose input surface has no per-path hit-testing.
    pub fn pick(&self, x: f64, y: f64) -> Option<CountryId> {
        if !self.camera.covers(Vec2::new(x, y)) {
            return None;
        }
        crate::picking::pick_feature(&self.project_features(), Vec2::new(x, y))
    }
}
