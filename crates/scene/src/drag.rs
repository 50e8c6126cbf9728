use crate::rotation::RotationState;

/// Pixels of pointer travel per degree of rotation. Lower values spin
/// faster.
pub const SENSITIVITY_PX_PER_DEG: f64 = 30.0;

/// Snapshot of a drag's starting conditions. Deltas are always computed
/// against this origin, never accumulated per event, so intermediate moves
/// cannot drift the result.
#[derive(Debug, Copy, Clone, PartialEq)]
struct DragSession {
    origin_x: f64,
    origin_y: f64,
    origin_rotation: RotationState,
}

/// Pointer-drag state machine: Idle → Dragging → Idle.
///
/// Single-pointer by construction; exactly one session may exist at a time.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Idle → Dragging. A second concurrent start is ignored, not queued.
    pub fn begin(&mut self, x: f64, y: f64, rotation: RotationState) {
        if self.session.is_some() {
            return;
        }
        self.session = Some(DragSession {
            origin_x: x,
            origin_y: y,
            origin_rotation: rotation,
        });
    }

    /// Rotation for the latest pointer position, or `None` while idle
    /// (stray move events after an end are dropped).
    ///
    /// Dragging down tilts the visible hemisphere toward the viewer, hence
    /// the pitch subtraction. No axis is clamped.
    pub fn update(&mut self, x: f64, y: f64) -> Option<RotationState> {
        let session = self.session?;
        let dx = (x - session.origin_x) / SENSITIVITY_PX_PER_DEG;
        let dy = (y - session.origin_y) / SENSITIVITY_PX_PER_DEG;
        Some(RotationState::new(
            session.origin_rotation.yaw_deg + dx,
            session.origin_rotation.pitch_deg - dy,
            session.origin_rotation.roll_deg,
        ))
    }

    /// Dragging → Idle. Rotation freezes exactly where released; there is
    /// no momentum.
    pub fn end(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DragController, SENSITIVITY_PX_PER_DEG};
    use crate::rotation::RotationState;

    #[test]
    fn move_while_idle_is_a_no_op() {
        let mut drag = DragController::new();
        assert_eq!(drag.update(100.0, 100.0), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn deltas_follow_origin_and_latest_position_only() {
        let r0 = RotationState::new(10.0, -5.0, 0.0);
        let mut drag = DragController::new();
        drag.begin(100.0, 200.0, r0);

        // Intermediate moves must not influence the final rotation.
        drag.update(500.0, -300.0);
        drag.update(0.0, 0.0);

        let r = drag.update(160.0, 140.0).expect("dragging");
        assert_eq!(r.yaw_deg, 10.0 + 60.0 / SENSITIVITY_PX_PER_DEG);
        assert_eq!(r.pitch_deg, -5.0 - (-60.0) / SENSITIVITY_PX_PER_DEG);
        assert_eq!(r.roll_deg, 0.0);
    }

    #[test]
    fn second_begin_is_ignored_while_dragging() {
        let mut drag = DragController::new();
        drag.begin(0.0, 0.0, RotationState::default());
        drag.begin(50.0, 50.0, RotationState::new(99.0, 99.0, 0.0));

        let r = drag.update(30.0, 0.0).expect("dragging");
        assert_eq!(r.yaw_deg, 1.0);
        assert_eq!(r.pitch_deg, 0.0);
    }

    #[test]
    fn rotation_is_cumulative_across_sessions() {
        let mut drag = DragController::new();
        drag.begin(0.0, 0.0, RotationState::default());
        let after_first = drag.update(30.0, 0.0).expect("dragging");
        drag.end();

        // The next session snapshots the post-drag rotation.
        drag.begin(0.0, 0.0, after_first);
        let after_second = drag.update(30.0, 0.0).expect("dragging");
        assert_eq!(after_second.yaw_deg, 2.0);
    }

    #[test]
    fn pitch_is_never_clamped() {
        let mut drag = DragController::new();
        drag.begin(0.0, 0.0, RotationState::default());
        let r = drag.update(0.0, -9000.0).expect("dragging");
        assert_eq!(r.pitch_deg, 300.0);
    }

    #[test]
    fn end_discards_the_session() {
        let mut drag = DragController::new();
        drag.begin(0.0, 0.0, RotationState::default());
        drag.end();
        assert_eq!(drag.update(10.0, 10.0), None);
    }
}
