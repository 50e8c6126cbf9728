/// Globe orientation as a yaw/pitch/roll triple in degrees.
///
/// Angles are unbounded: wrap-around is implicit in the projection's
/// trigonometry and pitch is never clamped, so over-rotation past the poles
/// simply shows the far hemisphere.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RotationState {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    /// Unused axis in this design; stays 0.
    pub roll_deg: f64,
}

impl RotationState {
    pub fn new(yaw_deg: f64, pitch_deg: f64, roll_deg: f64) -> Self {
        Self {
            yaw_deg,
            pitch_deg,
            roll_deg,
        }
    }
}
