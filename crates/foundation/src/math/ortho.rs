use super::angle::deg_to_rad;
use super::vec::Vec2;

/// Default sphere radius on screen (pixels).
pub const DEFAULT_SCALE_PX: f64 = 250.0;
/// Default canvas size (pixels).
pub const DEFAULT_CANVAS_W_PX: f64 = 800.0;
pub const DEFAULT_CANVAS_H_PX: f64 = 600.0;

/// Fixed orthographic camera: sphere radius in pixels plus canvas midpoint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoCamera {
    pub scale_px: f64,
    pub center: Vec2,
}

impl OrthoCamera {
    pub fn new(scale_px: f64, center: Vec2) -> Self {
        Self { scale_px, center }
    }

    /// Camera centered on a canvas of the given size.
    pub fn centered(scale_px: f64, width_px: f64, height_px: f64) -> Self {
        Self::new(scale_px, Vec2::new(width_px / 2.0, height_px / 2.0))
    }

    /// The globe silhouette. Emitted before any boundary path and never
    /// culled, regardless of orientation.
    pub fn disc(self) -> Disc {
        Disc {
            center: self.center,
            radius: self.scale_px,
        }
    }

    /// Whether a screen point lies on the sphere silhouette at all.
    pub fn covers(self, p: Vec2) -> bool {
        (p - self.center).length() <= self.scale_px
    }
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::centered(DEFAULT_SCALE_PX, DEFAULT_CANVAS_W_PX, DEFAULT_CANVAS_H_PX)
    }
}

/// Outline circle of the projected sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f64,
}

/// Sphere orientation derived from a yaw/pitch rotation pair (degrees).
///
/// A rotation of `[yaw, pitch]` brings the geographic point
/// `(-yaw, -pitch)` to the center of the view; the trigonometric terms for
/// that center are precomputed here since they are shared by every vertex
/// of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation {
    lon0_rad: f64,
    sin_lat0: f64,
    cos_lat0: f64,
}

impl Orientation {
    pub fn from_rotation_deg(yaw_deg: f64, pitch_deg: f64) -> Self {
        let lat0_rad = deg_to_rad(-pitch_deg);
        Self {
            lon0_rad: deg_to_rad(-yaw_deg),
            sin_lat0: lat0_rad.sin(),
            cos_lat0: lat0_rad.cos(),
        }
    }
}

/// Projects one geographic point (degrees) to screen space, or `None` when
/// the point is on the far hemisphere. Culling falls out of the sign of the
/// angular distance to the view center; there is no separate check.
pub fn project_point(
    camera: OrthoCamera,
    orient: Orientation,
    lon_deg: f64,
    lat_deg: f64,
) -> Option<Vec2> {
    let lat = deg_to_rad(lat_deg);
    let dlon = deg_to_rad(lon_deg) - orient.lon0_rad;
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_dlon, cos_dlon) = dlon.sin_cos();

    let cos_c = orient.sin_lat0 * sin_lat + orient.cos_lat0 * cos_lat * cos_dlon;
    if cos_c < 0.0 {
        return None;
    }

    let x = cos_lat * sin_dlon;
    let y = orient.cos_lat0 * sin_lat - orient.sin_lat0 * cos_lat * cos_dlon;
    Some(Vec2::new(
        camera.center.x + camera.scale_px * x,
        camera.center.y - camera.scale_px * y,
    ))
}

/// Projects a closed ring of `(lon_deg, lat_deg)` vertices.
///
/// Far-side vertices are dropped; a ring that keeps fewer than 3 vertices
/// yields `None`.
pub fn project_ring<I>(camera: OrthoCamera, orient: Orientation, ring: I) -> Option<Vec<Vec2>>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut out = Vec::new();
    for (lon_deg, lat_deg) in ring {
        if let Some(p) = project_point(camera, orient, lon_deg, lat_deg) {
            out.push(p);
        }
    }
    if out.len() < 3 { None } else { Some(out) }
}
