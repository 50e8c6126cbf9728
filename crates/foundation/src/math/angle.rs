/// Degrees → radians factor.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
/// Radians → degrees factor.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Angles cross API surfaces in degrees; trigonometry happens in radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}
