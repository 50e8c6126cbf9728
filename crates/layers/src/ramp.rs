use foundation::Color;

/// Piecewise-linear color ramp over sorted stops in [0, 1].
///
/// Sampling clamps at the end stops, so out-of-range normalized values
/// saturate instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: &'static [(f64, Color)],
}

impl ColorRamp {
    /// `stops` must be non-empty and ascending by position.
    pub const fn new(stops: &'static [(f64, Color)]) -> Self {
        Self { stops }
    }

    pub fn sample(&self, t: f64) -> Color {
        let (first, last) = (self.stops[0], self.stops[self.stops.len() - 1]);
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for window in self.stops.windows(2) {
            let (p0, c0) = window[0];
            let (p1, c1) = window[1];
            if t <= p1 {
                let local = if p1 > p0 { (t - p0) / (p1 - p0) } else { 1.0 };
                return c0.lerp(c1, local);
            }
        }
        last.1
    }
}

/// Diverging red → yellow → blue, after ColorBrewer RdYlBu. Low values are
/// warm, high values cool.
pub static RD_YL_BU: ColorRamp = ColorRamp::new(&[
    (0.0, Color::rgb(165, 0, 38)),
    (0.25, Color::rgb(244, 109, 67)),
    (0.5, Color::rgb(255, 255, 191)),
    (0.75, Color::rgb(116, 173, 209)),
    (1.0, Color::rgb(49, 54, 149)),
]);

/// Sequential yellow → orange → red, after ColorBrewer YlOrRd.
pub static YL_OR_RD: ColorRamp = ColorRamp::new(&[
    (0.0, Color::rgb(255, 255, 204)),
    (0.25, Color::rgb(254, 217, 118)),
    (0.5, Color::rgb(253, 141, 60)),
    (0.75, Color::rgb(227, 26, 28)),
    (1.0, Color::rgb(128, 0, 38)),
]);

/// Sequential dark-purple → yellow perceptual ramp, after viridis.
pub static VIRIDIS: ColorRamp = ColorRamp::new(&[
    (0.0, Color::rgb(68, 1, 84)),
    (0.25, Color::rgb(59, 82, 139)),
    (0.5, Color::rgb(33, 145, 140)),
    (0.75, Color::rgb(94, 201, 98)),
    (1.0, Color::rgb(253, 231, 37)),
]);

#[cfg(test)]
mod tests {
    use super::{RD_YL_BU, VIRIDIS, YL_OR_RD};
    use foundation::Color;

    #[test]
    fn samples_hit_exact_stops() {
        assert_eq!(RD_YL_BU.sample(0.0), Color::rgb(165, 0, 38));
        assert_eq!(RD_YL_BU.sample(0.5), Color::rgb(255, 255, 191));
        assert_eq!(RD_YL_BU.sample(1.0), Color::rgb(49, 54, 149));
    }

    #[test]
    fn out_of_range_clamps_to_end_stops() {
        assert_eq!(YL_OR_RD.sample(-2.5), YL_OR_RD.sample(0.0));
        assert_eq!(YL_OR_RD.sample(9.0), YL_OR_RD.sample(1.0));
        assert_eq!(VIRIDIS.sample(f64::NEG_INFINITY), VIRIDIS.sample(0.0));
    }

    #[test]
    fn midpoints_interpolate_between_stops() {
        // Halfway between the 0.0 and 0.25 stops of viridis.
        let c = VIRIDIS.sample(0.125);
        assert_eq!(c, Color::rgb(68, 1, 84).lerp(Color::rgb(59, 82, 139), 0.5));
    }
}
