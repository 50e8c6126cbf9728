use foundation::math::Vec2;
use foundation::CountryId;

use crate::globe::ProjectedFeature;

/// Resolves a screen point to the feature under it.
///
/// Ordering contract:
/// - Features are tested in reverse draw order, so the topmost painted
///   feature wins when projections overlap.
/// - Containment is the even-odd rule across all of a feature's rings,
///   which makes holes behave as holes.
pub fn pick_feature(projected: &[ProjectedFeature], point: Vec2) -> Option<CountryId> {
    projected
        .iter()
        .rev()
        .find(|feature| contains(feature, point))
        .map(|feature| feature.id)
}

fn contains(feature: &ProjectedFeature, point: Vec2) -> bool {
    let mut inside = false;
    for ring in &feature.rings {
        if point_in_ring(ring, point) {
            inside = !inside;
        }
    }
    inside
}

/// Ray-cast parity test against one closed ring.
fn point_in_ring(ring: &[Vec2], point: Vec2) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i];
        let b = ring[j];
        let crosses = (a.y > point.y) != (b.y > point.y);
        if crosses {
            let t = (point.y - a.y) / (b.y - a.y);
            if point.x < a.x + t * (b.x - a.x) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::pick_feature;
    use crate::globe::ProjectedFeature;
    use foundation::CountryId;
    use foundation::math::Vec2;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Vec2> {
        vec![
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]
    }

    fn feature(id: u16, rings: Vec<Vec<Vec2>>) -> ProjectedFeature {
        ProjectedFeature {
            id: CountryId(id),
            code: None,
            rings,
        }
    }

    #[test]
    fn picks_containing_feature() {
        let features = vec![
            feature(1, vec![rect(0.0, 0.0, 10.0, 10.0)]),
            feature(2, vec![rect(20.0, 0.0, 30.0, 10.0)]),
        ];
        assert_eq!(pick_feature(&features, Vec2::new(5.0, 5.0)), Some(CountryId(1)));
        assert_eq!(pick_feature(&features, Vec2::new(25.0, 5.0)), Some(CountryId(2)));
        assert_eq!(pick_feature(&features, Vec2::new(15.0, 5.0)), None);
    }

    #[test]
    fn topmost_feature_wins_on_overlap() {
        let features = vec![
            feature(1, vec![rect(0.0, 0.0, 10.0, 10.0)]),
            feature(2, vec![rect(5.0, 0.0, 15.0, 10.0)]),
        ];
        assert_eq!(pick_feature(&features, Vec2::new(7.0, 5.0)), Some(CountryId(2)));
    }

    #[test]
    fn holes_are_outside() {
        let features = vec![feature(
            1,
            vec![rect(0.0, 0.0, 20.0, 20.0), rect(5.0, 5.0, 15.0, 15.0)],
        )];
        assert_eq!(pick_feature(&features, Vec2::new(2.0, 2.0)), Some(CountryId(1)));
        assert_eq!(pick_feature(&features, Vec2::new(10.0, 10.0)), None);
    }
}
