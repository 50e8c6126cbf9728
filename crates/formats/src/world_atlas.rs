use serde_json::Value;

use foundation::CountryId;
use scene::{BoundaryFeature, GeoPoint};

/// Structural failure of the whole boundary payload. Individual bad
/// features are skipped, not raised.
#[derive(Debug)]
pub enum WorldAtlasError {
    Json(String),
    NotATopology,
    MissingCountries,
    BadArcs(String),
}

impl std::fmt::Display for WorldAtlasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldAtlasError::Json(msg) => write!(f, "JSON parse error: {msg}"),
            WorldAtlasError::NotATopology => write!(f, "expected a TopoJSON Topology"),
            WorldAtlasError::MissingCountries => {
                write!(f, "topology has no countries geometry collection")
            }
            WorldAtlasError::BadArcs(msg) => write!(f, "invalid arc table: {msg}"),
        }
    }
}

impl std::error::Error for WorldAtlasError {}

/// Decoded country boundaries plus the count of features dropped as
/// malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldAtlas {
    pub features: Vec<BoundaryFeature>,
    pub skipped: usize,
}

/// Decodes a world-atlas TopoJSON document (`objects.countries`) into
/// boundary features.
pub fn from_topojson_str(payload: &str) -> Result<WorldAtlas, WorldAtlasError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| WorldAtlasError::Json(e.to_string()))?;
    from_topojson_value(&value)
}

pub fn from_topojson_value(value: &Value) -> Result<WorldAtlas, WorldAtlasError> {
    let obj = value.as_object().ok_or(WorldAtlasError::NotATopology)?;
    if obj.get("type").and_then(|v| v.as_str()) != Some("Topology") {
        return Err(WorldAtlasError::NotATopology);
    }

    let transform = parse_transform(obj.get("transform"))?;
    let arcs = decode_arcs(obj.get("arcs"), transform)?;

    let geometries = obj
        .get("objects")
        .and_then(|v| v.get("countries"))
        .and_then(|v| v.get("geometries"))
        .and_then(|v| v.as_array())
        .ok_or(WorldAtlasError::MissingCountries)?;

    let mut features = Vec::with_capacity(geometries.len());
    let mut skipped = 0;
    for geometry in geometries {
        match parse_feature(&arcs, geometry) {
            Some(feature) => features.push(feature),
            None => skipped += 1,
        }
    }

    Ok(WorldAtlas { features, skipped })
}

/// Quantization transform; absent means arcs carry absolute positions.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Transform {
    scale: (f64, f64),
    translate: (f64, f64),
}

fn parse_transform(value: Option<&Value>) -> Result<Option<Transform>, WorldAtlasError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let pair = |key: &str| -> Option<(f64, f64)> {
        let arr = value.get(key)?.as_array()?;
        Some((arr.first()?.as_f64()?, arr.get(1)?.as_f64()?))
    };
    match (pair("scale"), pair("translate")) {
        (Some(scale), Some(translate)) => Ok(Some(Transform { scale, translate })),
        _ => Err(WorldAtlasError::BadArcs(
            "transform must carry scale and translate pairs".to_string(),
        )),
    }
}

fn decode_arcs(
    value: Option<&Value>,
    transform: Option<Transform>,
) -> Result<Vec<Vec<GeoPoint>>, WorldAtlasError> {
    let arcs = value
        .and_then(|v| v.as_array())
        .ok_or_else(|| WorldAtlasError::BadArcs("missing arcs array".to_string()))?;

    let mut out = Vec::with_capacity(arcs.len());
    for (index, arc) in arcs.iter().enumerate() {
        let points = arc
            .as_array()
            .ok_or_else(|| WorldAtlasError::BadArcs(format!("arc {index} is not an array")))?;

        let mut decoded = Vec::with_capacity(points.len());
        let (mut acc_x, mut acc_y) = (0.0, 0.0);
        for point in points {
            let coords = point
                .as_array()
                .filter(|c| c.len() >= 2)
                .and_then(|c| Some((c[0].as_f64()?, c[1].as_f64()?)))
                .ok_or_else(|| {
                    WorldAtlasError::BadArcs(format!("arc {index} has a malformed position"))
                })?;

            let (lon, lat) = match transform {
                Some(t) => {
                    // Quantized arcs are delta-encoded.
                    acc_x += coords.0;
                    acc_y += coords.1;
                    (
                        acc_x * t.scale.0 + t.translate.0,
                        acc_y * t.scale.1 + t.translate.1,
                    )
                }
                None => coords,
            };
            decoded.push(GeoPoint::new(lon, lat));
        }
        out.push(decoded);
    }
    Ok(out)
}

/// One geometry → one feature; any inconsistency drops just this feature.
fn parse_feature(arcs: &[Vec<GeoPoint>], geometry: &Value) -> Option<BoundaryFeature> {
    let obj = geometry.as_object()?;
    let id = match obj.get("id") {
        Some(Value::String(s)) => CountryId::parse(s)?,
        Some(Value::Number(n)) => CountryId(u16::try_from(n.as_u64()?).ok()?),
        _ => return None,
    };

    let arc_lists = obj.get("arcs")?;
    let rings = match obj.get("type").and_then(|v| v.as_str())? {
        "Polygon" => polygon_rings(arcs, arc_lists)?,
        "MultiPolygon" => {
            let mut rings = Vec::new();
            for polygon in arc_lists.as_array()? {
                rings.extend(polygon_rings(arcs, polygon)?);
            }
            rings
        }
        _ => return None,
    };

    if rings.is_empty() {
        return None;
    }
    Some(BoundaryFeature::new(id, rings))
}

fn polygon_rings(arcs: &[Vec<GeoPoint>], value: &Value) -> Option<Vec<Vec<GeoPoint>>> {
    let mut rings = Vec::new();
    for ring_arcs in value.as_array()? {
        let ring = stitch_ring(arcs, ring_arcs.as_array()?)?;
        rings.push(ring);
    }
    Some(rings)
}

/// Concatenates the referenced arcs into one closed ring. A negative index
/// `~i` means arc `i` reversed; shared endpoints between consecutive arcs
/// are deduplicated.
fn stitch_ring(arcs: &[Vec<GeoPoint>], indices: &[Value]) -> Option<Vec<GeoPoint>> {
    let mut ring: Vec<GeoPoint> = Vec::new();
    for index in indices {
        let raw = index.as_i64()?;
        let (arc_index, reversed) = if raw >= 0 {
            (raw as usize, false)
        } else {
            ((-1 - raw) as usize, true)
        };
        let arc = arcs.get(arc_index)?;

        let mut append = |point: GeoPoint| {
            if ring.last() != Some(&point) {
                ring.push(point);
            }
        };
        if reversed {
            for &p in arc.iter().rev() {
                append(p);
            }
        } else {
            for &p in arc {
                append(p);
            }
        }
    }

    // A closed ring needs at least a triangle plus the closing vertex.
    if ring.len() < 4 || ring.first() != ring.last() {
        return None;
    }
    Some(ring)
}

#[cfg(test)]
mod tests {
    use super::{WorldAtlasError, from_topojson_str};
    use foundation::CountryId;
    use pretty_assertions::assert_eq;
    use scene::GeoPoint;

    const FIXTURE: &str = include_str!("../testdata/world_micro.json");

    #[test]
    fn decodes_fixture_features_and_skips_the_malformed_one() {
        let atlas = from_topojson_str(FIXTURE).expect("decode");
        assert_eq!(atlas.features.len(), 2);
        assert_eq!(atlas.skipped, 1);
        assert_eq!(atlas.features[0].id, CountryId(840));
        assert_eq!(atlas.features[1].id, CountryId(36));
    }

    #[test]
    fn delta_decoding_and_stitching_produce_a_closed_square() {
        let atlas = from_topojson_str(FIXTURE).expect("decode");
        let ring = &atlas.features[0].rings[0];
        assert_eq!(
            ring.as_slice(),
            &[
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(10.0, 0.0),
                GeoPoint::new(10.0, 10.0),
                GeoPoint::new(0.0, 10.0),
                GeoPoint::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn negative_arc_indices_traverse_reversed() {
        let atlas = from_topojson_str(FIXTURE).expect("decode");
        let ring = &atlas.features[1].rings[0];
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[1], GeoPoint::new(0.0, 10.0));
    }

    #[test]
    fn transform_scales_and_translates() {
        let payload = r#"{
            "type": "Topology",
            "transform": {"scale": [0.5, 2.0], "translate": [-10.0, 5.0]},
            "objects": {"countries": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "id": "250", "arcs": [[0]]}
            ]}},
            "arcs": [[[0, 0], [4, 0], [0, 1], [-4, 0], [0, -1]]]
        }"#;
        let atlas = from_topojson_str(payload).expect("decode");
        let ring = &atlas.features[0].rings[0];
        assert_eq!(ring[0], GeoPoint::new(-10.0, 5.0));
        assert_eq!(ring[1], GeoPoint::new(-8.0, 5.0));
        assert_eq!(ring[2], GeoPoint::new(-8.0, 7.0));
    }

    #[test]
    fn untransformed_topologies_use_absolute_positions() {
        let payload = r#"{
            "type": "Topology",
            "objects": {"countries": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "id": "392", "arcs": [[0]]}
            ]}},
            "arcs": [[[0, 0], [3, 0], [3, 3], [0, 3], [0, 0]]]
        }"#;
        let atlas = from_topojson_str(payload).expect("decode");
        assert_eq!(atlas.features[0].rings[0][2], GeoPoint::new(3.0, 3.0));
    }

    #[test]
    fn non_topology_payloads_are_rejected() {
        let err = from_topojson_str(r#"{"type": "FeatureCollection"}"#).unwrap_err();
        assert!(matches!(err, WorldAtlasError::NotATopology));

        let err = from_topojson_str("not json at all").unwrap_err();
        assert!(matches!(err, WorldAtlasError::Json(_)));
    }

    #[test]
    fn missing_countries_object_is_structural() {
        let payload = r#"{"type": "Topology", "objects": {}, "arcs": []}"#;
        let err = from_topojson_str(payload).unwrap_err();
        assert!(matches!(err, WorldAtlasError::MissingCountries));
    }
}
