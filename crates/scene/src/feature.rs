use foundation::CountryId;

/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// One country's boundary geometry: closed rings of lon/lat vertices plus
/// the numeric identifier used to join against the code table. Loaded once,
/// read-only for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub id: CountryId,
    pub rings: Vec<Vec<GeoPoint>>,
}

impl BoundaryFeature {
    pub fn new(id: CountryId, rings: Vec<Vec<GeoPoint>>) -> Self {
        Self { id, rings }
    }
}
