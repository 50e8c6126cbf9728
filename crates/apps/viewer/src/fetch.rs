use catalog::{GeographySourceError, MetricSourceError, SleepDataset};
use formats::WorldAtlas;

/// Per-country metadata the sleep metrics are derived from.
pub const METRICS_URL: &str = "https://restcountries.com/v2/all";
/// World boundary topology at 1:110m resolution.
pub const ATLAS_URL: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";

/// One-shot metric load. Failure here is recovered by the caller via the
/// fallback dataset; it is never fatal.
pub async fn fetch_metrics(
    client: &reqwest::Client,
    url: &str,
) -> Result<SleepDataset, MetricSourceError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MetricSourceError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(MetricSourceError::Http {
            status: status.as_u16(),
        });
    }
    let body = response
        .text()
        .await
        .map_err(|e| MetricSourceError::Transport(e.to_string()))?;
    formats::dataset_from_restcountries_str(&body)
}

/// One-shot geography load. There is no fallback geometry; failure is
/// terminal for rendering.
pub async fn fetch_boundaries(
    client: &reqwest::Client,
    url: &str,
) -> Result<WorldAtlas, GeographySourceError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| GeographySourceError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeographySourceError::Http {
            status: status.as_u16(),
        });
    }
    let body = response
        .text()
        .await
        .map_err(|e| GeographySourceError::Transport(e.to_string()))?;
    formats::from_topojson_str(&body).map_err(|e| GeographySourceError::Malformed(e.to_string()))
}
