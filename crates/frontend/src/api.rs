use waymark_shared::dataset;
use waymark_shared::models::Location;

/// URL of the dataset under the deployment root.
pub fn locations_url(origin: &str, base_path: &str) -> String {
    format!(
        "{}{}/locations.json",
        origin.trim_end_matches('/'),
        base_path.trim_end_matches('/')
    )
}

fn page_origin() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    window
        .location()
        .origin()
        .map_err(|_| "Could not read page origin".to_string())
}

/// Fetch and validate the dataset. Any malformed record fails the whole load.
pub async fn fetch_locations(base_path: &str) -> Result<Vec<Location>, String> {
    let url = locations_url(&page_origin()?, base_path);

    let resp = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        return Err(format!("{} returned {}", url, resp.status()));
    }

    let body = resp.text().await.map_err(|e| e.to_string())?;
    let locations = dataset::parse_locations(&body).map_err(|e| e.to_string())?;
    tracing::info!(count = locations.len(), "Loaded locations");
    Ok(locations)
}
