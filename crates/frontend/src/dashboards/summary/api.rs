use contracts::dashboards::summary::DashboardSummary;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the dashboard summary
pub async fn fetch_summary() -> Result<DashboardSummary, String> {
    let response = Request::get(&api_url("/api/dashboard/summary"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch summary: {}", response.status()));
    }

    response
        .json::<DashboardSummary>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
