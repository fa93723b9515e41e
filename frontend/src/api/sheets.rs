use crate::config::Config;
use gloo_net::http::Request;
use log::{debug, error};
use shared::import::{parse_judges_json, prepare_import, values_url};
use shared::{JudgeRecord, SharedError};

/// Fetch the judges listed in a Google Sheets document.
///
/// The access token is checked before the link, matching what the operator
/// has to fix first.
pub async fn fetch_judges(sheet_url: &str, access_token: Option<&str>) -> shared::Result<Vec<JudgeRecord>> {
    let sheet_id = prepare_import(sheet_url, access_token)?;
    let token = access_token.unwrap_or_default();
    let url = values_url(&Config::sheets_api_base(), &sheet_id, &Config::judges_sheet_range());
    debug!("Fetching judges from sheet {}", sheet_id);

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| SharedError::FetchFailed(format!("Failed to reach Google Sheets: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        error!("Google Sheets returned {}: {}", status, text);
        return Err(SharedError::FetchFailed(format!("{} - {}", status, text)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SharedError::FetchFailed(format!("Failed to read sheet response: {}", e)))?;

    let judges = parse_judges_json(&body)?;
    debug!("Parsed {} judges from sheet {}", judges.len(), sheet_id);
    Ok(judges)
}
