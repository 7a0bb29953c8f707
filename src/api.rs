use crate::error::FetchError;
use crate::models::IpoRecord;
use serde_json::Value;
use tracing::{debug, warn};

/// One GET against the IPO list endpoint. No auth header, no query string.
pub async fn fetch_records(client: &reqwest::Client, url: &str) -> Result<Vec<IpoRecord>, FetchError> {
    debug!(url, "Requesting IPO list");

    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(FetchError::from_response(resp).await);
    }

    let body = resp.text().await?;
    let entries: Vec<Value> = serde_json::from_str(&body)?;
    Ok(decode_records(entries))
}

/// Decodes each array element on its own. Elements that don't match the
/// record schema are dropped so one bad row can't blank the whole page.
pub fn decode_records(entries: Vec<Value>) -> Vec<IpoRecord> {
    let total = entries.len();
    let records: Vec<IpoRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<IpoRecord>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed IPO entry");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(kept = records.len(), total, "Some IPO entries were dropped");
    }
    records
}
