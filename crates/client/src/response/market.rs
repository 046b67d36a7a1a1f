use serde::Deserialize;

use super::{parse_payload, timestamp_utc};
use crate::errors::MarketDataError;
use crate::models::MarketStatusRow;

#[derive(Deserialize)]
struct MarketStatusPayload {
    date: Vec<i64>,
    status: Vec<String>,
}

/// Zip the `date`/`status` parallel arrays into calendar rows.
pub fn normalize_market_status(body: &[u8]) -> Result<Vec<MarketStatusRow>, MarketDataError> {
    let payload: MarketStatusPayload = parse_payload(body)?;

    if payload.date.len() != payload.status.len() {
        return Err(MarketDataError::MalformedResponse {
            reason: format!(
                "market status arrays differ: {} dates, {} statuses",
                payload.date.len(),
                payload.status.len()
            ),
        });
    }

    payload
        .date
        .into_iter()
        .zip(payload.status)
        .map(|(seconds, status)| {
            Ok(MarketStatusRow {
                date: timestamp_utc(seconds)?,
                status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zips_dates_with_statuses() {
        let body = br#"{
            "s": "ok",
            "date": [1672549200, 1672635600, 1672722000],
            "status": ["closed", "closed", "open"]
        }"#;
        let rows = normalize_market_status(body).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].status, "closed");
        assert_eq!(rows[2].status, "open");
        assert_eq!(rows[0].date.timestamp(), 1672549200);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let body = br#"{"s":"ok","date":[1672549200,1672635600],"status":["open"]}"#;
        let result = normalize_market_status(body);

        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }
}
