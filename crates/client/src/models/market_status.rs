use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day of an exchange calendar: trading date and open/closed status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatusRow {
    pub date: DateTime<Utc>,
    /// `"open"` or `"closed"` as reported by the API.
    pub status: String,
}
