use serde::{Deserialize, Serialize};

/// A read-only record the backend produces for booking events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Option<i64>,
    pub booking_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub resource_id: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub created_at: Option<String>,
}

impl Notification {
    /// True when `start_time` begins with `date` (a `YYYY-MM-DD` prefix).
    pub fn starts_on(&self, date: &str) -> bool {
        self.start_time
            .as_deref()
            .is_some_and(|start| start.starts_with(date))
    }
}
