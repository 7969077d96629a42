use serde::{Deserialize, Serialize};

/// A bookable entity such as a meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capacity: u32,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Resource {
    pub fn availability_label(&self) -> &'static str {
        if self.available { "Available" } else { "Unavailable" }
    }
}

/// Query parameters for `GET /resources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ResourceQuery {
    pub fn available_only() -> Self {
        Self {
            available: Some(true),
            search: None,
        }
    }

    /// Search by name; an empty term means no filter.
    pub fn search(term: &str) -> Self {
        Self {
            available: None,
            search: (!term.is_empty()).then(|| term.to_string()),
        }
    }
}
