use std::sync::Arc;

use booking_client::BookingApi;
use booking_core::models::resource::{Resource, ResourceQuery};
use tracing::{debug, error};

use crate::{messages, render};

/// Resource overview with a server-side name search.
pub struct ResourceList {
    api: Arc<dyn BookingApi>,
    resources: Vec<Resource>,
    search: String,
    loading: bool,
    error: Option<String>,
}

impl ResourceList {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self {
            api,
            resources: Vec::new(),
            search: String::new(),
            loading: false,
            error: None,
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.api.list_resources(&ResourceQuery::search(&self.search)).await {
            Ok(resources) => {
                debug!("Fetched {} resources", resources.len());
                self.resources = resources;
                self.error = None;
            }
            Err(e) => {
                error!("Failed to fetch resources: {}", e);
                self.error = Some(messages::FETCH_RESOURCES_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Every change of the term triggers a new fetch.
    pub async fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.refresh().await;
    }

    pub fn render(&self) -> String {
        let mut out = vec![
            "== Resources ==".to_string(),
            format!("Search: {}", self.search),
        ];

        if self.loading {
            out.push(messages::LOADING.to_string());
        } else if let Some(error) = &self.error {
            out.push(error.clone());
        } else if self.resources.is_empty() {
            out.push(messages::NO_RESOURCES.to_string());
        } else {
            let rows: Vec<Vec<String>> = self
                .resources
                .iter()
                .map(|r| {
                    vec![
                        r.id.map(|id| id.to_string()).unwrap_or_default(),
                        r.name.clone(),
                        r.capacity.to_string(),
                        r.availability_label().to_string(),
                        r.description
                            .clone()
                            .unwrap_or_else(|| messages::NO_DESCRIPTION.to_string()),
                    ]
                })
                .collect();
            out.push(render::table(
                &["ID", "Name", "Capacity", "Status", "Description"],
                &rows,
            ));
        }
        out.join("\n")
    }
}
