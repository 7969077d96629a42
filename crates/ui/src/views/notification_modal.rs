use std::sync::Arc;

use booking_client::BookingApi;
use booking_core::{models::notification::Notification, time};
use tracing::{debug, error};

use crate::{messages, render};

/// One table row of the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub title: String,
    pub start: String,
    pub end: String,
    pub resource: String,
}

fn cell(value: Option<&str>) -> String {
    match value {
        Some(raw) => time::display_str(raw).unwrap_or_else(|| raw.to_string()),
        None => "-".to_string(),
    }
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            title: n.title.clone().unwrap_or_default(),
            start: cell(n.start_time.as_deref()),
            end: cell(n.end_time.as_deref()),
            resource: n
                .resource_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Overlay listing notifications. Nothing is fetched until it is opened,
/// and every opening fetches again.
pub struct NotificationModal {
    api: Arc<dyn BookingApi>,
    open: bool,
    notifications: Vec<Notification>,
    filter_date: String,
    loading: bool,
    error: Option<String>,
}

impl NotificationModal {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self {
            api,
            open: false,
            notifications: Vec::new(),
            filter_date: String::new(),
            loading: false,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter_date(&self) -> &str {
        &self.filter_date
    }

    pub async fn open(&mut self) {
        self.open = true;
        self.fetch().await;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Sets the `YYYY-MM-DD` prefix; an empty string clears the filter.
    pub fn set_filter_date(&mut self, date: &str) {
        self.filter_date = date.trim().to_string();
    }

    async fn fetch(&mut self) {
        self.loading = true;
        match self.api.list_notifications().await {
            Ok(notifications) => {
                debug!("Fetched {} notifications", notifications.len());
                self.notifications = notifications;
                self.error = None;
            }
            Err(e) => {
                error!("Failed to fetch notifications: {}", e);
                self.error = Some(messages::FETCH_NOTIFICATIONS_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    pub fn filtered(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| self.filter_date.is_empty() || n.starts_on(&self.filter_date))
            .collect()
    }

    pub fn rows(&self) -> Vec<NotificationRow> {
        self.filtered().into_iter().map(NotificationRow::from).collect()
    }

    /// `None` while closed.
    pub fn render(&self) -> Option<String> {
        if !self.open {
            return None;
        }

        let filter = if self.filter_date.is_empty() { "-" } else { self.filter_date.as_str() };
        let mut out = vec![
            "== Notifications ==".to_string(),
            format!("Start date filter: {}", filter),
        ];

        let rows = self.rows();
        if self.loading {
            out.push(messages::LOADING.to_string());
        } else if let Some(error) = &self.error {
            out.push(error.clone());
        } else if rows.is_empty() {
            out.push(messages::NO_NOTIFICATIONS.to_string());
        } else {
            let cells: Vec<Vec<String>> = rows
                .into_iter()
                .map(|r| vec![r.title, r.start, r.end, r.resource])
                .collect();
            out.push(render::table(&["Title", "Start", "End", "Resource ID"], &cells));
        }
        Some(out.join("\n"))
    }
}
