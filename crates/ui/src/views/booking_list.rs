//! Booking overview: status filter, per-row actions and the notification
//! modal.

use std::sync::Arc;

use booking_client::BookingApi;
use booking_core::{
    models::{
        booking::{Booking, BookingQuery, BookingStatus},
        resource::{Resource, ResourceQuery},
    },
    time,
};
use tracing::{debug, error, info, warn};

use crate::{messages, prompt::Prompt, render, router::Route};

use super::notification_modal::NotificationModal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Cancel,
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: Option<i64>,
    pub resource: String,
    pub customer_name: String,
    pub customer_email: String,
    pub start: String,
    pub end: String,
    pub status: BookingStatus,
    pub notes: String,
    pub actions: Vec<RowAction>,
}

impl BookingRow {
    pub fn can_cancel(&self) -> bool {
        self.actions.contains(&RowAction::Cancel)
    }
}

pub struct BookingList {
    api: Arc<dyn BookingApi>,
    prompt: Arc<dyn Prompt>,
    bookings: Vec<Booking>,
    resources: Vec<Resource>,
    filter: Option<BookingStatus>,
    loading: bool,
    error: Option<String>,
    notifications: NotificationModal,
}

impl BookingList {
    pub fn new(api: Arc<dyn BookingApi>, prompt: Arc<dyn Prompt>) -> Self {
        Self {
            notifications: NotificationModal::new(api.clone()),
            api,
            prompt,
            bookings: Vec::new(),
            resources: Vec::new(),
            filter: None,
            loading: false,
            error: None,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn filter(&self) -> Option<BookingStatus> {
        self.filter
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifications(&self) -> &NotificationModal {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationModal {
        &mut self.notifications
    }

    /// Fetches bookings and resources. Runs on mount and on filter changes.
    pub async fn refresh(&mut self) {
        self.fetch_bookings().await;
        self.fetch_resources().await;
    }

    pub async fn set_filter(&mut self, status: Option<BookingStatus>) {
        self.filter = status;
        self.refresh().await;
    }

    async fn fetch_bookings(&mut self) {
        self.loading = true;
        match self.api.list_bookings(&BookingQuery::with_status(self.filter)).await {
            Ok(bookings) => {
                debug!("Fetched {} bookings", bookings.len());
                self.bookings = bookings;
                self.error = None;
            }
            Err(e) => {
                error!("Failed to fetch bookings: {}", e);
                self.error = Some(messages::FETCH_BOOKINGS_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    async fn fetch_resources(&mut self) {
        match self.api.list_resources(&ResourceQuery::default()).await {
            Ok(resources) => self.resources = resources,
            Err(e) => warn!("Failed to fetch resources: {}", e),
        }
    }

    pub fn resource_name(&self, resource_id: i64) -> String {
        self.resources
            .iter()
            .find(|r| r.id == Some(resource_id))
            .map(|r| r.name.clone())
            .unwrap_or_else(|| messages::unknown_resource(resource_id))
    }

    pub fn rows(&self) -> Vec<BookingRow> {
        self.bookings
            .iter()
            .map(|b| {
                let mut actions = Vec::with_capacity(3);
                if b.status.is_cancellable() {
                    actions.push(RowAction::Cancel);
                }
                actions.extend([RowAction::Edit, RowAction::Delete]);

                BookingRow {
                    id: b.id,
                    resource: self.resource_name(b.resource_id),
                    customer_name: b.customer_name.clone(),
                    customer_email: b.customer_email.clone(),
                    start: time::display(&b.start_time),
                    end: time::display(&b.end_time),
                    status: b.status,
                    notes: b
                        .notes
                        .as_deref()
                        .filter(|n| !n.is_empty())
                        .unwrap_or("-")
                        .to_string(),
                    actions,
                }
            })
            .collect()
    }

    fn find(&self, id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == Some(id))
    }

    /// Cancels after confirmation. Only offered for bookings that are not
    /// already cancelled.
    pub async fn cancel(&mut self, id: i64) {
        match self.find(id) {
            Some(booking) if booking.status.is_cancellable() => {}
            Some(_) => {
                debug!("Booking {} is already cancelled", id);
                return;
            }
            None => {
                warn!("Booking {} is not in the list", id);
                return;
            }
        }

        if !self.prompt.confirm(messages::CONFIRM_CANCEL).await {
            return;
        }

        match self.api.cancel_booking(id).await {
            Ok(_) => {
                info!("Cancelled booking {}", id);
                self.fetch_bookings().await;
            }
            Err(e) => {
                error!("Failed to cancel booking {}: {}", id, e);
                self.prompt.alert(messages::CANCEL_FAILED).await;
            }
        }
    }

    pub async fn delete(&mut self, id: i64) {
        if self.find(id).is_none() {
            warn!("Booking {} is not in the list", id);
            return;
        }

        if !self.prompt.confirm(messages::CONFIRM_DELETE).await {
            return;
        }

        match self.api.delete_booking(id).await {
            Ok(()) => {
                info!("Deleted booking {}", id);
                self.fetch_bookings().await;
            }
            Err(e) => {
                error!("Failed to delete booking {}: {}", id, e);
                self.prompt.alert(messages::DELETE_FAILED).await;
            }
        }
    }

    /// Route of the edit form for a booking.
    pub fn edit(&self, id: i64) -> Route {
        Route::EditBooking(id)
    }

    pub fn render(&self) -> String {
        let filter = self.filter.map(|s| s.label()).unwrap_or("All");
        let mut out = vec![
            "== Bookings ==".to_string(),
            format!("Status: {}", filter),
        ];

        if self.loading {
            out.push(messages::LOADING.to_string());
        } else if let Some(error) = &self.error {
            out.push(error.clone());
        } else if self.bookings.is_empty() {
            out.push(messages::NO_BOOKINGS.to_string());
        } else {
            let rows: Vec<Vec<String>> = self
                .rows()
                .into_iter()
                .map(|row| {
                    let actions = row
                        .actions
                        .iter()
                        .map(|a| match a {
                            RowAction::Cancel => "cancel",
                            RowAction::Edit => "edit",
                            RowAction::Delete => "delete",
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    vec![
                        row.id.map(|id| id.to_string()).unwrap_or_default(),
                        row.resource,
                        row.customer_name,
                        row.customer_email,
                        row.start,
                        row.end,
                        format!("{} ({})", row.status.label(), row.status.badge()),
                        row.notes,
                        actions,
                    ]
                })
                .collect();
            out.push(render::table(
                &[
                    "ID", "Resource", "Name", "Email", "Start", "End", "Status", "Notes", "Actions",
                ],
                &rows,
            ));
        }

        if let Some(modal) = self.notifications.render() {
            out.push(String::new());
            out.push(modal);
        }
        out.join("\n")
    }
}
