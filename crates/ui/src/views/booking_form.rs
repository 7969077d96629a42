//! Create/edit form for a single booking.
//!
//! Submission runs three local checks before any request is made: required
//! fields present, resource id and times parseable, end after start. Only
//! then does create mode ask the backend whether the slot is free.

use std::str::FromStr;
use std::sync::Arc;

use booking_client::BookingApi;
use booking_core::{
    errors::{BookingError, BookingResult},
    models::{
        booking::{AvailabilityQuery, Booking, BookingStatus},
        resource::{Resource, ResourceQuery},
    },
    time,
};
use chrono::NaiveDateTime;
use tracing::{error, info, warn};

use crate::messages::{self, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Raw input values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub resource_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
    pub status: BookingStatus,
}

impl FormData {
    /// Fills the inputs from a stored booking, times in local input format.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            resource_id: booking.resource_id.to_string(),
            customer_name: booking.customer_name.clone(),
            customer_email: booking.customer_email.clone(),
            start_time: time::to_input(&booking.start_time),
            end_time: time::to_input(&booking.end_time),
            notes: booking.notes.clone().unwrap_or_default(),
            status: booking.status,
        }
    }

    fn missing_required(&self) -> bool {
        [
            &self.resource_id,
            &self.customer_name,
            &self.customer_email,
            &self.start_time,
            &self.end_time,
        ]
        .iter()
        .any(|value| value.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ResourceId,
    CustomerName,
    CustomerEmail,
    StartTime,
    EndTime,
    Notes,
    Status,
}

impl FromStr for Field {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resource" | "resource_id" => Ok(Field::ResourceId),
            "name" | "customer_name" => Ok(Field::CustomerName),
            "email" | "customer_email" => Ok(Field::CustomerEmail),
            "start" | "start_time" => Ok(Field::StartTime),
            "end" | "end_time" => Ok(Field::EndTime),
            "notes" => Ok(Field::Notes),
            "status" => Ok(Field::Status),
            other => Err(BookingError::Validation(format!("Unknown field: {}", other))),
        }
    }
}

/// Parsed values that passed local validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draft {
    pub resource_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

pub struct BookingForm {
    api: Arc<dyn BookingApi>,
    mode: FormMode,
    resources: Vec<Resource>,
    data: FormData,
    loading: bool,
    message: Option<Message>,
}

impl BookingForm {
    pub fn new(api: Arc<dyn BookingApi>, mode: FormMode) -> Self {
        Self {
            api,
            mode,
            resources: Vec::new(),
            data: FormData::default(),
            loading: false,
            message: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Loads the resource choices and, when editing, the booking itself.
    pub async fn load(&mut self) {
        match self.api.list_resources(&ResourceQuery::available_only()).await {
            Ok(resources) => self.resources = resources,
            Err(e) => warn!("Failed to fetch resources: {}", e),
        }

        if let FormMode::Edit(id) = self.mode {
            match self.api.get_booking(id).await {
                Ok(booking) => self.data = FormData::from_booking(&booking),
                Err(e) => {
                    error!("Failed to load booking {}: {}", id, e);
                    self.message = Some(Message::error(messages::LOAD_BOOKING_FAILED));
                }
            }
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> BookingResult<()> {
        let value = value.to_string();
        match field {
            Field::ResourceId => self.data.resource_id = value,
            Field::CustomerName => self.data.customer_name = value,
            Field::CustomerEmail => self.data.customer_email = value,
            Field::StartTime => self.data.start_time = value,
            Field::EndTime => self.data.end_time = value,
            Field::Notes => self.data.notes = value,
            Field::Status => {
                if self.mode == FormMode::Create {
                    return Err(BookingError::Validation(messages::STATUS_EDIT_ONLY.to_string()));
                }
                self.data.status = value.parse()?;
            }
        }
        Ok(())
    }

    /// Runs the local checks in order and stops at the first failure.
    pub fn validate(&self) -> Result<Draft, &'static str> {
        if self.data.missing_required() {
            return Err(messages::REQUIRED_FIELDS);
        }

        let resource_id = self.data.resource_id.trim().parse::<i64>().ok();
        let start = time::parse_flexible(&self.data.start_time);
        let end = time::parse_flexible(&self.data.end_time);
        let (Some(resource_id), Some(start), Some(end)) = (resource_id, start, end) else {
            return Err(messages::INVALID_INPUT);
        };

        if end <= start {
            return Err(messages::END_BEFORE_START);
        }

        Ok(Draft {
            resource_id,
            start,
            end,
        })
    }

    pub async fn submit(&mut self) {
        self.message = None;

        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(text) => {
                self.message = Some(Message::error(text));
                return;
            }
        };

        self.loading = true;
        let (result, fallback) = match self.mode {
            FormMode::Create => (self.create(draft).await, messages::CREATE_FAILED),
            FormMode::Edit(id) => (self.update(id, draft).await, messages::UPDATE_FAILED),
        };
        self.loading = false;

        self.message = Some(match result {
            Ok(message) => message,
            Err(e) => {
                error!("Booking submission failed: {}", e);
                Message::error(e.backend_message().unwrap_or(fallback))
            }
        });
    }

    async fn create(&mut self, draft: Draft) -> BookingResult<Message> {
        let availability = self
            .api
            .check_availability(&AvailabilityQuery {
                resource_id: draft.resource_id,
                start: draft.start,
                end: draft.end,
            })
            .await?;

        if !availability.available {
            info!("Resource {} is not available for the requested slot", draft.resource_id);
            return Ok(Message::error(messages::SLOT_UNAVAILABLE));
        }

        let booking = self.booking(None, draft, BookingStatus::Confirmed);
        let created = self.api.create_booking(&booking).await?;
        info!("Created booking {:?}", created.id);

        self.data = FormData::default();
        Ok(Message::success(messages::BOOKING_CREATED))
    }

    async fn update(&mut self, id: i64, draft: Draft) -> BookingResult<Message> {
        let booking = self.booking(Some(id), draft, self.data.status);
        self.api.update_booking(id, &booking).await?;
        info!("Updated booking {}", id);

        Ok(Message::success(messages::BOOKING_UPDATED))
    }

    fn booking(&self, id: Option<i64>, draft: Draft, status: BookingStatus) -> Booking {
        Booking {
            id,
            resource_id: draft.resource_id,
            customer_name: self.data.customer_name.clone(),
            customer_email: self.data.customer_email.clone(),
            start_time: draft.start,
            end_time: draft.end,
            status,
            notes: (!self.data.notes.is_empty()).then(|| self.data.notes.clone()),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn render(&self) -> String {
        let mut out = Vec::new();
        out.push(match self.mode {
            FormMode::Create => "New Booking".to_string(),
            FormMode::Edit(id) => format!("Edit Booking #{}", id),
        });

        if let Some(message) = &self.message {
            let tag = if message.is_error() { "error" } else { "ok" };
            out.push(format!("[{}] {}", tag, message.text));
        }

        let choices = self
            .resources
            .iter()
            .filter_map(|r| r.id.map(|id| format!("{}={} (capacity {})", id, r.name, r.capacity)))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(format!("  resource * : {}", self.data.resource_id));
        out.push(format!("               choices: {}", if choices.is_empty() { "-" } else { choices.as_str() }));
        out.push(format!("  name *     : {}", self.data.customer_name));
        out.push(format!("  email *    : {}", self.data.customer_email));
        out.push(format!("  start *    : {}", self.data.start_time));
        out.push(format!("  end *      : {}", self.data.end_time));
        out.push(format!("  notes      : {}", self.data.notes));
        if let FormMode::Edit(_) = self.mode {
            out.push(format!("  status     : {}", self.data.status));
        }

        if self.loading {
            out.push(messages::PROCESSING.to_string());
        }
        out.join("\n")
    }
}
