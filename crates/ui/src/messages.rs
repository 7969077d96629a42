//! User-visible strings.

pub const REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const INVALID_INPUT: &str = "Please enter a valid resource and date/time";
pub const END_BEFORE_START: &str = "End time must be after start time";
pub const SLOT_UNAVAILABLE: &str = "The selected time slot is not available";
pub const STATUS_EDIT_ONLY: &str = "Status can only be changed when editing a booking";

pub const BOOKING_CREATED: &str = "Booking created successfully";
pub const BOOKING_UPDATED: &str = "Booking updated successfully";
pub const CREATE_FAILED: &str = "Failed to create booking";
pub const UPDATE_FAILED: &str = "Failed to update booking";
pub const LOAD_BOOKING_FAILED: &str = "Failed to load booking";

pub const FETCH_BOOKINGS_FAILED: &str = "Failed to fetch bookings";
pub const NO_BOOKINGS: &str = "No bookings found";
pub const CONFIRM_CANCEL: &str = "Cancel this booking?";
pub const CONFIRM_DELETE: &str = "Delete this booking?";
pub const CANCEL_FAILED: &str = "Failed to cancel booking";
pub const DELETE_FAILED: &str = "Failed to delete booking";

pub const FETCH_RESOURCES_FAILED: &str = "Failed to fetch resources";
pub const NO_RESOURCES: &str = "No resources found";
pub const NO_DESCRIPTION: &str = "No description";

pub const FETCH_NOTIFICATIONS_FAILED: &str = "Failed to fetch notifications";
pub const NO_NOTIFICATIONS: &str = "No notifications";

pub const LOADING: &str = "Loading...";
pub const PROCESSING: &str = "Processing...";

/// Fallback label for a booking whose resource is not in the local list.
pub fn unknown_resource(id: i64) -> String {
    format!("Resource ID: {}", id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Inline message shown above a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}
