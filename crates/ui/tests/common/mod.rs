#![allow(dead_code)]

use std::sync::Arc;

use booking_client::{mock::MockApi, BookingApi};
use booking_core::{
    errors::BookingError,
    models::{
        booking::{Booking, BookingStatus},
        resource::Resource,
    },
    time,
};
use booking_ui::{mock::MockPrompt, Prompt};

pub fn resource(id: i64, name: &str, available: bool) -> Resource {
    Resource {
        id: Some(id),
        name: name.to_string(),
        description: None,
        capacity: 10,
        available,
        created_at: None,
        updated_at: None,
    }
}

pub fn resources() -> Vec<Resource> {
    vec![resource(1, "Room A", true), resource(2, "Room B", true)]
}

pub fn booking(id: i64, resource_id: i64, status: BookingStatus) -> Booking {
    Booking {
        id: Some(id),
        resource_id,
        customer_name: "Test User".to_string(),
        customer_email: "test@example.com".to_string(),
        start_time: time::parse_flexible("2026-02-01T10:00:00").unwrap(),
        end_time: time::parse_flexible("2026-02-01T11:00:00").unwrap(),
        status,
        notes: Some("Initial note".to_string()),
        created_at: None,
        updated_at: None,
    }
}

pub fn backend_error(message: Option<&str>) -> BookingError {
    BookingError::Api {
        status: 400,
        message: message.map(str::to_string),
    }
}

pub fn into_api(api: MockApi) -> Arc<dyn BookingApi> {
    Arc::new(api)
}

pub fn into_prompt(prompt: MockPrompt) -> Arc<dyn Prompt> {
    Arc::new(prompt)
}
