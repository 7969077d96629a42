//! # Booking API client
//!
//! Typed access to the booking backend. Views depend on the [`BookingApi`]
//! trait rather than on [`HttpClient`] so they can be driven by the mocks in
//! [`mock`] in tests.

/// Client configuration loaded from the environment
pub mod config;
/// reqwest-backed implementation of [`BookingApi`]
pub mod http;
/// mockall doubles for [`BookingApi`]
pub mod mock;

use async_trait::async_trait;
use booking_core::{
    errors::BookingResult,
    models::{
        booking::{AvailabilityCheck, AvailabilityQuery, Booking, BookingQuery},
        notification::Notification,
        resource::{Resource, ResourceQuery},
    },
};

pub use http::HttpClient;

/// Operations offered by the booking backend.
///
/// One method per endpoint; every call is a single request with no retry.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `GET /resources`
    async fn list_resources(&self, query: &ResourceQuery) -> BookingResult<Vec<Resource>>;
    /// `GET /resources/:id`
    async fn get_resource(&self, id: i64) -> BookingResult<Resource>;
    /// `POST /resources`
    async fn create_resource(&self, resource: &Resource) -> BookingResult<Resource>;
    /// `PUT /resources/:id`
    async fn update_resource(&self, id: i64, resource: &Resource) -> BookingResult<Resource>;
    /// `DELETE /resources/:id`
    async fn delete_resource(&self, id: i64) -> BookingResult<()>;

    /// `GET /bookings`
    async fn list_bookings(&self, query: &BookingQuery) -> BookingResult<Vec<Booking>>;
    /// `GET /bookings/:id`
    async fn get_booking(&self, id: i64) -> BookingResult<Booking>;
    /// `GET /bookings/available`
    async fn check_availability(&self, query: &AvailabilityQuery) -> BookingResult<AvailabilityCheck>;
    /// `POST /bookings`
    async fn create_booking(&self, booking: &Booking) -> BookingResult<Booking>;
    /// `PUT /bookings/:id`
    async fn update_booking(&self, id: i64, booking: &Booking) -> BookingResult<Booking>;
    /// `PATCH /bookings/:id/cancel`
    async fn cancel_booking(&self, id: i64) -> BookingResult<Booking>;
    /// `DELETE /bookings/:id`
    async fn delete_booking(&self, id: i64) -> BookingResult<()>;

    /// `GET /notifications`
    async fn list_notifications(&self) -> BookingResult<Vec<Notification>>;
    /// `GET /notifications/booking/:bookingId`
    async fn notifications_for_booking(&self, booking_id: i64) -> BookingResult<Vec<Notification>>;
}
