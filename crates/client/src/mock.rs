use async_trait::async_trait;
use booking_core::{
    errors::BookingResult,
    models::{
        booking::{AvailabilityCheck, AvailabilityQuery, Booking, BookingQuery},
        notification::Notification,
        resource::{Resource, ResourceQuery},
    },
};
use mockall::mock;

use crate::BookingApi;

// Mock API for driving the views in tests
mock! {
    pub Api {}

    #[async_trait]
    impl BookingApi for Api {
        async fn list_resources(&self, query: &ResourceQuery) -> BookingResult<Vec<Resource>>;
        async fn get_resource(&self, id: i64) -> BookingResult<Resource>;
        async fn create_resource(&self, resource: &Resource) -> BookingResult<Resource>;
        async fn update_resource(&self, id: i64, resource: &Resource) -> BookingResult<Resource>;
        async fn delete_resource(&self, id: i64) -> BookingResult<()>;

        async fn list_bookings(&self, query: &BookingQuery) -> BookingResult<Vec<Booking>>;
        async fn get_booking(&self, id: i64) -> BookingResult<Booking>;
        async fn check_availability(&self, query: &AvailabilityQuery) -> BookingResult<AvailabilityCheck>;
        async fn create_booking(&self, booking: &Booking) -> BookingResult<Booking>;
        async fn update_booking(&self, id: i64, booking: &Booking) -> BookingResult<Booking>;
        async fn cancel_booking(&self, id: i64) -> BookingResult<Booking>;
        async fn delete_booking(&self, id: i64) -> BookingResult<()>;

        async fn list_notifications(&self) -> BookingResult<Vec<Notification>>;
        async fn notifications_for_booking(&self, booking_id: i64) -> BookingResult<Vec<Notification>>;
    }
}
