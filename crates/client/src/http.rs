use async_trait::async_trait;
use booking_core::{
    errors::{BookingError, BookingResult},
    models::{
        booking::{AvailabilityCheck, AvailabilityQuery, Booking, BookingQuery},
        notification::Notification,
        resource::{Resource, ResourceQuery},
    },
};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::{config::ClientConfig, BookingApi};

/// Error payload returned by the backend, `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// [`BookingApi`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> BookingResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(transport)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    async fn execute(&self, request: RequestBuilder) -> BookingResult<Response> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        warn!("{} returned {}", url, status);
        Err(error_from_response(status, &body, &url))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> BookingResult<T> {
        let response = self.execute(request).await?;
        let bytes = response.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn transport(err: reqwest::Error) -> BookingError {
    BookingError::Transport(eyre::Report::new(err))
}

/// Maps a non-success response onto the error taxonomy. A 404 without a
/// message becomes [`BookingError::NotFound`].
fn error_from_response(status: StatusCode, body: &str, path: &str) -> BookingError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty());

    match (status, message) {
        (StatusCode::NOT_FOUND, None) => BookingError::NotFound(path.to_string()),
        (status, message) => BookingError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl BookingApi for HttpClient {
    async fn list_resources(&self, query: &ResourceQuery) -> BookingResult<Vec<Resource>> {
        self.fetch(self.request(Method::GET, "/resources").query(query)).await
    }

    async fn get_resource(&self, id: i64) -> BookingResult<Resource> {
        self.fetch(self.request(Method::GET, &format!("/resources/{}", id))).await
    }

    async fn create_resource(&self, resource: &Resource) -> BookingResult<Resource> {
        self.fetch(self.request(Method::POST, "/resources").json(resource)).await
    }

    async fn update_resource(&self, id: i64, resource: &Resource) -> BookingResult<Resource> {
        self.fetch(self.request(Method::PUT, &format!("/resources/{}", id)).json(resource))
            .await
    }

    async fn delete_resource(&self, id: i64) -> BookingResult<()> {
        self.execute(self.request(Method::DELETE, &format!("/resources/{}", id)))
            .await?;
        Ok(())
    }

    async fn list_bookings(&self, query: &BookingQuery) -> BookingResult<Vec<Booking>> {
        self.fetch(self.request(Method::GET, "/bookings").query(query)).await
    }

    async fn get_booking(&self, id: i64) -> BookingResult<Booking> {
        self.fetch(self.request(Method::GET, &format!("/bookings/{}", id))).await
    }

    async fn check_availability(&self, query: &AvailabilityQuery) -> BookingResult<AvailabilityCheck> {
        self.fetch(self.request(Method::GET, "/bookings/available").query(query))
            .await
    }

    async fn create_booking(&self, booking: &Booking) -> BookingResult<Booking> {
        self.fetch(self.request(Method::POST, "/bookings").json(booking)).await
    }

    async fn update_booking(&self, id: i64, booking: &Booking) -> BookingResult<Booking> {
        self.fetch(self.request(Method::PUT, &format!("/bookings/{}", id)).json(booking))
            .await
    }

    async fn cancel_booking(&self, id: i64) -> BookingResult<Booking> {
        self.fetch(self.request(Method::PATCH, &format!("/bookings/{}/cancel", id)))
            .await
    }

    async fn delete_booking(&self, id: i64) -> BookingResult<()> {
        self.execute(self.request(Method::DELETE, &format!("/bookings/{}", id)))
            .await?;
        Ok(())
    }

    async fn list_notifications(&self) -> BookingResult<Vec<Notification>> {
        self.fetch(self.request(Method::GET, "/notifications")).await
    }

    async fn notifications_for_booking(&self, booking_id: i64) -> BookingResult<Vec<Notification>> {
        self.fetch(self.request(Method::GET, &format!("/notifications/booking/{}", booking_id)))
            .await
    }
}
