pub mod booking;
pub mod notification;
pub mod resource;
