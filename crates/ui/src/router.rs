use std::fmt;
use std::str::FromStr;

use eyre::{eyre, Report};

/// Screens reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Bookings,
    /// `/resources`
    Resources,
    /// `/new-booking`
    NewBooking,
    /// `/bookings/:id/edit`
    EditBooking(i64),
}

impl FromStr for Route {
    type Err = Report;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Bookings),
            ["resources"] => Ok(Route::Resources),
            ["new-booking"] => Ok(Route::NewBooking),
            ["bookings", id, "edit"] => id
                .parse()
                .map(Route::EditBooking)
                .map_err(|_| eyre!("Invalid booking id: {}", id)),
            _ => Err(eyre!("Unknown route: {}", path.trim())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Bookings => f.write_str("/"),
            Route::Resources => f.write_str("/resources"),
            Route::NewBooking => f.write_str("/new-booking"),
            Route::EditBooking(id) => write!(f, "/bookings/{}/edit", id),
        }
    }
}
