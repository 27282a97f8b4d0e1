//! Bookings list

use std::cmp::Ordering;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, contains_lowercase};

/// Booking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting confirmation.
    Pending,

    /// Confirmed by the store.
    Confirmed,

    /// Took place.
    Completed,

    /// Called off.
    Cancelled,
}

/// Sortable booking columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingSortField {
    /// Appointment time.
    ScheduledAt,

    /// Customer name, case-insensitive.
    CustomerName,

    /// Party size.
    Guests,
}

/// Booking row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Identifier.
    pub id: String,

    /// Customer name.
    pub customer_name: String,

    /// Customer contact number.
    pub phone: String,

    /// Booked service, e.g. a styling session.
    pub service: String,

    /// Lifecycle status.
    pub status: BookingStatus,

    /// Appointment time in store-local time.
    pub scheduled_at: DateTime,

    /// Party size.
    pub guests: u32,
}

impl Listable for Booking {
    type Status = BookingStatus;
    type SortField = BookingSortField;

    const STATUSES: &'static [BookingStatus] = &[
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    fn matches_search(&self, needle: &str) -> bool {
        [&self.id, &self.customer_name, &self.phone, &self.service]
            .into_iter()
            .any(|text| contains_lowercase(text, needle))
    }

    fn status(&self) -> BookingStatus {
        self.status
    }

    fn compare(&self, other: &Self, field: BookingSortField) -> Ordering {
        match field {
            BookingSortField::ScheduledAt => self.scheduled_at.cmp(&other.scheduled_at),
            BookingSortField::CustomerName => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            BookingSortField::Guests => self.guests.cmp(&other.guests),
        }
    }
}
