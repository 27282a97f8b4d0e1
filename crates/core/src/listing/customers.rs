//! Customers list

use std::cmp::Ordering;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    listing::{Listable, contains_lowercase},
    money::Price,
};

/// Customer classification used by the customers list tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSegment {
    /// First order placed recently.
    New,

    /// More than one order.
    Repeat,

    /// No recent orders.
    Inactive,

    /// High lifetime value.
    HighValue,
}

/// Sortable customer columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSortField {
    /// Name, case-insensitive.
    Name,

    /// Number of orders.
    Orders,

    /// Lifetime value.
    LifetimeValue,

    /// Sign-up date.
    JoinedOn,
}

/// Customer row.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Identifier.
    pub id: String,

    /// Full name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Phone number.
    pub phone: Option<String>,

    /// Segment.
    pub segment: CustomerSegment,

    /// Orders placed.
    pub orders: u32,

    /// Sum of order totals.
    pub lifetime_value: Price,

    /// Sign-up date.
    pub joined_on: Date,
}

impl Listable for Customer {
    type Status = CustomerSegment;
    type SortField = CustomerSortField;

    const STATUSES: &'static [CustomerSegment] = &[
        CustomerSegment::New,
        CustomerSegment::Repeat,
        CustomerSegment::Inactive,
        CustomerSegment::HighValue,
    ];

    fn matches_search(&self, needle: &str) -> bool {
        contains_lowercase(&self.name, needle)
            || contains_lowercase(&self.email, needle)
            || self
                .phone
                .as_deref()
                .is_some_and(|phone| contains_lowercase(phone, needle))
    }

    fn status(&self) -> CustomerSegment {
        self.segment
    }

    fn compare(&self, other: &Self, field: CustomerSortField) -> Ordering {
        match field {
            CustomerSortField::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            CustomerSortField::Orders => self.orders.cmp(&other.orders),
            CustomerSortField::LifetimeValue => self
                .lifetime_value
                .amount()
                .cmp(other.lifetime_value.amount()),
            CustomerSortField::JoinedOn => self.joined_on.cmp(&other.joined_on),
        }
    }
}
