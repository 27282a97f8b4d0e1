//! Returns list

use std::cmp::Ordering;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    listing::{Listable, contains_lowercase},
    money::Price,
};

/// Return request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    /// Awaiting review.
    Requested,

    /// Approved; waiting for the parcel.
    Approved,

    /// Declined.
    Rejected,

    /// Parcel received at the warehouse.
    Received,

    /// Money sent back.
    Refunded,
}

/// Sortable return columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnSortField {
    /// Request date.
    RequestedOn,

    /// Refund amount.
    Amount,

    /// Customer name, case-insensitive.
    CustomerName,
}

/// Return request row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnRequest {
    /// Identifier.
    pub id: String,

    /// Order the items came from.
    pub order_id: String,

    /// Customer name.
    pub customer_name: String,

    /// Reason given by the customer.
    pub reason: String,

    /// Lifecycle status.
    pub status: ReturnStatus,

    /// Refund amount.
    pub amount: Price,

    /// Request date.
    pub requested_on: Date,
}

impl Listable for ReturnRequest {
    type Status = ReturnStatus;
    type SortField = ReturnSortField;

    const STATUSES: &'static [ReturnStatus] = &[
        ReturnStatus::Requested,
        ReturnStatus::Approved,
        ReturnStatus::Rejected,
        ReturnStatus::Received,
        ReturnStatus::Refunded,
    ];

    fn matches_search(&self, needle: &str) -> bool {
        [&self.id, &self.order_id, &self.customer_name, &self.reason]
            .into_iter()
            .any(|text| contains_lowercase(text, needle))
    }

    fn status(&self) -> ReturnStatus {
        self.status
    }

    fn compare(&self, other: &Self, field: ReturnSortField) -> Ordering {
        match field {
            ReturnSortField::RequestedOn => self.requested_on.cmp(&other.requested_on),
            ReturnSortField::Amount => self
                .amount
                .amount()
                .cmp(other.amount.amount()),
            ReturnSortField::CustomerName => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso;

    use crate::{
        listing::{ListQuery, SortDirection, status_counts},
        money::minor,
    };

    use super::*;

    fn request(
        id: &str,
        order_id: &str,
        status: ReturnStatus,
        day: i8,
        amount: i64,
    ) -> ReturnRequest {
        ReturnRequest {
            id: id.to_string(),
            order_id: order_id.to_string(),
            customer_name: "Asha Rao".to_string(),
            reason: "Size too small".to_string(),
            status,
            amount: minor(amount, iso::INR),
            requested_on: date(2025, 3, day),
        }
    }

    #[test]
    fn search_matches_order_reference() {
        let list = [
            request("ret_1", "ORD-1001", ReturnStatus::Requested, 1, 500_00),
            request("ret_2", "ORD-2002", ReturnStatus::Approved, 2, 900_00),
        ];

        let result = ListQuery::default().search("ord-2").apply(&list);

        assert_eq!(result.len(), 1);
        assert_eq!(result.first().map(|r| r.id.as_str()), Some("ret_2"));
    }

    #[test]
    fn newest_first_within_status() {
        let list = [
            request("ret_1", "ORD-1", ReturnStatus::Requested, 3, 100_00),
            request("ret_2", "ORD-2", ReturnStatus::Refunded, 9, 100_00),
            request("ret_3", "ORD-3", ReturnStatus::Requested, 7, 100_00),
        ];

        let result = ListQuery::default()
            .status(ReturnStatus::Requested)
            .sort(ReturnSortField::RequestedOn, SortDirection::Descending)
            .apply(&list);

        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["ret_3", "ret_1"]);
    }

    #[test]
    fn counts_include_empty_statuses() {
        let list = [request("ret_1", "ORD-1", ReturnStatus::Received, 1, 100_00)];

        let counts = status_counts(&list);

        assert_eq!(counts.len(), ReturnRequest::STATUSES.len());
        assert!(counts.contains(&(ReturnStatus::Received, 1)));
        assert!(counts.contains(&(ReturnStatus::Requested, 0)));
    }
}
