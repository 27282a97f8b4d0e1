//! Listing
//!
//! Client-side search, status filtering, sorting and pagination for back-office lists
//! (customers, returns, bookings). Queries borrow the source slice and never reorder it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

mod bookings;
mod customers;
mod page;
mod returns;

pub use bookings::{Booking, BookingSortField, BookingStatus};
pub use customers::{Customer, CustomerSegment, CustomerSortField};
pub use page::{Page, PageError, paginate};
pub use returns::{ReturnRequest, ReturnSortField, ReturnStatus};

/// A record that can be searched, filtered by status and sorted.
pub trait Listable {
    /// Status (or segment) used by tab filters.
    type Status: Copy + Eq + 'static;

    /// Columns the list can be sorted by.
    type SortField: Copy;

    /// Every status in display order.
    const STATUSES: &'static [Self::Status];

    /// Whether any searchable text contains `needle`. `needle` is already lowercased.
    fn matches_search(&self, needle: &str) -> bool;

    /// The record's status.
    fn status(&self) -> Self::Status;

    /// Compare two records by a column, ascending.
    fn compare(&self, other: &Self, field: Self::SortField) -> Ordering;
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,

    /// Largest first.
    Descending,
}

/// Search, filter and sort settings for a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<S, F> {
    /// Case-insensitive substring; blank disables searching.
    pub search: String,

    /// Keep only records with this status.
    pub status: Option<S>,

    /// Column and direction.
    pub sort: Option<(F, SortDirection)>,
}

impl<S, F> Default for ListQuery<S, F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            sort: None,
        }
    }
}

impl<S, F> ListQuery<S, F> {
    /// Set the search text.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Filter by status.
    #[must_use]
    pub fn status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    /// Sort by a column.
    #[must_use]
    pub fn sort(mut self, field: F, direction: SortDirection) -> Self {
        self.sort = Some((field, direction));
        self
    }

    /// Apply the query. Equal sort keys keep their source order.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Listable<Status = S, SortField = F>,
        S: Copy + Eq,
        F: Copy,
    {
        let needle = self.search.trim().to_lowercase();

        let mut matched: Vec<&T> = items
            .iter()
            .filter(|item| needle.is_empty() || item.matches_search(&needle))
            .filter(|item| self.status.is_none_or(|status| item.status() == status))
            .collect();

        if let Some((field, direction)) = self.sort {
            matched.sort_by(|a, b| match direction {
                SortDirection::Ascending => a.compare(b, field),
                SortDirection::Descending => b.compare(a, field),
            });
        }

        matched
    }
}

/// Number of records per status, in [`Listable::STATUSES`] order. Used for tab badges.
pub fn status_counts<T: Listable>(items: &[T]) -> SmallVec<[(T::Status, usize); 8]> {
    T::STATUSES
        .iter()
        .map(|status| {
            let count = items.iter().filter(|item| item.status() == *status).count();

            (*status, count)
        })
        .collect()
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso;

    use crate::money::minor;

    use super::*;

    fn customer(id: &str, name: &str, segment: CustomerSegment, orders: u32) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            phone: None,
            segment,
            orders,
            lifetime_value: minor(i64::from(orders) * 1_000_00, iso::INR),
            joined_on: date(2024, 1, 1),
        }
    }

    fn customers() -> Vec<Customer> {
        vec![
            customer("c1", "Asha Rao", CustomerSegment::Repeat, 4),
            customer("c2", "Ravi Kumar", CustomerSegment::New, 1),
            customer("c3", "asha menon", CustomerSegment::HighValue, 12),
            customer("c4", "Meera Shah", CustomerSegment::Repeat, 4),
            customer("c5", "Dev Patel", CustomerSegment::Inactive, 0),
        ]
    }

    fn ids(items: &[&Customer]) -> Vec<String> {
        items.iter().map(|customer| customer.id.clone()).collect()
    }

    #[test]
    fn empty_search_returns_original_list() {
        let list = customers();

        let result = ListQuery::default().search("   ").apply(&list);

        assert_eq!(ids(&result), vec!["c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let list = customers();

        let result = ListQuery::default().search("ASHA").apply(&list);

        assert_eq!(ids(&result), vec!["c1", "c3"]);
    }

    #[test]
    fn status_filter_combines_with_search() {
        let list = customers();

        let query = ListQuery::default()
            .search("a")
            .status(CustomerSegment::Repeat);

        assert_eq!(ids(&query.apply(&list)), vec!["c1", "c4"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let list = customers();

        let ascending = ListQuery::default()
            .sort(CustomerSortField::Orders, SortDirection::Ascending)
            .apply(&list);

        let descending = ListQuery::default()
            .sort(CustomerSortField::Orders, SortDirection::Descending)
            .apply(&list);

        assert_eq!(ids(&ascending), vec!["c5", "c2", "c1", "c4", "c3"]);
        assert_eq!(ids(&descending), vec!["c3", "c1", "c4", "c2", "c5"]);
    }

    #[test]
    fn applying_twice_gives_identical_output() {
        let list = customers();

        let query = ListQuery::default()
            .search("a")
            .sort(CustomerSortField::Name, SortDirection::Descending);

        assert_eq!(ids(&query.apply(&list)), ids(&query.apply(&list)));
    }

    #[test]
    fn source_list_is_not_reordered() {
        let list = customers();
        let before = list.clone();

        ListQuery::default()
            .sort(CustomerSortField::LifetimeValue, SortDirection::Descending)
            .apply(&list);

        assert_eq!(list, before);
    }

    #[test]
    fn status_counts_follow_declaration_order() {
        let counts = status_counts(&customers());

        assert_eq!(
            counts.to_vec(),
            vec![
                (CustomerSegment::New, 1),
                (CustomerSegment::Repeat, 2),
                (CustomerSegment::Inactive, 1),
                (CustomerSegment::HighValue, 1),
            ]
        );
    }
}
