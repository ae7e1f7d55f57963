//! Client-side table model for the parcel listing.
//!
//! DESIGN
//! ======
//! The table owns the fetched rows plus three independent view controls:
//! a name filter, a single-column sort, and fixed-size pagination. Rows are
//! never mutated; every render derives the visible page as
//! filter -> sort -> slice.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use crate::net::types::Parcel;
use crate::util::currency::{format_currency, format_optional_currency};

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Columns of the parcel table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParcelColumn {
    Id,
    Name,
    Type,
    Weight,
    ContentValue,
    DeliveryCost,
}

impl ParcelColumn {
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Type,
        Self::Weight,
        Self::ContentValue,
        Self::DeliveryCost,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Type => "Type",
            Self::Weight => "Weight",
            Self::ContentValue => "Value",
            Self::DeliveryCost => "Delivery",
        }
    }

    /// Rendered cell text. Money columns go through currency formatting.
    pub fn cell(self, parcel: &Parcel) -> String {
        match self {
            Self::Id => parcel.id.clone(),
            Self::Name => parcel.name.clone(),
            Self::Type => parcel.parcel_type.clone(),
            Self::Weight => parcel.weight.to_string(),
            Self::ContentValue => format_currency(parcel.content_value_cents),
            Self::DeliveryCost => format_optional_currency(parcel.delivery_cost_cents),
        }
    }

    /// Ascending order for this column. Missing delivery costs sort first.
    fn compare(self, a: &Parcel, b: &Parcel) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Type => a.parcel_type.cmp(&b.parcel_type),
            Self::Weight => a.weight.total_cmp(&b.weight),
            Self::ContentValue => a.content_value_cents.cmp(&b.content_value_cents),
            Self::DeliveryCost => a.delivery_cost_cents.cmp(&b.delivery_cost_cents),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Filter, sort, and pagination state over the fetched parcels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParcelTable {
    rows: Vec<Parcel>,
    name_filter: String,
    sorting: Option<(ParcelColumn, SortDirection)>,
    page_index: usize,
}

impl ParcelTable {
    pub fn new(rows: Vec<Parcel>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Replace the data set, keeping filter and sort. The page index is
    /// clamped to the new page range.
    pub fn set_rows(&mut self, rows: Vec<Parcel>) {
        self.rows = rows;
        self.clamp_page_index();
    }

    pub fn rows(&self) -> &[Parcel] {
        &self.rows
    }

    pub fn name_filter(&self) -> &str {
        &self.name_filter
    }

    /// Update the name filter and return to the first page.
    pub fn set_name_filter(&mut self, filter: impl Into<String>) {
        self.name_filter = filter.into();
        self.page_index = 0;
    }

    pub fn sorting(&self) -> Option<(ParcelColumn, SortDirection)> {
        self.sorting
    }

    /// Current direction of `column`, if it is the sorted column.
    pub fn sort_direction(&self, column: ParcelColumn) -> Option<SortDirection> {
        self.sorting
            .and_then(|(sorted, dir)| (sorted == column).then_some(dir))
    }

    /// Cycle `column` through ascending, descending, unsorted.
    /// Selecting a different column starts it at ascending.
    pub fn toggle_sort(&mut self, column: ParcelColumn) {
        self.sorting = match self.sort_direction(column) {
            None => Some((column, SortDirection::Ascending)),
            Some(SortDirection::Ascending) => Some((column, SortDirection::Descending)),
            Some(SortDirection::Descending) => None,
        };
    }

    /// Filtered and sorted rows across all pages.
    pub fn visible_rows(&self) -> Vec<&Parcel> {
        let needle = self.name_filter.to_lowercase();
        let mut rows: Vec<&Parcel> = self
            .rows
            .iter()
            .filter(|parcel| matches_name(parcel, &needle))
            .collect();
        if let Some((column, direction)) = self.sorting {
            rows.sort_by(|a, b| {
                let ordering = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&Parcel> {
        self.visible_rows()
            .into_iter()
            .skip(self.page_index * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Number of pages for the filtered rows; zero when nothing matches.
    pub fn page_count(&self) -> usize {
        self.visible_rows().len().div_ceil(PAGE_SIZE)
    }

    /// "Page N of M" label. An empty table still reads as one page.
    pub fn page_label(&self) -> String {
        let pages = self.page_count().max(1);
        format!("Page {} of {pages}", self.page_index + 1)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.page_index += 1;
        }
    }

    pub fn last_page(&mut self) {
        self.page_index = self.page_count().saturating_sub(1);
    }

    fn clamp_page_index(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

/// Case-insensitive substring match; an empty needle matches everything.
fn matches_name(parcel: &Parcel, needle: &str) -> bool {
    needle.is_empty() || parcel.name.to_lowercase().contains(needle)
}
