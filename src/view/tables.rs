//! Row projections for the location table and the activity lists.
//!
//! Rows come out in input order. No list is ever sorted or filtered here.

use crate::format::format_date;
use crate::model::{ActionItem, Location, Rfi, Submittal};
use crate::status::{completion_tone, days_open_tone, status_tone, StatusTone};

pub const NO_RFIS: &str = "No open RFIs";
pub const NO_SUBMITTALS: &str = "No submittals";
pub const NO_ACTION_ITEMS: &str = "No action items";
pub const NO_LOCATIONS: &str = "No locations";

/// A list view: either rows to draw or the placeholder for an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<R> {
    Empty { placeholder: &'static str },
    Rows(Vec<R>),
}

impl<R> TableView<R> {
    fn project<T>(items: &[T], placeholder: &'static str, row: impl Fn(&T) -> R) -> Self {
        if items.is_empty() {
            TableView::Empty { placeholder }
        } else {
            TableView::Rows(items.iter().map(row).collect())
        }
    }

    pub fn rows(&self) -> &[R] {
        match self {
            TableView::Empty { .. } => &[],
            TableView::Rows(rows) => rows,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::Empty { .. })
    }
}

/// Status text together with its badge tone.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: String,
    pub tone: StatusTone,
}

impl Badge {
    pub fn for_status(status: &str) -> Self {
        Self {
            text: status.to_string(),
            tone: status_tone(status),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RfiRow {
    pub number: String,
    pub subject: String,
    pub category: String,
    /// `"{n} days"` chip, toned by age.
    pub days_open: Badge,
    pub assigned_to: String,
    pub status: Badge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmittalRow {
    pub item: String,
    pub description: String,
    pub category: String,
    pub due_date: String,
    pub status: Badge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionItemRow {
    pub description: String,
    pub category: String,
    pub owner: String,
    pub due_date: String,
    pub status: Badge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub name: String,
    pub address: String,
    pub status: Badge,
    /// Completion as a 0..=1 fraction for the progress bar.
    pub completion_fraction: f32,
    pub completion_label: String,
    pub completion_tone: StatusTone,
    pub last_updated: String,
}

pub fn rfi_table(rfis: &[Rfi]) -> TableView<RfiRow> {
    TableView::project(rfis, NO_RFIS, |rfi| RfiRow {
        number: rfi.number.clone(),
        subject: rfi.subject.clone(),
        category: rfi.category.clone(),
        days_open: Badge {
            text: format!("{} days", rfi.days_open),
            tone: days_open_tone(rfi.days_open),
        },
        assigned_to: rfi.assigned_to.clone(),
        status: Badge::for_status(&rfi.status),
    })
}

pub fn submittal_table(submittals: &[Submittal]) -> TableView<SubmittalRow> {
    TableView::project(submittals, NO_SUBMITTALS, |s| SubmittalRow {
        item: s.item.clone(),
        description: s.description.clone(),
        category: s.category.clone(),
        due_date: format_date(&s.due_date),
        status: Badge::for_status(&s.status),
    })
}

pub fn action_item_table(items: &[ActionItem]) -> TableView<ActionItemRow> {
    TableView::project(items, NO_ACTION_ITEMS, |item| ActionItemRow {
        description: item.description.clone(),
        category: item.category.clone(),
        owner: item.owner.clone(),
        due_date: format_date(&item.due_date),
        status: Badge::for_status(&item.status),
    })
}

pub fn location_table(locations: &[Location]) -> TableView<LocationRow> {
    TableView::project(locations, NO_LOCATIONS, |loc| LocationRow {
        name: loc.name.clone(),
        address: loc.address.clone(),
        status: Badge::for_status(loc.status.label()),
        completion_fraction: (loc.completion / 100.0).clamp(0.0, 1.0) as f32,
        completion_label: format!("{}%", loc.completion),
        completion_tone: completion_tone(loc.completion),
        last_updated: format_date(&loc.last_updated),
    })
}

/// Caption under the location table heading.
pub fn location_count_caption(locations: &[Location]) -> String {
    format!("{} total locations", locations.len())
}
