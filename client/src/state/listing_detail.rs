//! Listing detail page state.

#[cfg(test)]
#[path = "listing_detail_test.rs"]
mod listing_detail_test;

use market::{ApiError, Listing};

use super::ticket::{Ticket, TicketCounter};

/// What the detail page currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailView {
    #[default]
    Loading,
    Loaded(Listing),
    /// Missing listing or any failed fetch; rendered as a full-page message.
    NotFound,
}

#[derive(Clone, Debug, Default)]
pub struct ListingDetailState {
    pub view: DetailView,
    tickets: TicketCounter,
}

impl ListingDetailState {
    /// Start loading a listing (route param changed or first mount).
    pub fn begin_fetch(&mut self) -> Ticket {
        self.view = DetailView::Loading;
        self.tickets.issue()
    }

    /// Apply a fetch result; stale tickets are ignored.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Listing, ApiError>) -> bool {
        if !self.tickets.is_latest(ticket) {
            return false;
        }
        self.view = match result {
            Ok(listing) => DetailView::Loaded(listing),
            Err(_) => DetailView::NotFound,
        };
        true
    }

    pub fn abandon(&mut self) {
        self.tickets.invalidate();
    }

    #[must_use]
    pub fn listing(&self) -> Option<&Listing> {
        match &self.view {
            DetailView::Loaded(listing) => Some(listing),
            _ => None,
        }
    }
}
