//! Listing-browser state: current filters, results, and fetch status.
//!
//! DESIGN
//! ======
//! Each fetch takes a [`Ticket`]; [`ListingsState::apply`] drops any result
//! whose ticket has been superseded. The grid therefore always reflects the
//! most recently *issued* filter, not whichever response arrived last.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use market::{ApiError, Category, Listing, ListingQuery};

use super::ticket::{Ticket, TicketCounter};

/// Listing grid state.
#[derive(Clone, Debug, Default)]
pub struct ListingsState {
    /// Filters of the most recently started fetch.
    pub query: ListingQuery,
    pub items: Vec<Listing>,
    pub loading: bool,
    pub error: Option<String>,
    tickets: TicketCounter,
}

impl ListingsState {
    /// Start a fetch for `query`. The returned ticket must accompany the result.
    pub fn begin_fetch(&mut self, query: ListingQuery) -> Ticket {
        self.query = query;
        self.loading = true;
        self.tickets.issue()
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// ticket is stale. A failure keeps the previous items on screen.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<Listing>, ApiError>) -> bool {
        if !self.tickets.is_latest(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Could not load listings: {}", e.user_message())),
        }
        true
    }

    /// Drop any in-flight fetch, e.g. when the page unmounts.
    pub fn abandon(&mut self) {
        self.tickets.invalidate();
        self.loading = false;
    }

    /// Category whose themed hero banner should be shown, if any.
    #[must_use]
    pub fn hero_category(&self) -> Option<Category> {
        self.query.category.category().filter(|c| c.has_hero())
    }
}
