//! Generation tickets for async requests.
//!
//! Every fetch or submit takes a ticket before it starts and presents it when
//! its response arrives. Only the most recently issued ticket is accepted, so
//! a slow stale response can never overwrite the result of a newer request.

#[cfg(test)]
#[path = "ticket_test.rs"]
mod ticket_test;

/// Opaque tag identifying one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Issues monotonically increasing tickets and remembers the latest.
#[derive(Clone, Debug, Default)]
pub struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Supersede all outstanding tickets without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
