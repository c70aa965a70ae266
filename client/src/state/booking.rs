//! Booking dialog state machine.
//!
//! ```text
//! Closed --open--> Editing --begin_submit--> Submitting
//!   ^                 ^  |                      |
//!   |                 |  +--cancel--> Closed    |
//!   |                 +------ failure ----------+
//!   +------------------------ success ----------+
//! ```
//!
//! INVARIANTS
//! ==========
//! - At most one submission is in flight; `begin_submit` refuses a second.
//! - Drafts are validated before a request exists; invalid drafts never reach
//!   the network.
//! - A failed submission keeps the draft so the user can retry.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use market::{BookingDraft, BookingRequest, DraftError, LocalOffset};

use super::ticket::{Ticket, TicketCounter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Closed,
    Editing,
    Submitting,
}

/// Why `begin_submit` did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingBlocked {
    /// The dialog is not open.
    Closed,
    /// A submission is already in flight.
    InFlight,
    /// The draft failed validation; the message is shown in the dialog.
    Invalid(DraftError),
}

/// How a finished submission was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The booking was accepted; the dialog closed.
    Booked,
    /// The booking failed; the dialog is back in `Editing` with an error.
    Failed,
    /// The result belonged to a cancelled or superseded submission.
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct BookingState {
    pub phase: BookingPhase,
    pub draft: BookingDraft,
    pub error: Option<String>,
    tickets: TicketCounter,
    in_flight: Option<Ticket>,
}

impl BookingState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != BookingPhase::Closed
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == BookingPhase::Submitting
    }

    /// Show the dialog with a fresh draft.
    pub fn open(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.phase = BookingPhase::Editing;
        self.draft = BookingDraft::default();
        self.error = None;
    }

    /// Close the dialog and discard the draft. An in-flight result arriving
    /// later is reported as [`SubmitOutcome::Stale`].
    pub fn cancel(&mut self) {
        self.phase = BookingPhase::Closed;
        self.draft = BookingDraft::default();
        self.error = None;
        self.in_flight = None;
        self.tickets.invalidate();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.set_date(date);
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.draft.set_time(time);
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.draft.set_duration(duration);
    }

    /// Validate the draft and, if it passes, enter `Submitting` and return
    /// the request to send. `zone` supplies the offset for the booked date.
    ///
    /// # Errors
    ///
    /// Returns [`BookingBlocked`] when the dialog is closed, a submission is
    /// already running, or the draft is invalid (the error is also recorded
    /// for display).
    pub fn begin_submit(
        &mut self,
        listing_id: &str,
        zone: &impl LocalOffset,
    ) -> Result<(Ticket, BookingRequest), BookingBlocked> {
        match self.phase {
            BookingPhase::Closed => return Err(BookingBlocked::Closed),
            BookingPhase::Submitting => return Err(BookingBlocked::InFlight),
            BookingPhase::Editing => {}
        }
        let request = match BookingRequest::prepare(listing_id, &self.draft, zone) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(BookingBlocked::Invalid(e));
            }
        };
        let ticket = self.tickets.issue();
        self.phase = BookingPhase::Submitting;
        self.in_flight = Some(ticket);
        self.error = None;
        Ok((ticket, request))
    }

    /// Apply the outcome of the submission identified by `ticket`.
    pub fn finish_submit(&mut self, ticket: Ticket, result: Result<(), String>) -> SubmitOutcome {
        if self.in_flight != Some(ticket) || !self.tickets.is_latest(ticket) {
            return SubmitOutcome::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(()) => {
                self.phase = BookingPhase::Closed;
                self.draft = BookingDraft::default();
                self.error = None;
                SubmitOutcome::Booked
            }
            Err(message) => {
                self.phase = BookingPhase::Editing;
                self.error = Some(message);
                SubmitOutcome::Failed
            }
        }
    }
}
