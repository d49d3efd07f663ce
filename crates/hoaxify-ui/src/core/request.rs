//! Request lifecycle tracking for route-driven fetches.
//!
//! # Design
//! - Model status as a sum type so data and error can never coexist.
//! - Order outcomes by issuance: every `begin` bumps a sequence number and a
//!   result is applied only when its ticket carries the latest sequence.
//! - Keep this module DOM-free; the Yew hook in `app::hooks` drives it.

use crate::core::http::ApiError;

/// Lifecycle of one asynchronous operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestStatus<T> {
    /// Nothing issued yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request resolved with data.
    Success(T),
    /// The latest request failed with a displayable message.
    Fail(String),
}

impl<T> Default for RequestStatus<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestStatus<T> {
    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Payload of a successful request.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Message of a failed request.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Fail(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Handle identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
}

impl RequestTicket {
    /// Sequence number captured when the request was issued.
    #[must_use]
    pub const fn seq(self) -> u64 {
        self.seq
    }
}

/// What happened to a resolved request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The result became the visible status.
    Applied,
    /// A newer request was issued meanwhile; the result was dropped.
    Superseded,
}

/// Tracks the visible status plus the sequence of the newest issued request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTracker<T> {
    status: RequestStatus<T>,
    latest: u64,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            latest: 0,
        }
    }
}

impl<T> RequestTracker<T> {
    /// Current visible status.
    #[must_use]
    pub const fn status(&self) -> &RequestStatus<T> {
        &self.status
    }

    /// Issue a new request: status becomes loading and earlier tickets go stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest = self.latest.wrapping_add(1);
        self.status = RequestStatus::Loading;
        RequestTicket { seq: self.latest }
    }

    /// Whether `ticket` still belongs to the newest issued request.
    #[must_use]
    pub const fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Apply a finished request when it is still current.
    ///
    /// Failures surface the server-supplied message when there is one and fall
    /// back to `generic_error` otherwise.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<T, ApiError>,
        generic_error: &str,
    ) -> ResolveOutcome {
        if !self.is_current(ticket) {
            return ResolveOutcome::Superseded;
        }
        self.status = match result {
            Ok(data) => RequestStatus::Success(data),
            Err(err) => RequestStatus::Fail(
                err.server_message()
                    .map_or_else(|| generic_error.to_string(), ToString::to_string),
            ),
        };
        ResolveOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC: &str = "Unexpected error occurred, please try again";

    #[test]
    fn begin_moves_to_loading_and_clears_previous_data() {
        let mut tracker = RequestTracker::<String>::default();
        assert_eq!(tracker.status(), &RequestStatus::Idle);

        let first = tracker.begin();
        assert!(tracker.status().is_loading());
        tracker.resolve(first, Ok("done".to_string()), GENERIC);
        assert_eq!(tracker.status().data().map(String::as_str), Some("done"));

        tracker.begin();
        assert!(tracker.status().is_loading());
        assert!(tracker.status().data().is_none());
        assert!(tracker.status().error().is_none());
    }

    #[test]
    fn slow_earlier_response_is_discarded() {
        let mut tracker = RequestTracker::<&str>::default();
        let token_123 = tracker.begin();
        let token_456 = tracker.begin();

        assert_eq!(
            tracker.resolve(token_456, Ok("456 activated"), GENERIC),
            ResolveOutcome::Applied
        );
        assert_eq!(
            tracker.resolve(token_123, Ok("123 activated"), GENERIC),
            ResolveOutcome::Superseded
        );
        assert_eq!(tracker.status(), &RequestStatus::Success("456 activated"));
    }

    #[test]
    fn early_resolution_of_stale_request_keeps_loading() {
        let mut tracker = RequestTracker::<u32>::default();
        let stale = tracker.begin();
        let fresh = tracker.begin();

        assert_eq!(
            tracker.resolve(stale, Err(ApiError::Network("down".into())), GENERIC),
            ResolveOutcome::Superseded
        );
        assert!(tracker.status().is_loading());

        tracker.resolve(fresh, Ok(7), GENERIC);
        assert_eq!(tracker.status(), &RequestStatus::Success(7));
    }

    #[test]
    fn only_latest_of_many_is_reflected() {
        let mut tracker = RequestTracker::<usize>::default();
        let tickets: Vec<_> = (0..5).map(|_| tracker.begin()).collect();
        for (idx, ticket) in tickets.iter().enumerate().rev() {
            tracker.resolve(*ticket, Ok(idx), GENERIC);
        }
        assert_eq!(tracker.status(), &RequestStatus::Success(4));
    }

    #[test]
    fn failure_prefers_server_message() {
        let mut tracker = RequestTracker::<()>::default();
        let ticket = tracker.begin();
        tracker.resolve(
            ticket,
            Err(ApiError::Status {
                status: 400,
                message: Some("Activation failure".to_string()),
            }),
            GENERIC,
        );
        assert_eq!(tracker.status().error(), Some("Activation failure"));
    }

    #[test]
    fn failure_without_message_uses_generic_text() {
        let mut tracker = RequestTracker::<()>::default();
        let ticket = tracker.begin();
        tracker.resolve(ticket, Err(ApiError::Network("offline".into())), GENERIC);
        assert_eq!(tracker.status(), &RequestStatus::Fail(GENERIC.to_string()));
    }

    #[test]
    fn tickets_are_monotonic() {
        let mut tracker = RequestTracker::<()>::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(second.seq() > first.seq());
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
