//! Loading / success / error state shared by every network-backed screen.
//!
//! A screen owns one [`FetchMachine`]. Starting a fetch hands out a
//! [`FetchTicket`]; the result only lands if its ticket is still the latest,
//! so a slow response can never overwrite a newer one.

use std::fmt;

use tracing::{debug, warn};

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> fmt::Display for FetchState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Success(_) => write!(f, "Success"),
            Self::Error(msg) => write!(f, "Error({msg})"),
        }
    }
}

/// Identifies one started fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub enum FetchEvent<T> {
    Started,
    Finished(FetchTicket, Result<T, ApiError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Started(FetchTicket),
    Accepted,
    Stale,
}

#[derive(Debug)]
pub struct FetchMachine<T> {
    state: Option<FetchState<T>>,
    generation: u64,
}

impl<T> Default for FetchMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchMachine<T> {
    pub const fn new() -> Self {
        Self {
            state: None,
            generation: 0,
        }
    }

    /// `None` until the first fetch starts.
    pub const fn state(&self) -> Option<&FetchState<T>> {
        self.state.as_ref()
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, Some(FetchState::Loading))
    }

    pub const fn has_started(&self) -> bool {
        self.state.is_some()
    }

    pub fn apply(&mut self, event: FetchEvent<T>) -> Applied {
        match event {
            FetchEvent::Started => {
                self.generation += 1;
                self.state = Some(FetchState::Loading);
                Applied::Started(FetchTicket(self.generation))
            }
            FetchEvent::Finished(ticket, result) => {
                if ticket != FetchTicket(self.generation) || !self.is_loading() {
                    debug!(?ticket, generation = self.generation, "discarding stale result");
                    return Applied::Stale;
                }
                self.state = Some(match result {
                    Ok(value) => FetchState::Success(value),
                    Err(e) => {
                        warn!(error = %e, "fetch failed");
                        FetchState::Error(e.user_message().to_string())
                    }
                });
                Applied::Accepted
            }
        }
    }

    /// Enters `Loading` and returns the ticket the caller must finish with.
    pub fn begin(&mut self) -> FetchTicket {
        match self.apply(FetchEvent::Started) {
            Applied::Started(ticket) => ticket,
            Applied::Accepted | Applied::Stale => FetchTicket(self.generation),
        }
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> Applied {
        self.apply(FetchEvent::Finished(ticket, result))
    }

    /// Forgets the shown state; anything still in flight becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_then_loads() {
        let mut machine = FetchMachine::<u32>::new();
        assert!(machine.state().is_none());

        let ticket = machine.begin();
        assert_eq!(machine.state(), Some(&FetchState::Loading));

        assert_eq!(machine.complete(ticket, Ok(7)), Applied::Accepted);
        assert_eq!(machine.state(), Some(&FetchState::Success(7)));
    }

    #[test]
    fn errors_carry_the_user_message() {
        let mut machine = FetchMachine::<u32>::new();
        let ticket = machine.begin();
        machine.complete(ticket, Err(ApiError::Timeout));
        assert_eq!(
            machine.state(),
            Some(&FetchState::Error("Request timed out".to_string()))
        );
    }

    #[test]
    fn last_started_fetch_wins() {
        let mut machine = FetchMachine::<&str>::new();
        let first = machine.begin();
        let second = machine.begin();

        assert_eq!(machine.complete(second, Ok("new")), Applied::Accepted);
        assert_eq!(machine.complete(first, Ok("old")), Applied::Stale);
        assert_eq!(machine.state(), Some(&FetchState::Success("new")));
    }

    #[test]
    fn stale_result_does_not_end_a_newer_load() {
        let mut machine = FetchMachine::<&str>::new();
        let first = machine.begin();
        let _second = machine.begin();

        assert_eq!(machine.complete(first, Ok("old")), Applied::Stale);
        assert!(machine.is_loading());
    }

    #[test]
    fn terminal_states_ignore_duplicate_completion() {
        let mut machine = FetchMachine::<u8>::new();
        let ticket = machine.begin();
        machine.complete(ticket, Err(ApiError::InsufficientData));

        assert_eq!(machine.complete(ticket, Ok(1)), Applied::Stale);
        assert_eq!(
            machine.state(),
            Some(&FetchState::Error("Not enough data to chart".to_string()))
        );
    }

    #[test]
    fn retry_after_error_reloads() {
        let mut machine = FetchMachine::<u8>::new();
        let ticket = machine.begin();
        machine.complete(ticket, Err(ApiError::Unknown("500".into())));

        let retry = machine.begin();
        assert!(machine.is_loading());
        machine.complete(retry, Ok(3));
        assert_eq!(machine.state(), Some(&FetchState::Success(3)));
    }

    #[test]
    fn reset_orphans_in_flight_fetches() {
        let mut machine = FetchMachine::<u8>::new();
        let ticket = machine.begin();
        machine.reset();

        assert_eq!(machine.complete(ticket, Ok(1)), Applied::Stale);
        assert!(!machine.has_started());
    }
}
