//! Accept/decline action state for pending join requests.
//!
//! Each request is either idle or running exactly one of the two actions;
//! the states are one enum, so "accepting and declining at once" is
//! unrepresentable. The map of in-flight actions is owned by the request
//! list, not by individual rows, which keeps re-entrancy enforcement in
//! one place instead of relying on disabled buttons.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use std::collections::HashMap;

use crate::net::types::ActionError;

/// Toast text for a completed accept.
pub const ACCEPT_SUCCESS: &str = "Organization access granted";
/// Fallback toast text when an accept fails without a server message.
pub const ACCEPT_FAILURE: &str = "Organization access could not be granted";
/// Toast text for a completed decline.
pub const DECLINE_SUCCESS: &str = "Organization access declined";
/// Fallback toast text when a decline fails without a server message.
pub const DECLINE_FAILURE: &str = "Organization access could not be declined";

/// The two remote actions available on a pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Accept,
    Decline,
}

impl ActionKind {
    /// Toast text shown once the action completed and the list refreshed.
    pub fn success_text(self) -> &'static str {
        match self {
            Self::Accept => ACCEPT_SUCCESS,
            Self::Decline => DECLINE_SUCCESS,
        }
    }

    /// Fixed toast text used when the gateway failure carries no message.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Accept => ACCEPT_FAILURE,
            Self::Decline => DECLINE_FAILURE,
        }
    }

    fn active_state(self) -> RequestAction {
        match self {
            Self::Accept => RequestAction::Accepting,
            Self::Decline => RequestAction::Declining,
        }
    }
}

/// Toast text for a failed action: the server's message when present,
/// otherwise the action's fixed fallback.
pub fn failure_text(kind: ActionKind, err: &ActionError) -> String {
    err.message
        .clone()
        .unwrap_or_else(|| kind.failure_fallback().to_owned())
}

/// Action state of a single request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestAction {
    #[default]
    Idle,
    Accepting,
    Declining,
}

impl RequestAction {
    /// Whether an action is currently in flight for the request.
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

/// In-flight action states keyed by request id.
///
/// Requests without an entry are `Idle`; entries exist only while an
/// action runs, so a refresh that drops a request from the snapshot
/// leaves nothing stale behind once that action settles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestActions {
    states: HashMap<String, RequestAction>,
}

impl RequestActions {
    /// Current state of a request; unknown ids are `Idle`.
    pub fn state(&self, id: &str) -> RequestAction {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Start `kind` on request `id`.
    ///
    /// Returns `false` without changing anything when the request already
    /// has an action in flight — a re-entrant accept or decline is
    /// rejected here, whatever the buttons allowed. Callers must not
    /// proceed with the gateway call on `false`.
    pub fn try_begin(&mut self, id: &str, kind: ActionKind) -> bool {
        if self.state(id).is_busy() {
            return false;
        }
        self.states.insert(id.to_owned(), kind.active_state());
        true
    }

    /// Return request `id` to `Idle`. Runs on every completion path,
    /// success or failure; settling an unknown id is a no-op.
    pub fn settle(&mut self, id: &str) {
        self.states.remove(id);
    }
}
