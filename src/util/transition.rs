//! Awaitable UI transition primitive.

use std::future::Future;

use leptos::prelude::*;

/// Returned by [`AwaitableTransition::begin`] when a transition is
/// already in flight on this coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionBusy;

/// Wraps a state-refresh operation in an awaitable unit of work.
///
/// While the work runs — plus one timer tick so the reactive graph
/// flushes the updates it queued — `is_pending` reports `true`. The
/// future returned by `begin` resolves only after the pending flag has
/// cleared, so callers can sequence a follow-up (a toast, say) strictly
/// after the UI has re-rendered with fresh data.
///
/// Only one transition may be in flight per coordinator; a second
/// `begin` while pending is rejected with [`TransitionBusy`] rather
/// than queued, so a refresh is never silently dropped.
#[derive(Clone, Copy)]
pub struct AwaitableTransition {
    pending: RwSignal<bool>,
}

impl AwaitableTransition {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
        }
    }

    /// Reactive read of the pending flag.
    pub fn is_pending(self) -> bool {
        self.pending.get()
    }

    /// Run `work` as a transition.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionBusy`] without running `work` when a
    /// transition is already pending on this coordinator.
    pub async fn begin<F, Fut>(self, work: F) -> Result<(), TransitionBusy>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.pending.get_untracked() {
            return Err(TransitionBusy);
        }

        // try_set: the owning view may have been torn down while the
        // caller's future was suspended.
        let _ = self.pending.try_set(true);
        work().await;
        next_tick().await;
        let _ = self.pending.try_set(false);
        Ok(())
    }
}

impl Default for AwaitableTransition {
    fn default() -> Self {
        Self::new()
    }
}

/// Yield to the event loop once so queued reactive updates are applied
/// before the caller resumes.
async fn next_tick() {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(0).await;
    }
}
