//! Toast notification context and stack renderer.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen before it expires.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u32 = 5_000;

/// Handle for pushing toasts from anywhere in the tree.
///
/// Fire-and-forget: pushing never fails, even from a spawned task that
/// outlives the component that pushed (writes go through `try_update`).
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastState>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    /// Show a success toast.
    pub fn success(self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    /// Show a failure toast.
    pub fn error(self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(self, kind: ToastKind, text: String) {
        let id = self.0.try_update(|s| s.push(kind, text));

        // Auto-expire in the browser; dismissal by click still works.
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = id {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                    self.dismiss(&id);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn dismiss(self, id: &str) {
        self.0.try_update(|s| s.dismiss(id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active toasts; clicking a toast dismisses it.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .0
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast--success",
                            ToastKind::Error => "toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div
                                class=format!("toast {kind_class}")
                                on:click=move |_| toasts.dismiss(&id)
                            >
                                <span class="toast__text">{toast.text}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
