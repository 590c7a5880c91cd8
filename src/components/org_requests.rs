//! Organization access request inbox with accept/decline actions.

use leptos::prelude::*;

use crate::components::toast_stack::Toasts;
use crate::net::types::OrgJoinRequest;
use crate::state::requests::{ActionKind, RequestAction, RequestActions};
use crate::util::avatar::avatar_initials;
use crate::util::transition::AwaitableTransition;

/// Inbox of pending join requests with a manual refresh control.
///
/// The list owns the per-request action states; rows read and update the
/// shared map, so one row's failure can never touch a sibling. A manual
/// refresh swaps the whole list for a skeleton; row actions refresh
/// through their own coordinators and leave the list visible.
#[component]
pub fn OrgRequests(requests: LocalResource<Vec<OrgJoinRequest>>) -> impl IntoView {
    let actions = RwSignal::new(RequestActions::default());
    let transition = AwaitableTransition::new();

    let on_refresh = {
        let requests = requests.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let requests = requests.clone();
                leptos::task::spawn_local(async move {
                    // Busy rejection only happens while the button is
                    // disabled, so there is nothing to report.
                    let _ = transition
                        .begin(move || async move {
                            requests.refetch();
                        })
                        .await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &requests;
            }
        }
    };

    view! {
        <div class="org-requests">
            <div class="org-requests__header">
                <h4 class="org-requests__title">"People asking access"</h4>
                <button
                    class="btn btn--outline org-requests__refresh"
                    title="Refresh requests"
                    disabled=move || transition.is_pending()
                    on:click=on_refresh
                >
                    "\u{27f3}"
                </button>
            </div>

            {move || {
                if transition.is_pending() {
                    return view! { <div class="org-requests__skeleton"></div> }.into_any();
                }

                let requests = requests.clone();
                view! {
                    <Suspense fallback=move || {
                        view! { <div class="org-requests__skeleton"></div> }
                    }>
                        {
                            let requests = requests.clone();
                            move || {
                                requests
                                    .get()
                                    .map(|list| {
                                        if list.is_empty() {
                                            view! {
                                                <p class="org-requests__empty">"No requests"</p>
                                            }
                                                .into_any()
                                        } else {
                                            // Gateway order is the display order.
                                            list.into_iter()
                                                .map(|request| {
                                                    let requests = requests.clone();
                                                    view! {
                                                        <RequestItem
                                                            request=request
                                                            actions=actions
                                                            requests=requests
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                                .into_any()
                                        }
                                    })
                            }
                        }
                    </Suspense>
                }
                .into_any()
            }}
        </div>
    }
}

/// One pending request row: requester identity plus decline and accept
/// controls. Each completed action refreshes the list exactly once and
/// toasts exactly once, in that order.
#[component]
fn RequestItem(
    request: OrgJoinRequest,
    actions: RwSignal<RequestActions>,
    requests: LocalResource<Vec<OrgJoinRequest>>,
) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let transition = AwaitableTransition::new();

    let id = request.id.clone();
    let state = Memo::new({
        let id = id.clone();
        move |_| actions.with(|a| a.state(&id))
    });

    let run = {
        let id = id.clone();
        move |kind: ActionKind| {
            #[cfg(feature = "hydrate")]
            {
                // The state machine owns re-entrancy: a second action on
                // a busy request is rejected here even if the rendering
                // layer let the click through.
                let began = actions
                    .try_update(|a| a.try_begin(&id, kind))
                    .unwrap_or(false);
                if !began {
                    return;
                }

                let id = id.clone();
                let requests = requests.clone();
                leptos::task::spawn_local(async move {
                    let result = match kind {
                        ActionKind::Accept => crate::net::api::accept_org_request(&id).await,
                        ActionKind::Decline => crate::net::api::decline_org_request(&id).await,
                    };

                    match result {
                        Ok(()) => {
                            let refreshed = transition
                                .begin(move || async move {
                                    requests.refetch();
                                })
                                .await;
                            // The toast waits for the transition so the
                            // list already shows the new snapshot.
                            match refreshed {
                                Ok(()) => toasts.success(kind.success_text()),
                                Err(busy) => {
                                    log::error!("request list refresh rejected: {busy:?}");
                                    toasts.error("Could not refresh the request list");
                                }
                            }
                        }
                        Err(err) => toasts.error(failure_text(kind, &err)),
                    }

                    // Guaranteed reset on every path; try_update keeps an
                    // unmounted row from panicking.
                    actions.try_update(|a| a.settle(&id));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (kind, &id, &toasts, &transition, &requests);
            }
        }
    };

    let on_decline = {
        let run = run.clone();
        move |_| run(ActionKind::Decline)
    };
    let on_accept = move |_| run(ActionKind::Accept);

    let user = request.user;
    let display_name = user.name.clone().unwrap_or_else(|| user.email.clone());
    let initials = avatar_initials(user.name.as_deref());
    let alt = display_name.clone();

    view! {
        <div class="request-item">
            <div class="request-item__who">
                <span class="avatar">
                    {match user.image {
                        Some(src) => {
                            view! { <img class="avatar__image" src=src alt=alt/> }.into_any()
                        }
                        None => view! { <span class="avatar__fallback">{initials}</span> }.into_any(),
                    }}
                </span>
                <div class="request-item__identity">
                    <p class="request-item__name">{display_name}</p>
                    <p class="request-item__email">{user.email}</p>
                </div>
            </div>

            <div class="request-item__actions">
                <button
                    class="btn btn--destructive"
                    disabled=move || state.get() == RequestAction::Declining
                    on:click=on_decline
                >
                    <Show when=move || state.get() == RequestAction::Declining>
                        <span class="spinner"></span>
                    </Show>
                    <span>"Decline"</span>
                </button>
                <button
                    class="btn btn--secondary"
                    disabled=move || state.get() == RequestAction::Accepting
                    on:click=on_accept
                >
                    <Show when=move || state.get() == RequestAction::Accepting>
                        <span class="spinner"></span>
                    </Show>
                    <span>"Accept"</span>
                </button>
            </div>
        </div>
    }
}
