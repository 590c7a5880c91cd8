//! Current-user identity control with a sign-out menu.

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::avatar::avatar_initials;

/// Trigger button showing the user's avatar and name, opening a small
/// menu with the email and a sign-out action.
///
/// A missing user renders as a guest; missing name or image resolve
/// through the avatar fallbacks instead of faulting.
#[component]
pub fn UserDropdown(user: Option<User>) -> impl IntoView {
    let open = RwSignal::new(false);

    let display_name = user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "Guest".to_owned());
    let initials = avatar_initials(user.as_ref().and_then(|u| u.name.as_deref()));
    let image = user.as_ref().and_then(|u| u.image.clone());
    let email = user.as_ref().map(|u| u.email.clone());
    let alt = display_name.clone();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
        }
    };

    view! {
        <div class="user-dropdown">
            <button
                class="btn btn--outline user-dropdown__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="avatar">
                    {match image {
                        Some(src) => {
                            view! { <img class="avatar__image" src=src alt=alt/> }.into_any()
                        }
                        None => view! { <span class="avatar__fallback">{initials}</span> }.into_any(),
                    }}
                </span>
                <span class="user-dropdown__name">{display_name}</span>
            </button>

            <Show when=move || open.get()>
                <div class="user-dropdown__menu">
                    {email
                        .clone()
                        .map(|email| view! { <p class="user-dropdown__email">{email}</p> })}
                    <button class="user-dropdown__item" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
