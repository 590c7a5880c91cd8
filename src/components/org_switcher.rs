//! Organization switcher grouped by ownership.

use leptos::prelude::*;

use crate::net::types::Organization;
use crate::state::orgs::OrgGroup;

/// Dropdown listing the user's organizations under "My Orgs" and
/// "Shared Orgs" headings.
///
/// The current org is server session state; this control only displays
/// it and reports a pick through `on_select` for the host to act on.
#[component]
pub fn OrgSwitcher(
    groups: Vec<OrgGroup>,
    current_org: Organization,
    #[prop(optional)] on_select: Option<Callback<Organization>>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let current_id = current_org.id.clone();

    view! {
        <div class="org-switcher">
            <button
                class="btn btn--outline org-switcher__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="org-switcher__current">{current_org.name}</span>
                <span class="org-switcher__caret">"\u{25be}"</span>
            </button>

            <Show when=move || open.get()>
                <div class="org-switcher__menu">
                    {
                        let current_id = current_id.clone();
                        groups
                            .clone()
                            .into_iter()
                            .map(|group| {
                                let current_id = current_id.clone();
                                view! {
                                    <div class="org-switcher__group">
                                        <p class="org-switcher__heading">{group.heading}</p>
                                        {group
                                            .items
                                            .into_iter()
                                            .map(|org| {
                                                let is_current = org.id == current_id;
                                                let label = org.name.clone();
                                                let on_click = move |_| {
                                                    open.set(false);
                                                    if let Some(cb) = on_select {
                                                        cb.run(org.clone());
                                                    }
                                                };
                                                view! {
                                                    <button
                                                        class="org-switcher__item"
                                                        class:org-switcher__item--current=is_current
                                                        on:click=on_click
                                                    >
                                                        {label}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }
                </div>
            </Show>
        </div>
    }
}
