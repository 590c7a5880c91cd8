//! Sidebar navigation list, filtered from the static config.

use leptos::prelude::*;

use crate::config::filter_nav;

/// Navigation links for the current page, narrowed by optional
/// include/exclude id lists over [`crate::config::DASHBOARD_NAV`].
#[component]
pub fn SidebarNav(
    #[prop(optional_no_strip)] include_ids: Option<Vec<String>>,
    #[prop(optional_no_strip)] remove_ids: Option<Vec<String>>,
) -> impl IntoView {
    let entries = filter_nav(include_ids.as_deref(), remove_ids.as_deref());

    view! {
        <nav class="sidebar-nav">
            {entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <a class="sidebar-nav__link" href=entry.href>
                            {entry.label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
