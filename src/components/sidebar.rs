//! Application sidebar composing navigation, the user identity control,
//! and the organization switcher.

use leptos::prelude::*;

use crate::components::org_switcher::OrgSwitcher;
use crate::components::sidebar_nav::SidebarNav;
use crate::components::user_dropdown::UserDropdown;
use crate::state::orgs::org_groups;

/// Sidebar with independently-loading regions.
///
/// The current user and the org set are separate resources, each under
/// its own `Suspense`, so a slow org fetch never blocks the identity
/// control. When `show_org_switcher` is off the org resource is never
/// created at all, not merely hidden.
#[component]
pub fn Sidebar(
    #[prop(optional)] nav_include_ids: Option<Vec<String>>,
    #[prop(optional)] nav_remove_ids: Option<Vec<String>>,
    #[prop(default = true)] show_org_switcher: bool,
) -> impl IntoView {
    let user = LocalResource::new(|| crate::net::api::fetch_current_user());

    let orgs = show_org_switcher.then(|| LocalResource::new(|| crate::net::api::fetch_organizations()));

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">
                <a class="sidebar__logo-link" href="/">
                    "Dashboard"
                </a>
            </div>

            <div class="sidebar__section">
                <Suspense fallback=move || loading_button()>
                    {
                        let user = user.clone();
                        move || user.get().map(|user| view! { <UserDropdown user=user/> })
                    }
                </Suspense>
            </div>

            {orgs.map(|orgs| {
                view! {
                    <div class="sidebar__section">
                        <Suspense fallback=move || loading_button()>
                            {
                                let user = user.clone();
                                move || {
                                    let current_user = user.get().flatten();
                                    orgs.get().flatten().map(|payload| {
                                        let groups = org_groups(
                                            payload.user_orgs,
                                            current_user.as_ref().map(|u| u.id.as_str()),
                                        );
                                        view! {
                                            <OrgSwitcher
                                                groups=groups
                                                current_org=payload.current_org
                                            />
                                        }
                                    })
                                }
                            }
                        </Suspense>
                    </div>
                }
            })}

            <div class="sidebar__scroll">
                <SidebarNav include_ids=nav_include_ids remove_ids=nav_remove_ids/>
            </div>
        </aside>
    }
}

/// Button-shaped placeholder shown while a sidebar region loads.
fn loading_button() -> impl IntoView {
    view! {
        <button class="btn btn--outline sidebar__loading" disabled=true>
            <span class="spinner"></span>
        </button>
    }
}
