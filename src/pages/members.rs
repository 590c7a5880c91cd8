//! Organization members page hosting the join-request inbox.

use leptos::prelude::*;

use crate::components::org_requests::OrgRequests;

/// Members page — pending join requests for the session's current org.
#[component]
pub fn MembersPage() -> impl IntoView {
    // The current org is session state owned by the server: resolve it,
    // then list that org's pending requests. A refetch reruns the whole
    // chain and replaces the snapshot wholesale.
    let requests = LocalResource::new(|| async {
        match crate::net::api::fetch_organizations().await {
            Some(orgs) => crate::net::api::fetch_org_requests(&orgs.current_org.id).await,
            None => Vec::new(),
        }
    });

    view! {
        <div class="members-page">
            <header class="members-page__header">
                <h1>"Members"</h1>
            </header>
            <OrgRequests requests=requests/>
        </div>
    }
}
