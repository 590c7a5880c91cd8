//! Organization grouping for the sidebar switcher.

#[cfg(test)]
#[path = "orgs_test.rs"]
mod orgs_test;

use crate::net::types::Organization;

/// A labelled bucket of organizations in the switcher menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrgGroup {
    pub heading: &'static str,
    pub items: Vec<Organization>,
}

/// Split `user_orgs` into owned and shared buckets, preserving input
/// order within each bucket.
///
/// Every org lands in exactly one bucket, split solely by ownership;
/// with no signed-in user nothing is owned, so everything is shared.
pub fn partition_orgs(
    user_orgs: Vec<Organization>,
    current_user_id: Option<&str>,
) -> (Vec<Organization>, Vec<Organization>) {
    user_orgs
        .into_iter()
        .partition(|org| Some(org.owner_id.as_str()) == current_user_id)
}

/// The switcher's two fixed groups, "My Orgs" then "Shared Orgs".
pub fn org_groups(user_orgs: Vec<Organization>, current_user_id: Option<&str>) -> Vec<OrgGroup> {
    let (mine, shared) = partition_orgs(user_orgs, current_user_id);
    vec![
        OrgGroup {
            heading: "My Orgs",
            items: mine,
        },
        OrgGroup {
            heading: "Shared Orgs",
            items: shared,
        },
    ]
}
