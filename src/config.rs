//! Static dashboard navigation configuration.
//!
//! To add a navigation item, extend [`DASHBOARD_NAV`]; hosts narrow the
//! set per page with [`filter_nav`] rather than editing it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// One entry in the sidebar navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// Ordered navigation set for the app sidebar.
pub const DASHBOARD_NAV: &[NavEntry] = &[
    NavEntry {
        id: "dashboard",
        label: "Dashboard",
        href: "/",
    },
    NavEntry {
        id: "members",
        label: "Members",
        href: "/org/members",
    },
    NavEntry {
        id: "invite",
        label: "Invite",
        href: "/org/members/invite",
    },
    NavEntry {
        id: "settings",
        label: "Settings",
        href: "/settings",
    },
    NavEntry {
        id: "billing",
        label: "Billing",
        href: "/billing",
    },
];

/// Filter the static nav set for one host page.
///
/// An include list keeps only the named ids, a remove list then drops
/// ids; `None` means "no constraint". Output order always follows
/// [`DASHBOARD_NAV`], never the id lists. Unknown ids are ignored.
pub fn filter_nav(include_ids: Option<&[String]>, remove_ids: Option<&[String]>) -> Vec<NavEntry> {
    DASHBOARD_NAV
        .iter()
        .copied()
        .filter(|entry| include_ids.is_none_or(|ids| ids.iter().any(|id| id == entry.id)))
        .filter(|entry| !remove_ids.is_some_and(|ids| ids.iter().any(|id| id == entry.id)))
        .collect()
}
