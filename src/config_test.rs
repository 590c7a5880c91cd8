use super::*;

fn ids(entries: &[NavEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.id).collect()
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn nav_ids_are_unique() {
    let mut seen = ids(DASHBOARD_NAV);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), DASHBOARD_NAV.len());
}

#[test]
fn no_constraints_keeps_everything() {
    assert_eq!(filter_nav(None, None).len(), DASHBOARD_NAV.len());
}

#[test]
fn include_keeps_only_named_ids_in_config_order() {
    let include = owned(&["settings", "dashboard"]);
    let filtered = filter_nav(Some(&include), None);
    // Config order wins over the include list's order.
    assert_eq!(ids(&filtered), ["dashboard", "settings"]);
}

#[test]
fn remove_drops_named_ids() {
    let remove = owned(&["billing"]);
    let filtered = filter_nav(None, Some(&remove));
    assert!(!ids(&filtered).contains(&"billing"));
    assert_eq!(filtered.len(), DASHBOARD_NAV.len() - 1);
}

#[test]
fn include_and_remove_compose() {
    let include = owned(&["members", "invite", "billing"]);
    let remove = owned(&["billing"]);
    let filtered = filter_nav(Some(&include), Some(&remove));
    assert_eq!(ids(&filtered), ["members", "invite"]);
}

#[test]
fn unknown_ids_are_ignored() {
    let include = owned(&["members", "nope"]);
    let remove = owned(&["also-nope"]);
    let filtered = filter_nav(Some(&include), Some(&remove));
    assert_eq!(ids(&filtered), ["members"]);
}

#[test]
fn empty_include_list_keeps_nothing() {
    let include: Vec<String> = Vec::new();
    assert!(filter_nav(Some(&include), None).is_empty());
}
