//! UI components for the dashboard shell and the request inbox.

pub mod org_requests;
pub mod org_switcher;
pub mod sidebar;
pub mod sidebar_nav;
pub mod toast_stack;
pub mod user_dropdown;
