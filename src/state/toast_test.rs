use super::*;

#[test]
fn push_appends_in_order_with_kind() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "granted".to_owned());
    state.push(ToastKind::Error, "failed".to_owned());

    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].text, "granted");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    let b = state.push(ToastKind::Success, "two".to_owned());
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_named_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    let b = state.push(ToastKind::Error, "two".to_owned());

    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "one".to_owned());
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}
