use super::*;

// =============================================================
// RequestAction
// =============================================================

#[test]
fn request_action_default_is_idle() {
    assert_eq!(RequestAction::default(), RequestAction::Idle);
}

#[test]
fn only_active_states_are_busy() {
    assert!(!RequestAction::Idle.is_busy());
    assert!(RequestAction::Accepting.is_busy());
    assert!(RequestAction::Declining.is_busy());
}

// =============================================================
// RequestActions state machine
// =============================================================

#[test]
fn unknown_request_is_idle() {
    let actions = RequestActions::default();
    assert_eq!(actions.state("r1"), RequestAction::Idle);
}

#[test]
fn begin_accept_marks_request_accepting() {
    let mut actions = RequestActions::default();
    assert!(actions.try_begin("r1", ActionKind::Accept));
    assert_eq!(actions.state("r1"), RequestAction::Accepting);
}

#[test]
fn begin_decline_marks_request_declining() {
    let mut actions = RequestActions::default();
    assert!(actions.try_begin("r1", ActionKind::Decline));
    assert_eq!(actions.state("r1"), RequestAction::Declining);
}

#[test]
fn decline_while_accepting_is_rejected() {
    let mut actions = RequestActions::default();
    assert!(actions.try_begin("r1", ActionKind::Accept));

    // Mutual exclusion: the accepting state must survive the attempt.
    assert!(!actions.try_begin("r1", ActionKind::Decline));
    assert_eq!(actions.state("r1"), RequestAction::Accepting);
}

#[test]
fn reentrant_accept_is_rejected() {
    let mut actions = RequestActions::default();
    assert!(actions.try_begin("r1", ActionKind::Accept));
    assert!(!actions.try_begin("r1", ActionKind::Accept));
}

#[test]
fn settle_returns_request_to_idle_and_allows_next_action() {
    let mut actions = RequestActions::default();
    assert!(actions.try_begin("r1", ActionKind::Accept));

    actions.settle("r1");
    assert_eq!(actions.state("r1"), RequestAction::Idle);
    assert!(actions.try_begin("r1", ActionKind::Decline));
}

#[test]
fn settle_unknown_request_is_noop() {
    let mut actions = RequestActions::default();
    actions.settle("r404");
    assert_eq!(actions, RequestActions::default());
}

#[test]
fn actions_on_different_requests_are_independent() {
    let mut actions = RequestActions::default();
    assert!(actions.try_begin("r1", ActionKind::Accept));
    assert!(actions.try_begin("r2", ActionKind::Decline));

    actions.settle("r1");
    assert_eq!(actions.state("r1"), RequestAction::Idle);
    assert_eq!(actions.state("r2"), RequestAction::Declining);
}

// =============================================================
// Failure texts
// =============================================================

#[test]
fn failure_text_uses_server_message_verbatim() {
    let err = ActionError {
        message: Some("Request expired".to_owned()),
    };
    assert_eq!(failure_text(ActionKind::Decline, &err), "Request expired");
}

#[test]
fn failure_text_falls_back_per_action_kind() {
    let err = ActionError::default();
    assert_eq!(
        failure_text(ActionKind::Accept, &err),
        "Organization access could not be granted"
    );
    assert_eq!(
        failure_text(ActionKind::Decline, &err),
        "Organization access could not be declined"
    );
}

#[test]
fn success_texts_are_per_action_kind() {
    assert_eq!(
        ActionKind::Accept.success_text(),
        "Organization access granted"
    );
    assert_eq!(
        ActionKind::Decline.success_text(),
        "Organization access declined"
    );
}

// =============================================================
// ActionError wire shape
// =============================================================

#[test]
fn action_error_deserializes_with_message() {
    let err: ActionError = serde_json::from_str(r#"{"message":"Request expired"}"#).unwrap();
    assert_eq!(err.message.as_deref(), Some("Request expired"));
}

#[test]
fn action_error_deserializes_without_message() {
    let err: ActionError = serde_json::from_str("{}").unwrap();
    assert_eq!(err.message, None);
}
