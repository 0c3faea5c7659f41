use super::*;

fn tokens() -> TokenPair {
    TokenPair { access: "acc".to_owned(), refresh: "ref".to_owned() }
}

fn signed_in(staff: bool) -> SessionState {
    let mut state = SessionState::default();
    state.sign_in(tokens(), "shopper@example.com".to_owned());
    state.set_profile(UserInfo { email: "shopper@example.com".to_owned(), staff });
    state
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_is_loading_and_anonymous() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn restore_without_tokens_finishes_loading() {
    let mut state = SessionState::default();
    state.restore(None);
    assert!(!state.loading);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn restore_with_tokens_waits_for_profile() {
    let mut state = SessionState::default();
    state.restore(Some((tokens(), Some("a@b.c".to_owned()))));
    assert!(state.is_authenticated());
    assert!(state.loading);
    assert_eq!(state.display_email(), "a@b.c");
}

#[test]
fn set_profile_updates_email_and_staff() {
    let state = signed_in(true);
    assert!(!state.loading);
    assert!(state.is_staff());
    assert_eq!(state.display_email(), "shopper@example.com");
}

#[test]
fn expire_clears_everything() {
    let mut state = signed_in(true);
    state.expire();
    assert_eq!(state.tokens, None);
    assert_eq!(state.email, None);
    assert_eq!(state.profile, None);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn profile_unavailable_keeps_tokens() {
    let mut state = SessionState::default();
    state.sign_in(tokens(), "a@b.c".to_owned());
    state.profile_unavailable();
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert!(!state.is_staff());
}

#[test]
fn session_lost_only_after_being_signed_in() {
    assert!(session_lost(Some(true), false));
    assert!(!session_lost(None, false));
    assert!(!session_lost(Some(false), false));
    assert!(!session_lost(Some(false), true));
    assert!(!session_lost(Some(true), true));
}

#[test]
fn expiry_after_sign_in_counts_as_lost() {
    let mut state = signed_in(false);
    let before = state.is_authenticated();
    state.expire();
    assert!(session_lost(Some(before), state.is_authenticated()));
}

// =============================================================
// Email helpers
// =============================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Shopper@Example.COM "), "shopper@example.com");
}

#[test]
fn looks_like_email_requires_domain_dot() {
    assert!(looks_like_email("a@b.ru"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.ru"));
    assert!(!looks_like_email("plain"));
    assert!(!looks_like_email("a@b."));
}

// =============================================================
// Admin gate
// =============================================================

#[test]
fn admin_gate_states() {
    assert_eq!(admin_access(&SessionState::default()), AdminAccess::Pending);

    let mut anonymous = SessionState::default();
    anonymous.expire();
    assert_eq!(admin_access(&anonymous), AdminAccess::Anonymous);

    assert_eq!(admin_access(&signed_in(false)), AdminAccess::Denied);
    assert_eq!(admin_access(&signed_in(true)), AdminAccess::Granted);
}
