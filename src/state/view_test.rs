use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn router_starts_on_login() {
    assert_eq!(ViewRouter::default().current(), View::Login);
}

// =============================================================
// User transitions
// =============================================================

#[test]
fn login_and_register_toggle() {
    let mut router = ViewRouter::default();
    assert!(router.show_register());
    assert_eq!(router.current(), View::Register);
    assert!(router.show_login());
    assert_eq!(router.current(), View::Login);
}

#[test]
fn register_link_is_ignored_outside_login() {
    let mut router = ViewRouter::default();
    router.route(true);
    assert!(!router.show_register());
    assert_eq!(router.current(), View::Dashboard);
}

#[test]
fn login_link_is_ignored_on_login() {
    let mut router = ViewRouter::default();
    assert!(!router.show_login());
    assert_eq!(router.current(), View::Login);
}

// =============================================================
// Auth routing
// =============================================================

#[test]
fn route_goes_to_dashboard_from_any_view_with_token() {
    for start in [View::Login, View::Register, View::Dashboard] {
        let mut router = ViewRouter { current: start };
        assert_eq!(router.route(true), View::Dashboard);
    }
}

#[test]
fn route_goes_to_login_from_any_view_without_token() {
    for start in [View::Login, View::Register, View::Dashboard] {
        let mut router = ViewRouter { current: start };
        assert_eq!(router.route(false), View::Login);
    }
}

#[test]
fn expire_returns_to_login() {
    let mut router = ViewRouter::default();
    router.route(true);
    assert_eq!(router.expire(), View::Login);
}
