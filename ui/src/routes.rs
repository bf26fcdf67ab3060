//! Platform-registered navigation actions.
//!
//! `ui` never sees the platform's `Route` enum (same contract as the header's
//! `NavBuilder`): the platform crate registers plain functions that push the
//! right routes, and views call the `go_*` helpers. Unregistered actions log
//! and do nothing, which keeps headless tests harmless.

use once_cell::sync::OnceCell;

pub struct RouteActions {
    pub home: fn(),
    pub login: fn(),
    pub dashboard: fn(),
}

static ROUTE_ACTIONS: OnceCell<RouteActions> = OnceCell::new();

pub fn register_routes(actions: RouteActions) {
    let _ = ROUTE_ACTIONS.set(actions);
}

pub fn go_home() {
    match ROUTE_ACTIONS.get() {
        Some(actions) => (actions.home)(),
        None => eprintln!("[routes] go_home with no RouteActions registered"),
    }
}

pub fn go_login() {
    match ROUTE_ACTIONS.get() {
        Some(actions) => (actions.login)(),
        None => eprintln!("[routes] go_login with no RouteActions registered"),
    }
}

pub fn go_dashboard() {
    match ROUTE_ACTIONS.get() {
        Some(actions) => (actions.dashboard)(),
        None => eprintln!("[routes] go_dashboard with no RouteActions registered"),
    }
}
