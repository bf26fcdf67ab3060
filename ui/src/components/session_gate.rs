use dioxus::prelude::*;

use crate::core::session::use_session;
use crate::routes;

/// Wraps protected views. Unauthenticated visitors (or non-admins when
/// `require_admin` is set) are bounced to the login page; nothing of the
/// gated view renders in the meantime.
#[component]
pub fn SessionGate(#[props(default)] require_admin: bool, children: Element) -> Element {
    let session = use_session();
    let allowed = session().allows(require_admin);

    use_effect(move || {
        if !session().allows(require_admin) {
            eprintln!("[session] gate redirect (require_admin={require_admin})");
            routes::go_login();
        }
    });

    if !allowed {
        return rsx! {
            div { class: "session-gate__pending" }
        };
    }

    rsx! {
        {children}
    }
}
