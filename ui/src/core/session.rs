//! Session state. Presence of a stored token gates protected views and
//! toggles the header actions; nothing client-side validates the token.

use dioxus::prelude::*;

use super::storage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub admin: bool,
}

impl Session {
    /// Snapshot of whatever persistent storage currently holds.
    pub fn load() -> Self {
        Self {
            token: storage::get(storage::TOKEN_KEY),
            admin: storage::get(storage::ADMIN_KEY).is_some(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Gate predicate for protected views: a token is always required, the
    /// admin flag only when the view demands it.
    pub fn allows(&self, require_admin: bool) -> bool {
        self.is_authenticated() && (!require_admin || self.admin)
    }

    pub fn login(&mut self, token: &str) {
        storage::set(storage::TOKEN_KEY, token);
        self.token = Some(token.to_string());
    }

    pub fn mark_admin(&mut self) {
        storage::set(storage::ADMIN_KEY, "done");
        self.admin = true;
    }

    pub fn logout(&mut self) {
        storage::remove(storage::TOKEN_KEY);
        storage::remove(storage::ADMIN_KEY);
        storage::remove(storage::CREDITS_KEY);
        *self = Session::default();
    }
}

/// Provide `Signal<Session>` to the component tree at the composition root.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::load);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

pub fn use_session() -> Signal<Session> {
    if let Some(sig) = try_use_context::<Signal<Session>>() {
        return sig;
    }

    // Fallback for mis-ordered providers so views never panic in production.
    eprintln!("[session] missing SessionProvider context, using detached session");
    use_signal(Session::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    // One combined test: storage is process-global on native, so interleaved
    // parallel tests over the same keys would race each other.
    #[test]
    fn login_logout_lifecycle() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        session.login("tok-abc");
        assert!(session.is_authenticated());
        assert_eq!(storage::get(storage::TOKEN_KEY).as_deref(), Some("tok-abc"));

        session.mark_admin();
        assert!(session.admin);

        let reloaded = Session::load();
        assert_eq!(reloaded.token.as_deref(), Some("tok-abc"));
        assert!(reloaded.admin);

        session.logout();
        assert_eq!(session, Session::default());
        assert_eq!(storage::get(storage::TOKEN_KEY), None);
        assert_eq!(storage::get(storage::ADMIN_KEY), None);
    }

    // Constructed directly so this test never touches process-global storage.
    #[test]
    fn admin_shortcut_session_clears_the_admin_gate() {
        let shortcut = Session {
            token: Some("local-admin".to_string()),
            admin: true,
        };
        assert!(shortcut.allows(true));
        assert!(shortcut.allows(false));

        let regular = Session {
            token: Some("tok-abc".to_string()),
            admin: false,
        };
        assert!(regular.allows(false));
        assert!(!regular.allows(true));

        // A bare admin flag without a token opens nothing.
        let flag_only = Session {
            token: None,
            admin: true,
        };
        assert!(!flag_only.allows(true));
        assert!(!Session::default().allows(false));
    }
}
