//! Fixed-key persistent storage for the session token, admin flag and
//! language choice.
//!
//! On wasm this is browser `localStorage`; elsewhere a process-local map so
//! native builds and tests behave the same without touching the disk.

/// Opaque credential token. Presence alone means "authenticated".
pub const TOKEN_KEY: &str = "trove.token";

/// Marker distinguishing an administrator session from a regular one.
pub const ADMIN_KEY: &str = "trove.admin";

/// Persisted language code.
pub const LANG_KEY: &str = "trove.lang";

/// Credits balance cached from the last login reply.
pub const CREDITS_KEY: &str = "trove.credits";

#[cfg(target_arch = "wasm32")]
mod backend {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    pub fn set(key: &str, value: &str) {
        if let Some(s) = local_storage() {
            if s.set_item(key, value).is_err() {
                eprintln!("[storage] failed to persist {key}");
            }
        }
    }

    pub fn remove(key: &str) {
        if let Some(s) = local_storage() {
            let _ = s.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use once_cell::sync::Lazy;
    use std::collections::HashMap;
    use std::sync::Mutex;

    static STORE: Lazy<Mutex<HashMap<String, String>>> = Lazy::new(|| Mutex::new(HashMap::new()));

    pub fn get(key: &str) -> Option<String> {
        STORE.lock().ok().and_then(|map| map.get(key).cloned())
    }

    pub fn set(key: &str, value: &str) {
        if let Ok(mut map) = STORE.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove(key: &str) {
        if let Ok(mut map) = STORE.lock() {
            map.remove(key);
        }
    }
}

pub fn get(key: &str) -> Option<String> {
    backend::get(key)
}

pub fn set(key: &str, value: &str) {
    backend::set(key, value);
}

pub fn remove(key: &str) {
    backend::remove(key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_roundtrip() {
        let key = "trove.test.storage-roundtrip";
        assert_eq!(get(key), None);

        set(key, "value");
        assert_eq!(get(key).as_deref(), Some("value"));

        set(key, "replaced");
        assert_eq!(get(key).as_deref(), Some("replaced"));

        remove(key);
        assert_eq!(get(key), None);
    }
}
