//! Browser localStorage helpers for the persisted username.
//!
//! SYSTEM CONTEXT
//! ==============
//! The confirmed username survives page reloads under a single key. These
//! helpers centralize hydrate-only read/write behavior so the socket and
//! dispatch code never repeat web-sys glue.

const USER_KEY: &str = "parley:user";

/// Load the persisted username, if any.
#[must_use]
pub fn load_user() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(USER_KEY).ok().flatten().filter(|u| !u.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the confirmed username across reloads.
pub fn save_user(user: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(USER_KEY, user);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Drop the persisted username after a join rejection.
pub fn clear_user() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(USER_KEY);
    }
}
