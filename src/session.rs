//! Session Lookup
//!
//! Reads the signed-in user id from browser session storage.

const USER_ID_KEY: &str = "user_id";

/// Current user id, if the session store holds one.
/// An inaccessible store or a missing key both yield `None`.
pub fn current_user_id() -> Option<String> {
    let storage = web_sys::window()?.session_storage().ok().flatten()?;
    storage.get_item(USER_ID_KEY).ok().flatten()
}
