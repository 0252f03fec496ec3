//! Browser `localStorage` persistence for the session token.
//!
//! Browser-only; other builds have no storage, so `load` finds nothing and
//! writes are dropped.

/// Read the stored token under `key`. Blank values count as absent.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        match storage.get_item(key) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                log::warn!("token read failed: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `token` under `key`.
pub fn save(key: &str, token: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        if let Err(e) = storage.set_item(key, token) {
            log::warn!("token write failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, token);
    }
}

/// Remove any token stored under `key`.
pub fn clear(key: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("token removal failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
