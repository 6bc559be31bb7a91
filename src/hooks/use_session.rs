use yew::prelude::*;

use crate::models::SessionProfile;
use crate::utils::constants::{ACCESS_TOKEN_COOKIE, LOGIN_PATH, STORAGE_KEY_SESSION};
use crate::utils::storage::{clear_cookie, load_from_storage, remove_from_storage};

pub struct UseSessionHandle {
    pub session: Option<SessionProfile>,
    pub is_logged_in: bool,
    pub logout: Callback<()>,
}

/// Hydrates the operator's session from localStorage. The route guard
/// has already gated access by the time a component renders; this hook
/// only supplies display state and the logout action.
#[hook]
pub fn use_session() -> UseSessionHandle {
    let session = use_state(|| load_from_storage::<SessionProfile>(STORAGE_KEY_SESSION));

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            let _ = remove_from_storage(STORAGE_KEY_SESSION);
            clear_cookie(ACCESS_TOKEN_COOKIE);
            session.set(None);
            log::info!("👋 Logged out");

            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(LOGIN_PATH);
            }
        })
    };

    UseSessionHandle {
        is_logged_in: session.is_some(),
        session: (*session).clone(),
        logout,
    }
}
