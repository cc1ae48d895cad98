use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client, session};

/// Hook to check authentication status on startup.
///
/// If a persisted session exists, probes the API for the user's profile.
/// The probe itself may rotate the token pair (401 + silent refresh inside
/// the client), so whatever the session store holds afterwards is written
/// back to local storage.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                if !api_client.session().is_logged_in() {
                    dispatch.reduce_mut(|state| {
                        state.auth_state = AuthState::LoggedOut;
                    });
                    return;
                }
                match api_client.user_profile().await {
                    Ok(profile) => {
                        session::persist(api_client.session());
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedIn(profile);
                        });
                    }
                    Err(e) => {
                        // Refresh failure already cleared the store; a plain
                        // network error keeps the tokens for the next try.
                        tracing::debug!("session probe failed: {e}");
                        session::persist(api_client.session());
                        dispatch.reduce_mut(|state| state.logout());
                    }
                }
            });
        }
    });
}
