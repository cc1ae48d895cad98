use payloads::responses::UserProfile;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State};

/// Current auth state for gating components.
///
/// Returns `None` while the startup probe is still running or when logged
/// out; gate rendering on it rather than calling data hooks conditionally.
#[hook]
pub fn use_require_auth() -> Option<UserProfile> {
    let (state, _dispatch) = use_store::<State>();
    match &state.auth_state {
        AuthState::LoggedIn(profile) => Some(profile.clone()),
        _ => None,
    }
}
