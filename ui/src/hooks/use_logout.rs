use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{Route, State, get_api_client, session};

/// Returns a callback that ends the session and returns to the home page.
///
/// The local session and caches are dropped even when the server-side
/// logout call fails.
#[hook]
pub fn use_logout() -> Callback<()> {
    let (_state, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            if let Err(e) = api_client.logout().await {
                tracing::debug!("server-side logout failed: {e}");
            }
            session::persist(api_client.session());
            dispatch.reduce_mut(|state| state.logout());
            toast.success("Logged out");
            navigator.push(&Route::Home);
        });
    })
}
