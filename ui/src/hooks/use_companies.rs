use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch_with_cache},
};

/// Hook to manage the company list with lazy loading and global state
/// caching.
#[hook]
pub fn use_companies() -> RequestHandle<Vec<responses::Company>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        (),
        move || get_cached_state.companies(),
        move || !should_fetch_state.has_companies_loaded(),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let companies = api_client
                    .list_companies()
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_companies(companies.clone());
                });
                Ok(companies)
            }
        },
    )
}
