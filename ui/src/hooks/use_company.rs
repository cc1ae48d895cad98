use payloads::{CompanyId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch_with_cache},
};

/// Hook to manage single company data with lazy loading and global state
/// caching.
///
/// Companies already loaded through `use_companies` are served from the
/// canonical store without another round trip, which keeps `/companies/:id`
/// cheap to deep-link into.
#[hook]
pub fn use_company(company_id: CompanyId) -> RequestHandle<responses::Company> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        company_id,
        move || get_cached_state.get_company(company_id).cloned(),
        move || !should_fetch_state.has_company_loaded(company_id),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let company = api_client
                    .get_company(&company_id)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.upsert_company(company.clone());
                });
                Ok(company)
            }
        },
    )
}
