use payloads::{CompanyId, requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch_with_cache},
};

/// Hook to manage the projects of one client company, cached per company.
#[hook]
pub fn use_company_projects(
    company_id: CompanyId,
) -> RequestHandle<Vec<responses::Project>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        company_id,
        move || get_cached_state.projects_for_company(company_id),
        move || {
            !should_fetch_state.has_projects_loaded_for_company(company_id)
        },
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let projects = api_client
                    .list_projects(&requests::ProjectFilter {
                        company_id: Some(company_id),
                        ..Default::default()
                    })
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_projects_for_company(company_id, projects.clone());
                });
                Ok(projects)
            }
        },
    )
}
