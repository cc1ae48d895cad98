use payloads::{requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch_with_cache},
};

/// Hook to manage the full project list with lazy loading and global state
/// caching.
///
/// ## Hook Architecture Rationale
///
/// Projects follow a 3-tier hierarchy:
/// 1. `use_projects` - every project, for the firm-wide projects page
/// 2. `use_company_projects(company_id)` - projects of one client company
/// 3. `use_project(project_id)` - a single project by id
///
/// All three share the canonical per-id store, so navigating from any list
/// into `/projects/:id` never refetches what is already loaded.
#[hook]
pub fn use_projects() -> RequestHandle<Vec<responses::Project>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        (),
        move || get_cached_state.projects(),
        move || !should_fetch_state.has_projects_loaded(),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let projects = api_client
                    .list_projects(&requests::ProjectFilter::default())
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_projects(projects.clone());
                });
                Ok(projects)
            }
        },
    )
}
