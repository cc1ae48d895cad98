use payloads::{ProjectId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch_with_cache},
};

/// Hook to manage single project data with lazy loading and global state
/// caching.
#[hook]
pub fn use_project(project_id: ProjectId) -> RequestHandle<responses::Project> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        project_id,
        move || get_cached_state.get_project(project_id).cloned(),
        move || !should_fetch_state.has_project_loaded(project_id),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let project = api_client
                    .get_project(&project_id)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.upsert_project(project.clone());
                });
                Ok(project)
            }
        },
    )
}
