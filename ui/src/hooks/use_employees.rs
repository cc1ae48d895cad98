use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch_with_cache},
};

/// Hook to manage the employee roster with lazy loading and global state
/// caching. The roster is also what task views use to resolve assignee
/// names, so it is worth keeping hot.
#[hook]
pub fn use_employees() -> RequestHandle<Vec<responses::Employee>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        (),
        move || get_cached_state.employees(),
        move || !should_fetch_state.has_employees_loaded(),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let employees = api_client
                    .list_employees()
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_employees(employees.clone());
                });
                Ok(employees)
            }
        },
    )
}
