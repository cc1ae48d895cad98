use payloads::{requests, responses};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{RequestHandle, use_fetch},
};

/// Hook to fetch tasks matching a filter.
///
/// Task lists are filter-driven and change often, so they are deliberately
/// not cached in global state: every filter change (and every mount)
/// refetches, superseding any in-flight call.
#[hook]
pub fn use_tasks(
    filter: requests::TaskFilter,
) -> RequestHandle<Vec<responses::Task>> {
    let fetch_filter = filter.clone();
    use_fetch(filter, move || {
        let filter = fetch_filter.clone();
        async move {
            let api_client = get_api_client();
            api_client
                .list_tasks(&filter)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
