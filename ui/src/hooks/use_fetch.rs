use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{RequestHandle, RequestState, use_request};

/// Generic fetch hook composer.
///
/// Automatically dispatches on mount and whenever `deps` change, and the
/// returned handle's `send` doubles as a manual refetch. The fetch function
/// captures its inputs from the closure; `deps` exists purely for change
/// tracking.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_project_tasks(project_id: ProjectId) -> RequestHandle<Vec<responses::Task>> {
///     use_fetch(project_id, move || async move {
///         get_api_client()
///             .list_tasks(&requests::TaskFilter {
///                 project_id: Some(project_id),
///                 ..Default::default()
///             })
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> RequestHandle<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let handle = use_request(fetch_fn);

    // Auto-fetch on mount and when deps change. A dep change while a call
    // is in flight simply supersedes it.
    {
        let send = handle.send.clone();
        use_effect_with(deps, move |_| {
            send.emit(());
        });
    }

    handle
}

/// Generic fetch hook with global state caching support.
///
/// Similar to `use_fetch` but for hooks that keep their data in the yewdux
/// store. Takes three closures:
///
/// 1. `get_cached`: Retrieves cached data from global state
/// 2. `should_fetch`: Determines if a fetch is needed (checks auth + cache
///    status)
/// 3. `fetch_and_cache`: Performs the API call and updates global state
///
/// While cached data exists it is served as `Success` even during a
/// refetch, so list pages don't flash back to a spinner.
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> RequestHandle<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let request = use_request(fetch_and_cache);

    // Auto-fetch on mount if should_fetch returns true
    {
        let send = request.send.clone();
        let should_fetch = Rc::new(should_fetch);
        use_effect_with(deps, move |_| {
            if should_fetch() {
                send.emit(());
            }
        });
    }

    let state = match get_cached() {
        Some(cached) => RequestState::Success(cached),
        None => request.state.clone(),
    };

    RequestHandle {
        state,
        send: request.send,
    }
}
