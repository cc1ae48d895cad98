use payloads::{ExpenseReportId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch_with_cache},
};

/// Hook to manage a single expense report with lazy loading and global
/// state caching.
#[hook]
pub fn use_expense_report(
    report_id: ExpenseReportId,
) -> RequestHandle<responses::ExpenseReport> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        report_id,
        move || get_cached_state.get_report(report_id).cloned(),
        move || !should_fetch_state.has_report_loaded(report_id),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let report = api_client
                    .get_expense_report(&report_id)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.upsert_report(report.clone());
                });
                Ok(report)
            }
        },
    )
}
