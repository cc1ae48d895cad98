use payloads::{requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{RequestHandle, use_fetch},
};

/// Hook to fetch expense reports matching a filter.
///
/// The list itself is filter-driven and refetched per mount, but every
/// report that comes back is upserted into the canonical store so that
/// navigating into `/expenses/:id` is served from cache.
#[hook]
pub fn use_expense_reports(
    filter: requests::ExpenseReportFilter,
) -> RequestHandle<Vec<responses::ExpenseReport>> {
    let (_state, dispatch) = use_store::<State>();

    let fetch_filter = filter.clone();
    let fetch_dispatch = dispatch.clone();
    use_fetch(filter, move || {
        let filter = fetch_filter.clone();
        let dispatch = fetch_dispatch.clone();
        async move {
            let api_client = get_api_client();
            let reports = api_client
                .list_expense_reports(&filter)
                .await
                .map_err(|e| e.to_string())?;
            dispatch.reduce_mut(|s| {
                for report in &reports {
                    s.upsert_report(report.clone());
                }
            });
            Ok(reports)
        }
    })
}
