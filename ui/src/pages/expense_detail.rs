use payloads::ExpenseReportId;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    ExpenseEditor, ExpenseStatusBadge, Modal, RequireAuth,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_employees, use_expense_report, use_title};
use crate::utils::{format_date, format_money};
use crate::{Route, State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub report_id: ExpenseReportId,
}

#[function_component]
pub fn ExpenseDetailPage(props: &Props) -> Html {
    use_title("Expense report");
    html! {
        <RequireAuth>
            <ExpenseDetailInner report_id={props.report_id} />
        </RequireAuth>
    }
}

#[function_component]
fn ExpenseDetailInner(props: &Props) -> Html {
    let report_id = props.report_id;
    let (state, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let report_hook = use_expense_report(report_id);
    let _employees_hook = use_employees();

    let show_edit = use_state(|| false);
    let show_delete = use_state(|| false);
    let is_working = use_state(|| false);

    let close_edit = {
        let show_edit = show_edit.clone();
        Callback::from(move |_| show_edit.set(false))
    };
    let close_delete = {
        let show_delete = show_delete.clone();
        Callback::from(move |_| show_delete.set(false))
    };

    let on_submit_report = {
        let is_working = is_working.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let is_working = is_working.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            is_working.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.submit_expense_report(&report_id).await {
                    Ok(report) => {
                        dispatch.reduce_mut(|s| s.upsert_report(report));
                        toast.success("Report submitted for approval");
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                    }
                }
                is_working.set(false);
            });
        })
    };

    let on_delete = {
        let is_working = is_working.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let is_working = is_working.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            is_working.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.delete_expense_report(&report_id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|s| s.remove_report(report_id));
                        toast.success("Report deleted");
                        navigator.push(&Route::Expenses);
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                        is_working.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="space-y-8">
            {report_hook.render("expense report", |report| {
                let employee = state
                    .employee_name(report.employee_id)
                    .unwrap_or("Unknown employee")
                    .to_string();
                let project = report
                    .project_id
                    .and_then(|id| state.get_project(id))
                    .map(|p| p.project_details.name.clone());
                let editable = report.status.is_editable();
                html! {
                    <div class="space-y-6">
                        <div class="flex justify-between items-start">
                            <div>
                                <div class="flex items-center space-x-3">
                                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                        {format!("Expenses · {}", employee)}
                                    </h1>
                                    <ExpenseStatusBadge status={report.status} />
                                </div>
                                if let Some(project) = project {
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                                        {"Project: "}{project}
                                    </p>
                                }
                            </div>
                            <div class="flex space-x-3">
                                if editable {
                                    <button
                                        onclick={
                                            let show_edit = show_edit.clone();
                                            Callback::from(move |_| show_edit.set(true))
                                        }
                                        class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                                    >
                                        {"Edit draft"}
                                    </button>
                                    <button
                                        onclick={on_submit_report.clone()}
                                        disabled={*is_working}
                                        class="px-4 py-2 rounded-md text-sm font-medium bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white disabled:opacity-50 transition-colors"
                                    >
                                        {"Submit for approval"}
                                    </button>
                                    <button
                                        onclick={
                                            let show_delete = show_delete.clone();
                                            Callback::from(move |_| show_delete.set(true))
                                        }
                                        class="px-4 py-2 rounded-md text-sm font-medium border border-red-300 dark:border-red-800 text-red-700 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors"
                                    >
                                        {"Delete"}
                                    </button>
                                }
                            </div>
                        </div>

                        <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left border-b border-neutral-200 dark:border-neutral-700 text-neutral-600 dark:text-neutral-400">
                                        <th class="px-6 py-3 font-medium">{"Description"}</th>
                                        <th class="px-6 py-3 font-medium">{"Category"}</th>
                                        <th class="px-6 py-3 font-medium">{"Date"}</th>
                                        <th class="px-6 py-3 font-medium text-right">{"Amount"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {report.items.iter().map(|line| {
                                        let item = &line.item_details;
                                        html! {
                                            <tr key={line.item_id.to_string()} class="border-b border-neutral-100 dark:border-neutral-700/50 last:border-0">
                                                <td class="px-6 py-3 text-neutral-900 dark:text-neutral-100">
                                                    {&item.description}
                                                </td>
                                                <td class="px-6 py-3 text-neutral-600 dark:text-neutral-400">
                                                    {item.category.label()}
                                                </td>
                                                <td class="px-6 py-3 text-neutral-600 dark:text-neutral-400">
                                                    {format_date(item.incurred_on)}
                                                </td>
                                                <td class="px-6 py-3 text-right">
                                                    {format_money(item.amount)}
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Html>()}
                                    <tr>
                                        <td colspan="3" class="px-6 py-3 font-medium text-right">
                                            {"Total"}
                                        </td>
                                        <td class="px-6 py-3 font-medium text-right">
                                            {format_money(report.total)}
                                        </td>
                                    </tr>
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
            })}

            if *show_edit {
                if let Some(report) = report_hook.state.data() {
                    <Modal on_close={close_edit.clone()} max_width="max-w-3xl">
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                            {"Edit draft"}
                        </h3>
                        <ExpenseEditor
                            existing={report.clone()}
                            on_success={close_edit.reform(|_| ())}
                            on_cancel={close_edit.clone()}
                        />
                    </Modal>
                }
            }

            if *show_delete {
                <Modal on_close={close_delete.clone()}>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Delete report?"}
                    </h3>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-6">
                        {"This removes the draft and its lines. This cannot be undone."}
                    </p>
                    <div class="flex justify-end space-x-3">
                        <button
                            onclick={close_delete.reform(|_| ())}
                            class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            onclick={on_delete}
                            disabled={*is_working}
                            class="px-4 py-2 rounded-md text-sm font-medium bg-red-600 hover:bg-red-700 text-white disabled:opacity-50 transition-colors"
                        >
                            {if *is_working { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </Modal>
            }
        </div>
    }
}
