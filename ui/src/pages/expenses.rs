use payloads::{EmployeeId, ExpenseStatus, requests};
use std::str::FromStr;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    ExpenseEditor, ExpenseStatusBadge, Modal, RequireAuth,
};
use crate::hooks::{use_employees, use_expense_reports, use_title};
use crate::utils::{format_money, format_timestamp};
use crate::{Route, State};

#[function_component]
pub fn ExpensesPage() -> Html {
    use_title("Expenses");
    html! {
        <RequireAuth>
            <ExpensesPageInner />
        </RequireAuth>
    }
}

#[function_component]
fn ExpensesPageInner() -> Html {
    let (state, _dispatch) = use_store::<State>();
    let _employees_hook = use_employees();

    let filter = use_state(requests::ExpenseReportFilter::default);
    let reports_hook = use_expense_reports((*filter).clone());

    let show_create = use_state(|| false);
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    let on_status_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let status = ExpenseStatus::ALL
                .iter()
                .find(|s| s.label() == select.value())
                .copied();
            filter.set(requests::ExpenseReportFilter {
                status,
                ..(*filter).clone()
            });
        })
    };

    let on_employee_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set(requests::ExpenseReportFilter {
                employee_id: EmployeeId::from_str(&select.value()).ok(),
                ..(*filter).clone()
            });
        })
    };

    let select_class = "px-3 py-2 rounded-md border border-neutral-300 \
                        dark:border-neutral-600 bg-white dark:bg-neutral-700 \
                        text-sm focus:outline-none focus:ring-2 \
                        focus:ring-neutral-500";

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Expense reports"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Drafts and submissions across the firm"}
                    </p>
                </div>
                <button
                    onclick={
                        let show_create = show_create.clone();
                        Callback::from(move |_| show_create.set(true))
                    }
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"New report"}
                </button>
            </div>

            <div class="flex flex-wrap gap-3">
                <select class={select_class} onchange={on_status_filter}>
                    <option value="" selected={filter.status.is_none()}>
                        {"All statuses"}
                    </option>
                    {ExpenseStatus::ALL.iter().map(|s| html! {
                        <option selected={filter.status == Some(*s)}>{s.label()}</option>
                    }).collect::<Html>()}
                </select>
                <select class={select_class} onchange={on_employee_filter}>
                    <option value="" selected={filter.employee_id.is_none()}>
                        {"All employees"}
                    </option>
                    {state.employees().map(|employees| employees.iter().map(|employee| {
                        let id = employee.employee_id;
                        html! {
                            <option
                                value={id.to_string()}
                                selected={filter.employee_id == Some(id)}
                            >
                                {&employee.employee_details.name}
                            </option>
                        }
                    }).collect::<Html>()).unwrap_or_default()}
                </select>
            </div>

            {reports_hook.render("expense reports", |reports| {
                if reports.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No expense reports match this filter."}
                            </p>
                        </div>
                    };
                }
                html! {
                    <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left border-b border-neutral-200 dark:border-neutral-700 text-neutral-600 dark:text-neutral-400">
                                    <th class="px-6 py-3 font-medium">{"Employee"}</th>
                                    <th class="px-6 py-3 font-medium">{"Lines"}</th>
                                    <th class="px-6 py-3 font-medium">{"Total"}</th>
                                    <th class="px-6 py-3 font-medium">{"Status"}</th>
                                    <th class="px-6 py-3 font-medium">{"Updated"}</th>
                                    <th class="px-6 py-3"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {reports.iter().map(|report| {
                                    let employee = state
                                        .employee_name(report.employee_id)
                                        .unwrap_or("—")
                                        .to_string();
                                    html! {
                                        <tr key={report.report_id.to_string()} class="border-b border-neutral-100 dark:border-neutral-700/50 last:border-0">
                                            <td class="px-6 py-3 font-medium text-neutral-900 dark:text-neutral-100">
                                                {employee}
                                            </td>
                                            <td class="px-6 py-3">{report.items.len()}</td>
                                            <td class="px-6 py-3">{format_money(report.total)}</td>
                                            <td class="px-6 py-3">
                                                <ExpenseStatusBadge status={report.status} />
                                            </td>
                                            <td class="px-6 py-3 text-neutral-600 dark:text-neutral-400">
                                                {format_timestamp(report.updated_at)}
                                            </td>
                                            <td class="px-6 py-3 text-right">
                                                <Link<Route>
                                                    to={Route::ExpenseDetail { id: report.report_id }}
                                                    classes="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-neutral-100 transition-colors"
                                                >
                                                    {"View"}
                                                </Link<Route>>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()}
                            </tbody>
                        </table>
                    </div>
                }
            })}

            if *show_create {
                <Modal on_close={close_create.clone()} max_width="max-w-3xl">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"New expense report"}
                    </h3>
                    <ExpenseEditor
                        on_success={{
                            let close = close_create.clone();
                            let refetch = reports_hook.send.clone();
                            Callback::from(move |_| {
                                refetch.emit(());
                                close.emit(());
                            })
                        }}
                        on_cancel={close_create.clone()}
                    />
                </Modal>
            }
        </div>
    }
}
