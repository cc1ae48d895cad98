use payloads::responses;
use yew::prelude::*;

use crate::components::{EmployeeForm, Modal, RequireAuth};
use crate::hooks::{use_employees, use_title};
use crate::utils::format_money;

#[function_component]
pub fn EmployeesPage() -> Html {
    use_title("Employees");
    html! {
        <RequireAuth>
            <EmployeesPageInner />
        </RequireAuth>
    }
}

#[function_component]
fn EmployeesPageInner() -> Html {
    let employees_hook = use_employees();
    let show_create = use_state(|| false);
    let editing = use_state(|| None::<responses::Employee>);

    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };
    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Employees"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"The firm's roster"}
                    </p>
                </div>
                <button
                    onclick={
                        let show_create = show_create.clone();
                        Callback::from(move |_| show_create.set(true))
                    }
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"Add employee"}
                </button>
            </div>

            {employees_hook.render("employees", |employees| {
                if employees.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No employees on the roster yet."}
                            </p>
                        </div>
                    };
                }
                html! {
                    <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left border-b border-neutral-200 dark:border-neutral-700 text-neutral-600 dark:text-neutral-400">
                                    <th class="px-6 py-3 font-medium">{"Name"}</th>
                                    <th class="px-6 py-3 font-medium">{"Title"}</th>
                                    <th class="px-6 py-3 font-medium">{"Email"}</th>
                                    <th class="px-6 py-3 font-medium">{"Hourly cost"}</th>
                                    <th class="px-6 py-3 font-medium">{"Status"}</th>
                                    <th class="px-6 py-3"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {employees.iter().map(|employee| {
                                    let details = &employee.employee_details;
                                    html! {
                                        <tr key={employee.employee_id.to_string()} class="border-b border-neutral-100 dark:border-neutral-700/50 last:border-0">
                                            <td class="px-6 py-3 font-medium text-neutral-900 dark:text-neutral-100">
                                                {&details.name}
                                            </td>
                                            <td class="px-6 py-3 text-neutral-600 dark:text-neutral-400">
                                                {&details.title}
                                            </td>
                                            <td class="px-6 py-3 text-neutral-600 dark:text-neutral-400">
                                                {&details.email}
                                            </td>
                                            <td class="px-6 py-3">
                                                {format!("{}/hr", format_money(details.hourly_cost))}
                                            </td>
                                            <td class="px-6 py-3">
                                                if details.is_active {
                                                    <span class="text-green-700 dark:text-green-400">{"Active"}</span>
                                                } else {
                                                    <span class="text-neutral-500">{"Inactive"}</span>
                                                }
                                            </td>
                                            <td class="px-6 py-3 text-right">
                                                <button
                                                    onclick={{
                                                        let editing = editing.clone();
                                                        let employee = employee.clone();
                                                        Callback::from(move |_| {
                                                            editing.set(Some(employee.clone()))
                                                        })
                                                    }}
                                                    class="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-neutral-100 transition-colors"
                                                >
                                                    {"Edit"}
                                                </button>
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
                <Modal on_close={close_create.clone()} max_width="max-w-lg">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"Add employee"}
                    </h3>
                    <EmployeeForm
                        on_success={close_create.reform(|_| ())}
                        on_cancel={close_create.clone()}
                    />
                </Modal>
            }

            if let Some(employee) = (*editing).clone() {
                <Modal on_close={close_edit.clone()} max_width="max-w-lg">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"Edit employee"}
                    </h3>
                    <EmployeeForm
                        existing={employee}
                        on_success={close_edit.reform(|_| ())}
                        on_cancel={close_edit.clone()}
                    />
                </Modal>
            }
        </div>
    }
}
