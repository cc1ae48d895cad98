use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{Modal, ProjectForm, ProjectStatusBadge, RequireAuth};
use crate::hooks::{use_companies, use_projects, use_title};
use crate::utils::format_money;
use crate::{Route, State};

#[function_component]
pub fn ProjectsPage() -> Html {
    use_title("Projects");
    html! {
        <RequireAuth>
            <ProjectsPageInner />
        </RequireAuth>
    }
}

#[function_component]
fn ProjectsPageInner() -> Html {
    let (state, _dispatch) = use_store::<State>();
    let projects_hook = use_projects();
    // Warm the company cache so rows can show client names.
    let _companies_hook = use_companies();
    let show_create = use_state(|| false);

    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Projects"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Engagements across all clients"}
                    </p>
                </div>
                <button
                    onclick={
                        let show_create = show_create.clone();
                        Callback::from(move |_| show_create.set(true))
                    }
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"New project"}
                </button>
            </div>

            {projects_hook.render("projects", |projects| {
                if projects.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No projects yet."}
                            </p>
                        </div>
                    };
                }
                html! {
                    <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left border-b border-neutral-200 dark:border-neutral-700 text-neutral-600 dark:text-neutral-400">
                                    <th class="px-6 py-3 font-medium">{"Project"}</th>
                                    <th class="px-6 py-3 font-medium">{"Client"}</th>
                                    <th class="px-6 py-3 font-medium">{"Rate"}</th>
                                    <th class="px-6 py-3 font-medium">{"Budget"}</th>
                                    <th class="px-6 py-3 font-medium">{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {projects.iter().map(|project| {
                                    let details = &project.project_details;
                                    let client_name = state
                                        .get_company(details.company_id)
                                        .map(|c| c.company_details.name.clone())
                                        .unwrap_or_else(|| "—".to_string());
                                    html! {
                                        <tr key={project.project_id.to_string()} class="border-b border-neutral-100 dark:border-neutral-700/50 last:border-0">
                                            <td class="px-6 py-3">
                                                <Link<Route>
                                                    to={Route::ProjectDetail { id: project.project_id }}
                                                    classes="font-medium text-neutral-900 dark:text-neutral-100 hover:underline"
                                                >
                                                    {&details.name}
                                                </Link<Route>>
                                            </td>
                                            <td class="px-6 py-3 text-neutral-600 dark:text-neutral-400">
                                                {client_name}
                                            </td>
                                            <td class="px-6 py-3">
                                                {format!("{}/hr", format_money(details.hourly_rate))}
                                            </td>
                                            <td class="px-6 py-3">
                                                {details.budget.map(format_money).unwrap_or_else(|| "—".to_string())}
                                            </td>
                                            <td class="px-6 py-3">
                                                <ProjectStatusBadge status={details.status} />
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
                        {"New project"}
                    </h3>
                    <ProjectForm
                        on_success={close_create.reform(|_| ())}
                        on_cancel={close_create.clone()}
                    />
                </Modal>
            }
        </div>
    }
}
