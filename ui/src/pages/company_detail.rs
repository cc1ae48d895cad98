use payloads::CompanyId;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    CompanyForm, Modal, ProjectForm, ProjectStatusBadge, RequireAuth,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_company, use_company_projects, use_title};
use crate::utils::{format_money, format_timestamp};
use crate::{Route, State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: CompanyId,
}

#[function_component]
pub fn CompanyDetailPage(props: &Props) -> Html {
    html! {
        <RequireAuth>
            <CompanyDetailInner company_id={props.company_id} />
        </RequireAuth>
    }
}

#[function_component]
fn CompanyDetailInner(props: &Props) -> Html {
    let company_id = props.company_id;
    let (_state, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let company_hook = use_company(company_id);
    let projects_hook = use_company_projects(company_id);

    use_title(
        company_hook
            .state
            .data()
            .map(|c| c.company_details.name.as_str())
            .unwrap_or("Client"),
    );

    let show_edit = use_state(|| false);
    let show_new_project = use_state(|| false);
    let show_delete = use_state(|| false);
    let is_deleting = use_state(|| false);

    let close_edit = {
        let show_edit = show_edit.clone();
        Callback::from(move |_| show_edit.set(false))
    };
    let close_new_project = {
        let show_new_project = show_new_project.clone();
        Callback::from(move |_| show_new_project.set(false))
    };
    let close_delete = {
        let show_delete = show_delete.clone();
        Callback::from(move |_| show_delete.set(false))
    };

    let on_delete = {
        let is_deleting = is_deleting.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let is_deleting = is_deleting.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            is_deleting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.delete_company(&company_id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|s| s.remove_company(company_id));
                        toast.success("Client deleted");
                        navigator.push(&Route::Companies);
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                        is_deleting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="space-y-8">
            {company_hook.render("client", |company| {
                let details = &company.company_details;
                html! {
                    <div class="space-y-6">
                        <div class="flex justify-between items-start">
                            <div>
                                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                    {&details.name}
                                </h1>
                                <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                                    {"Client since "}{format_timestamp(company.created_at)}
                                </p>
                            </div>
                            <div class="flex space-x-3">
                                <button
                                    onclick={
                                        let show_edit = show_edit.clone();
                                        Callback::from(move |_| show_edit.set(true))
                                    }
                                    class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                                >
                                    {"Edit"}
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
                            </div>
                        </div>

                        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-2 text-sm">
                            <p>
                                <span class="font-medium">{"Contact: "}</span>
                                {&details.contact_email}
                            </p>
                            if let Some(phone) = &details.phone {
                                <p><span class="font-medium">{"Phone: "}</span>{phone}</p>
                            }
                            if let Some(address) = &details.address {
                                <p><span class="font-medium">{"Address: "}</span>{address}</p>
                            }
                            if let Some(notes) = &details.notes {
                                <p class="text-neutral-600 dark:text-neutral-400">{notes}</p>
                            }
                        </div>
                    </div>
                }
            })}

            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Projects"}
                </h2>
                <button
                    onclick={
                        let show_new_project = show_new_project.clone();
                        Callback::from(move |_| show_new_project.set(true))
                    }
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"New project"}
                </button>
            </div>

            {projects_hook.render("projects", |projects| {
                if projects.is_empty() {
                    html! {
                        <p class="text-neutral-600 dark:text-neutral-400 py-4">
                            {"No projects for this client yet."}
                        </p>
                    }
                } else {
                    html! {
                        <div class="space-y-3">
                            {projects.iter().map(|project| {
                                let details = &project.project_details;
                                html! {
                                    <Link<Route>
                                        to={Route::ProjectDetail { id: project.project_id }}
                                        classes="flex items-center justify-between bg-white dark:bg-neutral-800 px-6 py-4 rounded-lg shadow-sm border border-neutral-200 dark:border-neutral-700 hover:shadow-md transition-shadow"
                                    >
                                        <div>
                                            <p class="font-medium text-neutral-900 dark:text-neutral-100">
                                                {&details.name}
                                            </p>
                                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                {format!("{}/hr", format_money(details.hourly_rate))}
                                            </p>
                                        </div>
                                        <ProjectStatusBadge status={details.status} />
                                    </Link<Route>>
                                }
                            }).collect::<Html>()}
                        </div>
                    }
                }
            })}

            if *show_edit {
                if let Some(company) = company_hook.state.data() {
                    <Modal on_close={close_edit.clone()} max_width="max-w-lg">
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                            {"Edit client"}
                        </h3>
                        <CompanyForm
                            existing={company.clone()}
                            on_success={close_edit.reform(|_| ())}
                            on_cancel={close_edit.clone()}
                        />
                    </Modal>
                }
            }

            if *show_new_project {
                <Modal on_close={close_new_project.clone()} max_width="max-w-lg">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"New project"}
                    </h3>
                    <ProjectForm
                        fixed_company={company_id}
                        on_success={
                            let close = close_new_project.clone();
                            let refetch = projects_hook.send.clone();
                            Callback::from(move |_| {
                                refetch.emit(());
                                close.emit(());
                            })
                        }
                        on_cancel={close_new_project.clone()}
                    />
                </Modal>
            }

            if *show_delete {
                <Modal on_close={close_delete.clone()}>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Delete client?"}
                    </h3>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-6">
                        {"This removes the client and all of its projects. This cannot be undone."}
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
                            disabled={*is_deleting}
                            class="px-4 py-2 rounded-md text-sm font-medium bg-red-600 hover:bg-red-700 text-white disabled:opacity-50 transition-colors"
                        >
                            {if *is_deleting { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </Modal>
            }
        </div>
    }
}
