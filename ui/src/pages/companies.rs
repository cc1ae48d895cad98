use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{CompanyForm, Modal, RequireAuth};
use crate::hooks::{use_companies, use_title};

#[function_component]
pub fn CompaniesPage() -> Html {
    use_title("Clients");
    html! {
        <RequireAuth>
            <CompaniesPageInner />
        </RequireAuth>
    }
}

#[function_component]
fn CompaniesPageInner() -> Html {
    let companies_hook = use_companies();
    let show_create = use_state(|| false);

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(true))
    };
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Clients"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Companies the firm works for"}
                    </p>
                </div>
                <button
                    onclick={open_create.clone()}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"New client"}
                </button>
            </div>

            {companies_hook.render("clients", |companies| {
                if companies.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No clients yet. Add the first one to get started."}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {companies.iter().map(|company| {
                                let details = &company.company_details;
                                html! {
                                    <div key={company.company_id.to_string()} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                                        <div class="space-y-4">
                                            <div>
                                                <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                                                    {&details.name}
                                                </h3>
                                                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                    {&details.contact_email}
                                                </p>
                                            </div>
                                            if let Some(phone) = &details.phone {
                                                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                    {phone}
                                                </p>
                                            }
                                            <div class="pt-2">
                                                <Link<Route>
                                                    to={Route::CompanyDetail { id: company.company_id }}
                                                    classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
                                                >
                                                    {"View details"}
                                                </Link<Route>>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()}
                        </div>
                    }
                }
            })}

            if *show_create {
                <Modal on_close={close_create.clone()} max_width="max-w-lg">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"New client"}
                    </h3>
                    <CompanyForm
                        on_success={close_create.reform(|_| ())}
                        on_cancel={close_create.clone()}
                    />
                </Modal>
            }
        </div>
    }
}
