use yew::prelude::*;

use super::Header;
use crate::components::ToastContainer;
use crate::hooks::use_authentication;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Page chrome: header, content container, and the toast overlay. Also
/// kicks off the startup session probe.
#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    use_authentication();

    html! {
        <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {for props.children.iter()}
            </main>
            <ToastContainer />
        </div>
    }
}
