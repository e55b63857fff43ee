//! Order Tracker browser UI

use leptos::prelude::*;

use crate::routes::Page;

mod api;
mod chat;
mod logging;
mod orders;
mod pages;
mod routes;
mod timers;

#[component]
fn NavBar(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="brand" href={Page::Home.href()}>"Order Tracker"</a>
            <ul>
                {Page::ALL
                    .into_iter()
                    .map(|target| {
                        view! {
                            <li>
                                <a
                                    href={target.href()}
                                    class=move || {
                                        if page.get() == target { "nav-link active" } else { "nav-link" }
                                    }
                                >
                                    {target.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// App shell: navigation, the current page and the chat widget.
#[component]
fn App() -> impl IntoView {
    let client = api::client();
    let page = routes::install();
    let page_client = client.clone();

    view! {
        <NavBar page=page />
        <main>
            {move || match page.get() {
                Page::Home => view! { <pages::HomePage /> }.into_any(),
                Page::Orders => view! { <orders::OrdersPage client={page_client.clone()} /> }.into_any(),
                Page::About => view! { <pages::AboutPage /> }.into_any(),
                Page::Contact => view! { <pages::ContactPage /> }.into_any(),
            }}
        </main>
        <chat::ChatWidget client=client />
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = logging::init() {
        leptos::logging::warn!("failed to install tracing subscriber: {error}");
    }

    leptos::mount::mount_to_body(App);
}
