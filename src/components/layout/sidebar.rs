//! Portal side navigation.
//!
//! Two groups:
//! 1. Main menu (dashboard, contracts for the service portal, profile, password)
//! 2. Contract status filter (service contract list only)

use crate::{
    app_lib::GIT_COMMIT_HASH,
    features::{
        contracts::{state::use_contract_filter, status::ContractStatusFilter},
        portal::{MenuItem, Portal, is_active, show_status_filter},
    },
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const LINK_CLASS: &str = "block rounded-md px-3 py-2 text-sm font-medium transition-colors";
const ACTIVE_CLASS: &str = "bg-sky-600 text-white";
const IDLE_CLASS: &str = "text-gray-700 hover:bg-sky-50 hover:text-sky-700";

#[component]
pub fn Sidebar(portal: Portal) -> impl IntoView {
    let pathname = use_location().pathname;
    let contract_filter = use_contract_filter();
    let filter_visible = move || portal.manages_contracts && show_status_filter(&pathname.get());

    view! {
        <aside class="hidden w-64 flex-shrink-0 flex-col border-r border-sky-100 bg-gradient-to-b from-sky-200 to-white md:flex">
            <nav class="flex-1 space-y-6 px-4 py-6">
                <div>
                    <h3 class="px-2 text-xs font-bold uppercase tracking-wider text-sky-700">
                        {portal.title}
                    </h3>
                    <h4 class="mt-4 px-2 text-xs font-semibold text-sky-700">"Menu chính"</h4>
                    <div class="mt-2 space-y-1">
                        {portal
                            .menu()
                            .into_iter()
                            .map(|item| view! { <SidebarLink item=item /> })
                            .collect_view()}
                    </div>
                </div>

                <Show when=filter_visible>
                    <div class="border-t border-sky-100 pt-6">
                        <h4 class="px-2 text-xs font-semibold text-sky-700">"Lọc theo trạng thái"</h4>
                        <div class="mt-2 space-y-1">
                            {ContractStatusFilter::ALL
                                .into_iter()
                                .map(|filter| {
                                    let selected = move || contract_filter.filter() == filter;
                                    view! {
                                        <button
                                            type="button"
                                            class="w-full rounded-md px-3 py-2 text-left text-sm text-gray-700 hover:bg-sky-50"
                                            class:bg-sky-100=selected
                                            class:font-bold=selected
                                            class:text-sky-800=selected
                                            on:click=move |_| {
                                                tracing::debug!(status = filter.key(), "contract filter changed");
                                                contract_filter.select(filter);
                                            }
                                        >
                                            {filter.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </nav>

            <div class="border-t border-sky-100 p-4">
                <p class="text-center font-mono text-[10px] uppercase tracking-tighter text-gray-400">
                    {format!("build {GIT_COMMIT_HASH}")}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(item: MenuItem) -> impl IntoView {
    let pathname = use_location().pathname;
    let href = item.path.clone();
    let label = item.label;
    let class = move || {
        let state = if pathname.with(|current| is_active(&item, current)) {
            ACTIVE_CLASS
        } else {
            IDLE_CLASS
        };
        format!("{LINK_CLASS} {state}")
    };

    view! {
        <A href=href {..} class=class>
            {label}
        </A>
    }
}
