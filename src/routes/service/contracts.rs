//! Service staff contract list. The status filter lives in the sidebar.

use crate::app_lib::storage::LocalSessionStore;
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::contracts::client;
use crate::features::contracts::state::use_contract_filter;
use crate::features::contracts::status::contract_status_label;
use crate::features::contracts::types::{ContractQuery, ContractSummary, Page};
use leptos::prelude::*;

const LOAD_FAILED: &str = "Lỗi khi tải danh sách hợp đồng!";
const EMPTY: &str = "Không có hợp đồng nào.";

#[component]
pub fn ServiceContractsPage() -> impl IntoView {
    let contract_filter = use_contract_filter();
    let query = contract_filter.query;

    let contracts = LocalResource::new(move || {
        let query = query.get();
        async move {
            let Some(token) = LocalSessionStore.token() else {
                return Err(LOAD_FAILED.to_string());
            };
            client::list_contracts(query, &token).await.map_err(|err| {
                tracing::warn!(
                    error = %err,
                    status = query.filter.key(),
                    page = query.page,
                    "contract list failed"
                );
                LOAD_FAILED.to_string()
            })
        }
    });

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-sky-700">"Quản lý Hợp đồng"</h1>
                <span class="text-sm text-gray-500">{move || contract_filter.filter().label()}</span>
            </div>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match contracts.get() {
                    Some(Ok(result)) if result.content.is_empty() => {
                        view! { <Alert kind=AlertKind::Info message=EMPTY /> }.into_any()
                    }
                    Some(Ok(result)) => view! { <ContractTable result=result query=query /> }.into_any(),
                    Some(Err(message)) => {
                        view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ContractTable(result: Page<ContractSummary>, query: RwSignal<ContractQuery>) -> impl IntoView {
    let has_previous = result.has_previous();
    let has_next = result.has_next();
    let summary = format!(
        "Trang {} / {} ({} hợp đồng)",
        result.number + 1,
        result.total_pages.max(1),
        result.total_elements
    );

    view! {
        <div class="overflow-x-auto rounded-xl bg-white shadow">
            <table class="min-w-full divide-y divide-gray-200 text-sm">
                <thead class="bg-sky-50 text-left text-xs font-semibold uppercase text-sky-800">
                    <tr>
                        <th class="px-4 py-3">"Số hợp đồng"</th>
                        <th class="px-4 py-3">"Khách hàng"</th>
                        <th class="px-4 py-3">"Ngày bắt đầu"</th>
                        <th class="px-4 py-3">"NV kỹ thuật"</th>
                        <th class="px-4 py-3">"Trạng thái"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    {result
                        .content
                        .into_iter()
                        .map(|contract| view! { <ContractRow contract=contract /> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
        <div class="flex items-center justify-between text-sm text-gray-600">
            <span>{summary}</span>
            <div class="space-x-2">
                <button
                    type="button"
                    class="rounded-lg border border-gray-300 px-3 py-1 disabled:opacity-50"
                    disabled={!has_previous}
                    on:click=move |_| query.update(|current| *current = current.previous_page())
                >
                    "Trước"
                </button>
                <button
                    type="button"
                    class="rounded-lg border border-gray-300 px-3 py-1 disabled:opacity-50"
                    disabled={!has_next}
                    on:click=move |_| query.update(|current| *current = current.next_page())
                >
                    "Sau"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ContractRow(contract: ContractSummary) -> impl IntoView {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "---".to_string());
    let customer = match (contract.customer_code, contract.customer_name) {
        (Some(code), Some(name)) => format!("{name} ({code})"),
        (code, name) => or_dash(name.or(code)),
    };
    let status = contract
        .contract_status
        .as_deref()
        .map(|status| contract_status_label(status).to_string())
        .unwrap_or_else(|| "---".to_string());

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-4 py-3 font-medium text-gray-900">{or_dash(contract.contract_number)}</td>
            <td class="px-4 py-3">{customer}</td>
            <td class="px-4 py-3">{or_dash(contract.start_date)}</td>
            <td class="px-4 py-3">{or_dash(contract.technical_staff_name)}</td>
            <td class="px-4 py-3">
                <span class="rounded-full bg-sky-100 px-2 py-1 text-xs font-semibold text-sky-800">
                    {status}
                </span>
            </td>
        </tr>
    }
}
