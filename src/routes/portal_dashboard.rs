use crate::features::auth::state::use_auth;
use crate::features::portal::Portal;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing view of a staff portal: a greeting and shortcuts to the menu.
#[component]
pub fn PortalDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let Some(portal) = use_context::<Portal>() else {
        return ().into_any();
    };
    let greeting = move || {
        auth.session
            .with(|session| session.as_ref().map(|session| session.display_name().to_string()))
            .map(|name| format!("Xin chào, {name}"))
            .unwrap_or_default()
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-sky-700">{portal.title}</h1>
                <p class="mt-1 text-gray-600">{greeting}</p>
            </div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {portal
                    .menu()
                    .into_iter()
                    .skip(1)
                    .map(|item| {
                        view! {
                            <A
                                href=item.path
                                {..}
                                class="block rounded-xl border border-sky-100 bg-white p-5 shadow-sm hover:border-sky-300"
                            >
                                <span class="font-semibold text-gray-800">{item.label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
