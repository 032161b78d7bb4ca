use crate::{
    components::layout::{AppShell, Sidebar},
    features::{auth::RequireRole, contracts::state::provide_contract_filter, portal::Portal},
};
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Frame for a staff portal subtree: header, sidebar and the nested route,
/// all behind the portal's role guard.
#[component]
pub fn PortalLayout(portal: Portal) -> impl IntoView {
    provide_context(portal);
    if portal.manages_contracts {
        provide_contract_filter();
    }

    view! {
        <AppShell>
            <RequireRole role=portal.role.to_string()>
                <div class="flex min-h-[calc(100vh-4.5rem)]">
                    <Sidebar portal=portal />
                    <section class="flex-1 p-6">
                        <Outlet />
                    </section>
                </div>
            </RequireRole>
        </AppShell>
    }
}
