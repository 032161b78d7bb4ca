//! Public landing page.

use crate::components::AppShell;
use crate::features::auth::{roles::landing_path, state::use_auth};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let portal_link = move || {
        auth.session.with(|session| {
            session
                .as_ref()
                .map(|session| landing_path(&session.role_name))
                .filter(|path| *path != "/")
        })
    };

    view! {
        <AppShell>
            <section class="mx-auto max-w-3xl px-4 py-16 text-center">
                <h1 class="text-4xl font-bold text-sky-800">"Hệ thống quản lý cấp nước"</h1>
                <p class="mt-4 text-gray-600">
                    "Quản lý hợp đồng, khách hàng và hóa đơn tiền nước trên một cổng thông tin."
                </p>
                <div class="mt-8">
                    {move || match portal_link() {
                        Some(path) => {
                            view! {
                                <A href=path {..} class="rounded-lg bg-sky-700 px-6 py-3 font-medium text-white hover:bg-sky-800">
                                    "Vào trang làm việc"
                                </A>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <A href=paths::LOGIN {..} class="rounded-lg bg-sky-700 px-6 py-3 font-medium text-white hover:bg-sky-800">
                                    "Đăng nhập"
                                </A>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </section>
        </AppShell>
    }
}
