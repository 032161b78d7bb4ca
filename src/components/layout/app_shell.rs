//! Page frame with the portal header. The header switches between a sign-in
//! link and the signed-in user's name with a link to their portal and a
//! sign-out button.

use crate::features::auth::{
    RouterNavigator, TimeoutScheduler, guard::LOGIN_PATH, logout, roles, state::use_auth,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigator = RouterNavigator::new();
    let pathname = use_location().pathname;
    let on_login = move || pathname.get() == LOGIN_PATH;

    let display_name = move || {
        auth.session
            .with(|session| session.as_ref().map(|session| session.display_name().to_string()))
            .unwrap_or_default()
    };
    let portal_path = move || {
        auth.session
            .with(|session| session.as_ref().map(|session| roles::landing_path(&session.role_name)))
            .unwrap_or("/")
            .to_string()
    };

    let sign_out = move |_| {
        tracing::info!("signing out");
        logout::sign_out(
            &navigator,
            &TimeoutScheduler,
            Box::new(move || auth.clear_session()),
        )
        .forget();
    };

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <header class="border-b border-sky-100 bg-white">
                <div class="max-w-screen-xl mx-auto flex items-center justify-between p-4">
                    <A href="/" {..} class="flex items-center gap-2">
                        <span class="text-xl font-bold text-sky-700">"WCPMS"</span>
                        <span class="hidden sm:inline text-sm text-gray-500">
                            "Hệ thống quản lý cấp nước"
                        </span>
                    </A>
                    <nav class="flex items-center gap-4 text-sm font-medium">
                        <A href="/" {..} class="text-gray-700 hover:text-sky-700">
                            "Trang chủ"
                        </A>
                        <Show
                            when=move || auth.is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <Show when=move || !on_login()>
                                        <A
                                            href=LOGIN_PATH
                                            {..}
                                            class="rounded-lg bg-sky-700 px-4 py-2 text-white hover:bg-sky-800"
                                        >
                                            "Đăng nhập"
                                        </A>
                                    </Show>
                                }
                            }
                        >
                            <A href=portal_path {..} class="text-gray-700 hover:text-sky-700">
                                {display_name}
                            </A>
                            <button
                                type="button"
                                class="rounded-lg border border-gray-300 px-4 py-2 text-gray-700 hover:bg-gray-100"
                                on:click=sign_out.clone()
                            >
                                "Đăng xuất"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">{children()}</main>
        </div>
    }
}
