use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::forms::validate_login;
use crate::features::auth::roles::landing_path;
use crate::features::auth::state::use_auth;
use crate::features::auth::client;
use crate::features::auth::types::LoginRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const LOGIN_FALLBACK: &str = "Đăng nhập thất bại. Lỗi kết nối hoặc server.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    auth.set_session(&response);
                    navigate(landing_path(&response.role_name), Default::default());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "login failed");
                    set_error.set(Some(err.user_message(LOGIN_FALLBACK)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok((username, password)) => {
                login_action.dispatch(LoginRequest { username, password });
            }
            Err(message) => set_error.set(Some(message.to_string())),
        }
    };

    view! {
        <AppShell>
            <div class="mx-auto mt-12 max-w-sm rounded-xl bg-white p-8 shadow">
                <h1 class="mb-6 text-center text-2xl font-bold text-sky-700">"Đăng nhập"</h1>
                <form class="space-y-5" on:submit=on_submit>
                    <div>
                        <label class="mb-2 block text-sm font-medium text-gray-900" for="username">
                            "Tên đăng nhập"
                        </label>
                        <input
                            id="username"
                            type="text"
                            class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-sky-500 focus:ring-sky-500"
                            autocomplete="username"
                            on:input=move |event| set_username.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="mb-2 block text-sm font-medium text-gray-900" for="password">
                            "Mật khẩu"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-sky-500 focus:ring-sky-500"
                            autocomplete="current-password"
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}
                    <Button button_type="submit" busy=login_action.pending() busy_label="Đang đăng nhập..." full_width=true>
                        "Đăng nhập"
                    </Button>
                    <div class="text-center text-sm">
                        <A href=paths::FORGOT_PASSWORD {..} class="text-sky-700 hover:underline">
                            "Quên mật khẩu?"
                        </A>
                    </div>
                </form>
            </div>
        </AppShell>
    }
}
