use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::client;
use crate::features::auth::forms::{normalize_token, validate_reset_password};
use crate::features::auth::types::ResetPasswordRequest;
use crate::routes::{paths, redirect::use_delayed_redirect};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

const RESET_FALLBACK: &str = "Link đã hết hạn hoặc không hợp lệ.";
const REDIRECT_DELAY_MS: u32 = 2_500;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = normalize_token(query.with_untracked(|params| params.get("token")));
    let redirect = use_delayed_redirect();

    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let reset_action = Action::new_local(move |request: &ResetPasswordRequest| {
        let request = request.clone();
        async move { client::reset_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    set_message.set(Some(
                        "Đổi mật khẩu thành công! Chuyển về trang đăng nhập...".to_string(),
                    ));
                    redirect(paths::LOGIN, REDIRECT_DELAY_MS);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "password reset failed");
                    set_error.set(Some(err.user_message(RESET_FALLBACK)));
                }
            }
        }
    });

    let Some(token) = token else {
        return view! {
            <AppShell>
                <div class="mx-auto mt-12 max-w-sm">
                    <Alert kind=AlertKind::Error message="Token không hợp lệ." />
                </div>
            </AppShell>
        }
        .into_any();
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_message.set(None);
        set_error.set(None);

        let new_password = password.get_untracked();
        if let Err(message) = validate_reset_password(&new_password, &confirmation.get_untracked()) {
            set_error.set(Some(message.to_string()));
            return;
        }
        reset_action.dispatch(ResetPasswordRequest {
            token: token.clone(),
            new_password,
        });
    };

    view! {
        <AppShell>
            <div class="mx-auto mt-12 max-w-sm rounded-xl bg-white p-8 shadow">
                <h1 class="mb-6 text-center text-2xl font-bold text-sky-700">"Đặt lại mật khẩu"</h1>
                <form class="space-y-5" on:submit=on_submit>
                    <input
                        type="password"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-sky-500 focus:ring-sky-500"
                        placeholder="Mật khẩu mới"
                        autocomplete="new-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <input
                        type="password"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-sky-500 focus:ring-sky-500"
                        placeholder="Xác nhận mật khẩu"
                        autocomplete="new-password"
                        on:input=move |event| set_confirmation.set(event_target_value(&event))
                    />
                    {move || {
                        message
                            .get()
                            .map(|text| view! { <Alert kind=AlertKind::Success message=text /> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|text| view! { <Alert kind=AlertKind::Error message=text /> })
                    }}
                    <Button button_type="submit" busy=reset_action.pending() full_width=true>
                        "Đặt lại mật khẩu"
                    </Button>
                </form>
            </div>
        </AppShell>
    }
    .into_any()
}
