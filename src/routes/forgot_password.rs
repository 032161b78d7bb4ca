use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::client;
use crate::features::auth::forms::validate_email;
use crate::features::auth::types::ForgotPasswordRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

const FORGOT_FALLBACK: &str = "Đã xảy ra lỗi. Vui lòng kiểm tra lại email.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let forgot_action = Action::new_local(move |request: &ForgotPasswordRequest| {
        let request = request.clone();
        async move { client::forgot_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = forgot_action.value().get() {
            match result {
                Ok(text) => set_message.set(Some(text)),
                Err(err) => {
                    tracing::warn!(error = %err, "password reset request failed");
                    set_error.set(Some(err.user_message(FORGOT_FALLBACK)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_message.set(None);
        set_error.set(None);

        match validate_email(&email.get_untracked()) {
            Ok(email) => {
                forgot_action.dispatch(ForgotPasswordRequest { email });
            }
            Err(message) => set_error.set(Some(message.to_string())),
        }
    };

    view! {
        <AppShell>
            <div class="mx-auto mt-12 max-w-sm rounded-xl bg-white p-8 shadow">
                <h1 class="mb-2 text-center text-2xl font-bold text-sky-700">"Quên mật khẩu"</h1>
                <p class="mb-6 text-center text-sm text-gray-500">
                    "Nhập email của bạn để nhận liên kết đặt lại mật khẩu."
                </p>
                <form class="space-y-5" on:submit=on_submit>
                    <input
                        type="email"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-sky-500 focus:ring-sky-500"
                        placeholder="email@example.com"
                        autocomplete="email"
                        on:input=move |event| set_email.set(event_target_value(&event))
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
                    <Button button_type="submit" busy=forgot_action.pending() full_width=true>
                        "Gửi yêu cầu"
                    </Button>
                    <div class="text-center text-sm">
                        <A href=paths::LOGIN {..} class="text-sky-700 hover:underline">
                            "Quay lại đăng nhập"
                        </A>
                    </div>
                </form>
            </div>
        </AppShell>
    }
}
