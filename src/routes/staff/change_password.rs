use crate::app_lib::storage::LocalSessionStore;
use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::session::SessionProvider;
use crate::features::auth::state::use_auth;
use crate::features::staff::client;
use crate::features::staff::password::{
    ChangePasswordFailure, MISSING_SESSION, classify_failure, success_message,
    validate_change_password,
};
use crate::features::staff::types::ChangePasswordRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use secrecy::SecretString;

#[derive(Clone)]
struct ChangePasswordInput {
    account_id: i64,
    token: SecretString,
    request: ChangePasswordRequest,
}

#[component]
pub fn StaffChangePasswordPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let change_action = Action::new_local(move |input: &ChangePasswordInput| {
        let input = input.clone();
        async move { client::change_password(input.account_id, &input.request, &input.token).await }
    });

    let navigate_on_expiry = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(body) => {
                    set_message.set(Some(success_message(&body)));
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "password change failed");
                    let failure = classify_failure(&err);
                    set_error.set(Some(failure.message().to_string()));
                    if failure == ChangePasswordFailure::SessionExpired {
                        auth.clear_session();
                        navigate_on_expiry(paths::LOGIN, Default::default());
                    }
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_message.set(None);
        set_error.set(None);

        let request = match validate_change_password(
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                set_error.set(Some(message.to_string()));
                return;
            }
        };

        let store = LocalSessionStore;
        let (Some(session), Some(token)) = (store.load(), store.token()) else {
            set_error.set(Some(MISSING_SESSION.to_string()));
            navigate(paths::LOGIN, Default::default());
            return;
        };

        change_action.dispatch(ChangePasswordInput {
            account_id: session.id,
            token,
            request,
        });
    };

    view! {
        <div class="mx-auto max-w-md rounded-xl bg-white p-8 shadow">
            <h2 class="mb-6 text-center text-2xl font-bold text-sky-700">"Đổi mật khẩu"</h2>
            <form class="space-y-5" on:submit=on_submit>
                <PasswordField id="old-password" label="Mật khẩu hiện tại" value=old_password autocomplete="current-password" />
                <PasswordField id="new-password" label="Mật khẩu mới" value=new_password autocomplete="new-password" />
                <PasswordField id="confirm-password" label="Xác nhận mật khẩu mới" value=confirm_password autocomplete="new-password" />
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
                <Button button_type="submit" busy=change_action.pending() full_width=true>
                    "Đổi mật khẩu"
                </Button>
            </form>
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
fn PasswordField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    autocomplete: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div>
            <label class="mb-2 block text-sm font-medium text-gray-900" for=id>
                {label}
            </label>
            <div class="relative">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 pr-16 text-sm text-gray-900 focus:border-sky-500 focus:ring-sky-500"
                    autocomplete=autocomplete
                    required
                    prop:value=move || value.get()
                    on:input=move |event| value.set(event_target_value(&event))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 px-3 text-xs text-gray-500 hover:text-sky-700"
                    on:click=move |_| visible.update(|shown| *shown = !*shown)
                >
                    {move || if visible.get() { "Ẩn" } else { "Hiện" }}
                </button>
            </div>
        </div>
    }
}
