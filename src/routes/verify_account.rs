use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::client;
use crate::features::auth::forms::normalize_token;
use crate::routes::{paths, redirect::use_delayed_redirect};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

const VERIFY_FALLBACK: &str = "Kích hoạt thất bại.";
const REDIRECT_DELAY_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Pending,
    MissingToken,
    Success,
    Error(String),
}

#[component]
pub fn VerifyAccountPage() -> impl IntoView {
    let query = use_query_map();
    let redirect = use_delayed_redirect();
    let (status, set_status) = signal(VerifyStatus::Pending);

    let verify_action = Action::new_local(move |token: &String| {
        let token = token.clone();
        async move { client::verify_account(&token).await }
    });

    match normalize_token(query.with_untracked(|params| params.get("token"))) {
        Some(token) => {
            verify_action.dispatch(token);
        }
        None => set_status.set(VerifyStatus::MissingToken),
    }

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    set_status.set(VerifyStatus::Success);
                    redirect(paths::LOGIN, REDIRECT_DELAY_MS);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "account verification failed");
                    set_status.set(VerifyStatus::Error(err.user_message(VERIFY_FALLBACK)));
                }
            }
        }
    });

    view! {
        <AppShell>
            <div class="mx-auto mt-12 max-w-lg rounded-xl bg-white p-8 shadow space-y-4">
                <h1 class="text-2xl font-bold text-sky-700">"Kích hoạt tài khoản"</h1>
                {move || match status.get() {
                    VerifyStatus::Pending => {
                        view! { <Spinner label="Đang kích hoạt tài khoản..." /> }.into_any()
                    }
                    VerifyStatus::MissingToken => {
                        view! { <Alert kind=AlertKind::Error message="Token không hợp lệ." /> }
                            .into_any()
                    }
                    VerifyStatus::Success => {
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message="Kích hoạt tài khoản thành công!"
                            />
                        }
                            .into_any()
                    }
                    VerifyStatus::Error(message) => {
                        view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
