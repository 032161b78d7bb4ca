//! Read-only profile card for the signed-in staff member.

use crate::app_lib::{AppError, storage::LocalSessionStore};
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::auth::session::SessionProvider;
use crate::features::staff::client;
use leptos::prelude::*;

const MISSING_SESSION: &str = "Không tìm thấy thông tin người dùng. Vui lòng đăng nhập lại.";
const LOAD_FAILED: &str = "Không thể tải thông tin hồ sơ. Vui lòng thử lại sau.";

#[component]
pub fn StaffProfilePage() -> impl IntoView {
    let profile = LocalResource::new(move || async move {
        let store = LocalSessionStore;
        let (Some(session), Some(token)) = (store.load(), store.token()) else {
            return Err(MISSING_SESSION.to_string());
        };
        client::fetch_profile(session.id, &token)
            .await
            .map_err(|err: AppError| {
                tracing::warn!(error = %err, account_id = session.id, "profile load failed");
                LOAD_FAILED.to_string()
            })
    });

    view! {
        <div class="mx-auto max-w-2xl overflow-hidden rounded-xl bg-white shadow">
            <Suspense fallback=move || view! { <div class="p-10"><Spinner label="Đang tải thông tin..." /></div> }>
                {move || match profile.get() {
                    Some(Ok(profile)) => {
                        let active = profile.is_active();
                        let created_on = profile.created_on();
                        let last_login = profile.last_login_label();
                        view! {
                            <div class="flex items-center justify-between bg-sky-600 px-6 py-5 text-white">
                                <h2 class="text-2xl font-bold">"Hồ Sơ Nhân Viên"</h2>
                                <span
                                    class="rounded-full px-3 py-1 text-xs font-semibold"
                                    class:bg-green-100=active
                                    class:text-green-700=active
                                    class:bg-red-100={!active}
                                    class:text-red-800={!active}
                                >
                                    {profile.status_label()}
                                </span>
                            </div>
                            <dl class="divide-y divide-gray-200 px-8 py-6">
                                {profile
                                    .rows()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <div class="grid grid-cols-[10rem_1fr] gap-4 py-4">
                                                <dt class="text-sm font-semibold text-gray-500">{row.label}</dt>
                                                <dd
                                                    class="break-words text-right text-sm font-medium text-gray-800"
                                                    class:text-sky-700=row.highlight
                                                    class:font-bold=row.highlight
                                                >
                                                    {row.value}
                                                </dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                            <div class="flex justify-between border-t border-gray-200 bg-gray-50 px-8 py-4 text-xs text-gray-500">
                                <span>{format!("Ngày tạo: {created_on}")}</span>
                                <span>{format!("Đăng nhập lần cuối: {last_login}")}</span>
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(message)) => {
                        view! {
                            <div class="p-6">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <div class="p-10"><Spinner label="Đang tải thông tin..." /></div> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
