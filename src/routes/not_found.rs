use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <h1 class="select-none text-8xl font-black text-gray-200">"404"</h1>
                <p class="mt-2 text-xl font-bold text-gray-900">"Không tìm thấy trang"</p>
                <p class="mt-2 max-w-sm text-gray-500">
                    "Trang bạn yêu cầu không tồn tại hoặc đã bị di chuyển."
                </p>
                <A
                    href="/"
                    {..}
                    class="mt-6 rounded-lg bg-sky-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-sky-800"
                >
                    "Về trang chủ"
                </A>
            </div>
        </AppShell>
    }
}
