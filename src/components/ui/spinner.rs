use leptos::prelude::*;

/// Loading indicator with an optional caption next to it.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 text-sm text-gray-500" role="status" aria-live="polite">
            <div class="inline-block h-6 w-6 animate-spin rounded-full border-4 border-sky-200 border-t-sky-600"></div>
            <span>{label.unwrap_or("Đang tải...")}</span>
        </div>
    }
}
