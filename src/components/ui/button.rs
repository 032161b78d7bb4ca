use leptos::prelude::*;

/// Primary action button. Shows `busy_label` instead of its children while
/// `busy` is set, and is disabled in that state.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
    #[prop(optional)] busy_label: Option<&'static str>,
    #[prop(optional)] full_width: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let busy_label = busy_label.unwrap_or("Đang xử lý...");
    let width = if full_width { "w-full" } else { "w-auto" };

    view! {
        <button
            type=button_type
            class=format!(
                "{width} rounded-lg bg-sky-700 px-5 py-2.5 text-center text-sm font-medium text-white hover:bg-sky-800 focus:outline-none focus:ring-4 focus:ring-sky-300",
            )
            class:cursor-not-allowed=move || busy.get()
            class:opacity-70=move || busy.get()
            disabled=move || busy.get()
        >
            <Show when=move || busy.get() fallback=move || children()>
                {busy_label}
            </Show>
        </button>
    }
}
