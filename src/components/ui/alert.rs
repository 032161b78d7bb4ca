//! Inline banners for form feedback and toasts. Messages come from the backend
//! or from fixed strings and are rendered as text, never as HTML.

use leptos::prelude::*;

/// Supported alert styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            }
            AlertKind::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
            }
            AlertKind::Info => {
                "rounded-lg border border-sky-200 bg-sky-50 px-4 py-3 text-sm text-sky-700"
            }
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let role = if kind == AlertKind::Error { "alert" } else { "status" };
    view! { <div class=kind.class() role=role>{message}</div> }
}
