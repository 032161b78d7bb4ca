//! Transient notifications stacked in the top-right corner. Route guards use
//! them to explain a redirect before it happens.

use crate::components::ui::{Alert, AlertKind};
use crate::features::auth::guard::{AccessNotice, Notifier};
use gloo_timers::future::TimeoutFuture;
use leptos::{prelude::*, task::spawn_local};

/// How long a toast stays on screen.
const TOAST_TTL_MS: u32 = 3_000;

#[derive(Clone)]
struct Toast {
    id: u64,
    kind: AlertKind,
    message: String,
}

/// Handle for pushing toasts from anywhere below [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Shows a toast and schedules its removal.
    pub fn push(&self, kind: AlertKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            });
        });

        let context = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            context.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Notifier for ToastContext {
    fn notify(&self, notice: AccessNotice) {
        self.push(AlertKind::Error, notice.message());
    }
}

/// Provides the toast context and renders the toast stack above `children`.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let context = ToastContext::new();
    provide_context(context);

    view! {
        {children()}
        <div class="fixed top-4 right-4 z-50 w-80 space-y-2" aria-live="polite">
            <For
                each=move || context.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="shadow-lg cursor-pointer" on:click=move |_| context.dismiss(id)>
                            <Alert kind=toast.kind message=toast.message />
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Returns the toast context. Outside a provider, toasts go to a detached stack.
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}
