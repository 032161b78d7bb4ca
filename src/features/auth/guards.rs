//! Leptos side of the route guard: browser implementations of the guard's
//! collaborators and the `RequireRole` wrapper component.

use crate::{
    app_lib::{config::AppConfig, storage::LocalSessionStore},
    components::ui::use_toasts,
    features::auth::{
        guard::{GuardOutcome, Navigator, PendingRedirect, RouteGuard, Scheduler},
        state::use_auth,
    },
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};
use std::rc::Rc;

/// Navigates through the router instead of reloading the page.
#[derive(Clone)]
pub(crate) struct RouterNavigator(Rc<dyn Fn(&str, NavigateOptions)>);

impl RouterNavigator {
    pub(crate) fn new() -> Self {
        let navigate = use_navigate();
        Self(Rc::new(move |path, options| navigate(path, options)))
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str, replace: bool) {
        (self.0)(
            path,
            NavigateOptions {
                replace,
                ..Default::default()
            },
        );
    }
}

/// Browser timer scheduler. Dropping the `Timeout` clears it.
pub(crate) struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        Timeout::new(delay_ms, task)
    }
}

/// Renders `children` only when the stored session carries `role`.
///
/// Re-evaluates whenever the session signal or `role` changes. A denied
/// evaluation shows a toast and redirects shortly after; leaving the view
/// before then cancels the redirect.
#[component]
pub fn RequireRole(#[prop(into)] role: Signal<String>, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let guard = RouteGuard::new(
        LocalSessionStore,
        use_toasts(),
        RouterNavigator::new(),
        TimeoutScheduler,
        AppConfig::load().redirect_delay_ms,
    );
    let pending = StoredValue::new_local(None::<PendingRedirect<Timeout>>);
    let allowed = RwSignal::new(false);

    Effect::new(move |_| {
        // The guard reads storage directly; the signal only tells us when to re-run.
        auth.session.track();
        let required_role = role.get();
        let outcome = guard.evaluate(&required_role);
        allowed.set(outcome.is_render());
        // Replacing the previous redirect drops it, which cancels it.
        pending.set_value(match outcome {
            GuardOutcome::Render => None,
            GuardOutcome::Redirect(redirect) => Some(redirect),
        });
    });

    on_cleanup(move || {
        pending.try_set_value(None);
    });

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
